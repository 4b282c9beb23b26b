//! Error types for the canvaskit SDK
//!
//! Every request ends in exactly one [`Result`]. Failures carry a single
//! human-readable message (their `Display`), and decode failures additionally
//! name the field that could not be decoded.

use canvaskit_transport::TransportError;
use thiserror::Error;

/// Result type alias for operations that can fail with an SDK error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport failed before a response existed.
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// The response body was not the expected document shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The server answered with an `errors` payload.
    #[error("{0}")]
    ServerError(String),

    /// A resource in the response could not be decoded into its domain type.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Invalid URL provided or produced.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request parameters could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Missing required configuration.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// The completion queue stopped before the result could be delivered.
    #[error("Completion queue closed before the request finished")]
    CompletionQueueClosed,

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        /// Context description
        context: String,
        /// Underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context<C>(self, context: C) -> Self
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        Error::WithContext {
            context: context.to_string(),
            source: Box::new(self),
        }
    }

    /// The decode failure behind this error, if any.
    pub fn as_decode_error(&self) -> Option<&DecodeError> {
        match self {
            Error::Decode(err) => Some(err),
            _ => None,
        }
    }
}

/// A failure to decode one resource into a domain type.
///
/// Every variant names the offending field. Failures inside a related
/// resource carry the relation names leading to it, joined with dots
/// (`org.slug`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The attribute is absent or null.
    #[error("{0}: missing attribute")]
    MissingAttribute(String),

    /// The relationship, its linkage, or its included target is absent.
    #[error("{0}: missing relationship")]
    MissingRelationship(String),

    /// The value exists but has the wrong JSON type.
    #[error("{field}: expected {expected}, found {actual}")]
    TypeMismatch {
        /// Field path
        field: String,
        /// What the decoder asked for
        expected: String,
        /// What the document contained
        actual: String,
    },
}

impl DecodeError {
    /// Dotted path of the field that failed to decode.
    pub fn field(&self) -> &str {
        match self {
            DecodeError::MissingAttribute(field)
            | DecodeError::MissingRelationship(field)
            | DecodeError::TypeMismatch { field, .. } => field,
        }
    }

    /// Attribute this error to a field reached through `relation`.
    pub(crate) fn within(self, relation: &str) -> Self {
        let prefix = |field: String| format!("{relation}.{field}");
        match self {
            DecodeError::MissingAttribute(field) => DecodeError::MissingAttribute(prefix(field)),
            DecodeError::MissingRelationship(field) => {
                DecodeError::MissingRelationship(prefix(field))
            }
            DecodeError::TypeMismatch {
                field,
                expected,
                actual,
            } => DecodeError::TypeMismatch {
                field: prefix(field),
                expected,
                actual,
            },
        }
    }
}
