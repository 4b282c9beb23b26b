//! Transport error types

use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur before a response exists.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(String),

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request did not finish within the configured timeout
    #[error("The request timed out")]
    Timeout,

    /// Transport configuration error
    #[error("Transport configuration error: {0}")]
    Config(String),

    /// Generic transport error
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            TransportError::Connection("refused".into()).to_string(),
            "Connection error: refused"
        );
        assert_eq!(TransportError::Timeout.to_string(), "The request timed out");
        assert_eq!(TransportError::Other("boom".into()).to_string(), "boom");
    }
}
