//! HTTP request builder

use canvaskit_transport::HttpRequest;
use http::{HeaderMap, HeaderName, HeaderValue, Method, header};
use url::Url;

use super::Credentials;
use crate::error::{Error, Result};
use crate::json::{JsonDictionary, JsonValue};

/// Default `Content-Type` of request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// `Content-Type` of form-encoded bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Default)]
enum Payload {
    #[default]
    None,
    Parameters(JsonDictionary),
    Form(Vec<(String, String)>),
}

/// Builder for outgoing requests.
///
/// Read requests (`GET`, `HEAD`) carry string parameters in the query
/// string; other methods carry them as a JSON body.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    base_url: Url,
    path: String,
    payload: Payload,
    content_type: Option<String>,
    credentials: Option<Credentials>,
    headers: HeaderMap,
}

impl RequestBuilder {
    /// Create a request for `path`, relative to `base_url`.
    pub fn new(method: Method, base_url: &Url, path: impl Into<String>) -> Self {
        Self {
            method,
            base_url: base_url.clone(),
            path: path.into(),
            payload: Payload::None,
            content_type: None,
            credentials: None,
            headers: HeaderMap::new(),
        }
    }

    /// Set the parameter mapping.
    pub fn parameters(mut self, parameters: JsonDictionary) -> Self {
        self.payload = Payload::Parameters(parameters);
        self
    }

    /// Send `pairs` as a form-encoded body.
    pub fn form<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.payload = Payload::Form(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Override the `Content-Type` header.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Add a header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Add every header in `headers`.
    pub fn headers(mut self, headers: &HeaderMap) -> Self {
        for (name, value) in headers {
            self.headers.insert(name.clone(), value.clone());
        }
        self
    }

    /// The request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request path, relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn is_read(&self) -> bool {
        self.method == Method::GET || self.method == Method::HEAD
    }

    /// Build the transport request. Performs no I/O.
    pub fn build(self) -> Result<HttpRequest> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidUrl(format!("{} cannot be a base", self.base_url)))?;
            segments.pop_if_empty();
            segments.extend(self.path.split('/').filter(|s| !s.is_empty()));
        }

        let mut body = None;
        let mut content_type = self
            .content_type
            .clone()
            .unwrap_or_else(|| JSON_CONTENT_TYPE.to_string());

        match &self.payload {
            Payload::None => {}
            Payload::Parameters(parameters) if self.is_read() => {
                let query: Vec<(&str, &str)> = parameters
                    .iter()
                    .filter_map(|(name, value)| match value {
                        JsonValue::String(text) => Some((name.as_str(), text.as_str())),
                        other => {
                            tracing::warn!(
                                method = %self.method,
                                path = %self.path,
                                parameter = %name,
                                value = %other,
                                "dropping non-string query parameter"
                            );
                            None
                        }
                    })
                    .collect();
                if !query.is_empty() {
                    url.query_pairs_mut().extend_pairs(query);
                }
            }
            Payload::Parameters(parameters) => {
                body = Some(serde_json::to_vec(parameters)?);
            }
            Payload::Form(pairs) => {
                let encoded = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(pairs)
                    .finish();
                body = Some(encoded.into_bytes());
                if self.content_type.is_none() {
                    content_type = FORM_CONTENT_TYPE.to_string();
                }
            }
        }

        let mut request = HttpRequest::new(self.method.clone(), url);
        request.headers = self.headers;
        request.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(&content_type)
                .map_err(|_| Error::InvalidHeaderValue(content_type.clone()))?,
        );
        request.headers.insert(
            header::ACCEPT,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        );
        request.headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static(crate::USER_AGENT),
        );
        if let Some(credentials) = &self.credentials {
            let (name, value) = credentials.header()?;
            request.headers.insert(name, value);
        }
        request.body = body;

        Ok(request)
    }
}
