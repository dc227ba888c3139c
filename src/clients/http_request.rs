//! Request types handed to a [`Transport`](crate::clients::Transport).

use std::fmt;

/// HTTP methods used by the Graph API client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for reading objects and edges.
    Get,
    /// HTTP POST method for creating or updating objects.
    Post,
    /// HTTP DELETE method for removing objects.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Content type of JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A fully-built request ready to be sent.
///
/// The URL already carries the access token, so `Debug` output redacts the
/// query string.
#[derive(Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute URL, including the `access_token` parameter.
    pub url: String,
    /// The JSON-encoded body, if any.
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// Creates a request without a body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    /// Attaches a JSON-encoded body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the URL with its query string removed.
    #[must_use]
    pub fn redacted_url(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }
}

impl fmt::Debug for TransportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportRequest")
            .field("method", &self.method)
            .field("url", &format_args!("{}?<redacted>", self.redacted_url()))
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}
