//! Error types for Graph API requests.
//!
//! # Error Handling
//!
//! Every request operation returns [`GraphError`]. Failures the API itself
//! reports are classified into [`ApiError`]:
//!
//! - [`ApiError::OAuth`]: the envelope type is `OAuthException` (expired or
//!   invalid token, missing permission)
//! - [`ApiError::RateLimit`]: the envelope code is one of [`RATE_LIMIT_CODES`];
//!   the caller should back off
//! - [`ApiError::Api`]: any other API-reported failure
//!
//! Each variant keeps the full [`ErrorEnvelope`]. The client never retries;
//! policy is left to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use graph_api::clients::{ApiError, GraphError};
//!
//! match client.get_value("me").await {
//!     Ok(me) => println!("Hello {}", me["name"]),
//!     Err(GraphError::Api(ApiError::RateLimit(envelope))) => {
//!         println!("Throttled (#{}), try again later", envelope.code);
//!     }
//!     Err(GraphError::Api(ApiError::OAuth(envelope))) => {
//!         println!("Token rejected: {}", envelope.message);
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::error::ConfigError;

/// Envelope codes reported when an application, user or page is throttled.
///
/// - `4`: application request limit reached
/// - `17`: user request limit reached
/// - `32`: page request limit reached
/// - `613`: calls within one hour exceeded the rate limit
pub const RATE_LIMIT_CODES: [i64; 4] = [4, 17, 32, 613];

/// Envelope type reported for authentication failures.
pub const OAUTH_EXCEPTION_TYPE: &str = "OAuthException";

/// The error payload the API returns under the top-level `"error"` key.
///
/// Scalar fields that are missing or `null` default to an empty string or `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Human-readable description of the error.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// Error type, e.g. `OAuthException`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub error_type: String,
    /// Numeric error code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i64,
    /// Additional detail code.
    #[serde(rename = "error_subcode", default, skip_serializing_if = "Option::is_none")]
    pub subcode: Option<i64>,
    /// Title suitable for display to the end user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_user_title: Option<String>,
    /// Message suitable for display to the end user.
    #[serde(rename = "error_user_msg", default, skip_serializing_if = "Option::is_none")]
    pub error_user_message: Option<String>,
    /// Internal support identifier for the failed request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fbtrace_id: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error_type = if self.error_type.is_empty() {
            "Unknown"
        } else {
            &self.error_type
        };
        write!(f, "({error_type} - #{}) {}", self.code, self.message)
    }
}

/// The category a failure envelope was classified into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Authentication failure.
    OAuth,
    /// Rate or usage limit reached.
    RateLimit,
    /// Any other API error.
    Api,
}

/// An error reported by the API, classified by its envelope.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The access token was rejected (`OAuthException`).
    #[error("{0}")]
    OAuth(ErrorEnvelope),

    /// A request or usage limit was reached.
    #[error("{0}")]
    RateLimit(ErrorEnvelope),

    /// Any other API-reported failure.
    #[error("{0}")]
    Api(ErrorEnvelope),
}

impl ApiError {
    /// Returns the envelope the API reported.
    #[must_use]
    pub const fn envelope(&self) -> &ErrorEnvelope {
        match self {
            Self::OAuth(envelope) | Self::RateLimit(envelope) | Self::Api(envelope) => envelope,
        }
    }

    /// Consumes the error and returns the envelope.
    #[must_use]
    pub fn into_envelope(self) -> ErrorEnvelope {
        match self {
            Self::OAuth(envelope) | Self::RateLimit(envelope) | Self::Api(envelope) => envelope,
        }
    }

    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        match self {
            Self::OAuth(_) => ApiErrorKind::OAuth,
            Self::RateLimit(_) => ApiErrorKind::RateLimit,
            Self::Api(_) => ApiErrorKind::Api,
        }
    }

    /// Returns `true` for authentication failures.
    #[must_use]
    pub const fn is_oauth(&self) -> bool {
        matches!(self, Self::OAuth(_))
    }

    /// Returns `true` when the caller should back off before retrying.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimit(_))
    }

    /// Returns the envelope's error code.
    #[must_use]
    pub const fn code(&self) -> i64 {
        self.envelope().code
    }
}

/// Unified error type for Graph API requests.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The API reported a failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A failure response did not carry a readable error envelope.
    #[error("Unexpected error response with status {code}: {source}")]
    MalformedEnvelope {
        /// The HTTP status code of the response.
        code: u16,
        /// The reason the body could not be decoded.
        source: serde_json::Error,
    },

    /// A successful response body did not match the requested shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request was cancelled before a response was received.
    #[error("Request was cancelled")]
    Cancelled,

    /// The client could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GraphError {
    /// Returns the classified API error, if this is one.
    #[must_use]
    pub const fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(error_type: &str, code: i64, message: &str) -> ErrorEnvelope {
        ErrorEnvelope {
            message: message.to_string(),
            error_type: error_type.to_string(),
            code,
            ..ErrorEnvelope::default()
        }
    }

    #[test]
    fn test_api_error_message_includes_type_and_code() {
        let error = ApiError::OAuth(envelope("OAuthException", 190, "Invalid OAuth access token."));
        assert_eq!(
            error.to_string(),
            "(OAuthException - #190) Invalid OAuth access token."
        );
    }

    #[test]
    fn test_api_error_message_with_missing_type() {
        let error = ApiError::Api(envelope("", 1, "An unknown error occurred"));
        assert_eq!(error.to_string(), "(Unknown - #1) An unknown error occurred");
    }

    #[test]
    fn test_envelope_deserializes_all_fields() {
        let envelope: ErrorEnvelope = serde_json::from_str(
            r#"{
                "message": "Message describing the error",
                "type": "OAuthException",
                "code": 190,
                "error_subcode": 460,
                "error_user_title": "A title",
                "error_user_msg": "A message",
                "fbtrace_id": "EJplcsCHuLu"
            }"#,
        )
        .unwrap();

        assert_eq!(envelope.message, "Message describing the error");
        assert_eq!(envelope.error_type, "OAuthException");
        assert_eq!(envelope.code, 190);
        assert_eq!(envelope.subcode, Some(460));
        assert_eq!(envelope.error_user_title.as_deref(), Some("A title"));
        assert_eq!(envelope.error_user_message.as_deref(), Some("A message"));
        assert_eq!(envelope.fbtrace_id.as_deref(), Some("EJplcsCHuLu"));
    }

    #[test]
    fn test_envelope_defaults_missing_fields() {
        let envelope: ErrorEnvelope = serde_json::from_str(r#"{"message":"bad"}"#).unwrap();

        assert_eq!(envelope.message, "bad");
        assert_eq!(envelope.error_type, "");
        assert_eq!(envelope.code, 0);
        assert!(envelope.subcode.is_none());
        assert!(envelope.error_user_title.is_none());
    }

    #[test]
    fn test_kind_and_predicates() {
        let oauth = ApiError::OAuth(envelope("OAuthException", 190, "x"));
        let limit = ApiError::RateLimit(envelope("Other", 17, "x"));
        let other = ApiError::Api(envelope("Other", 100, "x"));

        assert_eq!(oauth.kind(), ApiErrorKind::OAuth);
        assert_eq!(limit.kind(), ApiErrorKind::RateLimit);
        assert_eq!(other.kind(), ApiErrorKind::Api);

        assert!(oauth.is_oauth());
        assert!(limit.is_rate_limited());
        assert!(!other.is_oauth() && !other.is_rate_limited());
        assert_eq!(limit.code(), 17);
    }

    #[test]
    fn test_envelope_treats_null_scalars_as_defaults() {
        let envelope: ErrorEnvelope =
            serde_json::from_str(r#"{"message":null,"type":null,"code":null,"error_subcode":null}"#)
                .unwrap();

        assert_eq!(envelope, ErrorEnvelope::default());
    }

    #[test]
    fn test_into_envelope_preserves_fields() {
        let original = ErrorEnvelope {
            subcode: Some(33),
            error_user_title: Some("Title".to_string()),
            error_user_message: Some("Shown to the user".to_string()),
            ..envelope("Other", 100, "bad")
        };
        let error = ApiError::Api(original.clone());
        assert_eq!(error.envelope(), &original);
        assert_eq!(error.into_envelope(), original);
    }

    #[test]
    fn test_graph_error_wraps_api_error() {
        let error: GraphError = ApiError::RateLimit(envelope("Other", 613, "Calls exceeded")).into();

        assert!(error.as_api_error().is_some_and(ApiError::is_rate_limited));
        assert_eq!(error.to_string(), "(Other - #613) Calls exceeded");
    }

    #[test]
    fn test_cancelled_message() {
        assert_eq!(GraphError::Cancelled.to_string(), "Request was cancelled");
        assert!(GraphError::Cancelled.as_api_error().is_none());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let api_error: &dyn std::error::Error = &ApiError::Api(ErrorEnvelope::default());
        let _ = api_error;

        let graph_error: &dyn std::error::Error = &GraphError::Cancelled;
        let _ = graph_error;
    }
}
