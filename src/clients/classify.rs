//! Response classification.
//!
//! Only `200 OK` counts as success. Any other status must carry an
//! `{"error": {...}}` envelope, which is classified into an [`ApiError`].

use serde::Deserialize;

use crate::clients::errors::{
    ApiError, ErrorEnvelope, GraphError, OAUTH_EXCEPTION_TYPE, RATE_LIMIT_CODES,
};

/// Status code treated as success.
pub const SUCCESS_STATUS: u16 = 200;

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorEnvelope,
}

/// Classifies a decoded error envelope.
///
/// # Example
///
/// ```rust
/// use graph_api::clients::{classify, ApiErrorKind, ErrorEnvelope};
///
/// let envelope = ErrorEnvelope {
///     message: "limit".to_string(),
///     error_type: "Other".to_string(),
///     code: 17,
///     ..ErrorEnvelope::default()
/// };
/// assert_eq!(classify(envelope).kind(), ApiErrorKind::RateLimit);
/// ```
#[must_use]
pub fn classify(envelope: ErrorEnvelope) -> ApiError {
    if envelope.error_type.eq_ignore_ascii_case(OAUTH_EXCEPTION_TYPE) {
        ApiError::OAuth(envelope)
    } else if RATE_LIMIT_CODES.contains(&envelope.code) {
        ApiError::RateLimit(envelope)
    } else {
        ApiError::Api(envelope)
    }
}

/// Decodes the error envelope from a failure response body.
///
/// # Errors
///
/// Returns [`GraphError::MalformedEnvelope`] if the body is not JSON or has no
/// `"error"` object.
pub fn parse_envelope(code: u16, body: &[u8]) -> Result<ErrorEnvelope, GraphError> {
    serde_json::from_slice::<ErrorResponse>(body)
        .map(|response| response.error)
        .map_err(|source| GraphError::MalformedEnvelope { code, source })
}

/// Returns `Ok(())` for a `200 OK` response and the classified error otherwise.
///
/// # Errors
///
/// Returns [`GraphError::Api`] with the classified envelope for any status
/// other than 200, or [`GraphError::MalformedEnvelope`] if the envelope cannot
/// be decoded.
pub fn ensure_success(code: u16, body: &[u8]) -> Result<(), GraphError> {
    if code == SUCCESS_STATUS {
        return Ok(());
    }

    let error = classify(parse_envelope(code, body)?);
    tracing::trace!(
        status = code,
        error_code = error.code(),
        kind = ?error.kind(),
        "Graph API returned an error"
    );
    Err(error.into())
}
