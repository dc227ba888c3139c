//! Request URL construction.
//!
//! Relative targets are resolved against [`GRAPH_API_ORIGIN`], optionally
//! prefixed with a `v<version>/` segment. Absolute targets (anything starting
//! with `http`, in any case) are used as given. The access token is always
//! appended as the `access_token` query parameter.

use crate::config::ApiVersion;

/// Origin that relative request targets are resolved against.
pub const GRAPH_API_ORIGIN: &str = "https://graph.facebook.com/";

/// Returns `true` if `target` is an absolute URL.
fn is_absolute(target: &str) -> bool {
    target
        .get(..4)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("http"))
}

/// Builds the fully-qualified, authenticated URL for a request.
///
/// A version set explicitly on the client wins over a configured one. Neither
/// is applied to absolute targets.
///
/// # Example
///
/// ```rust
/// use graph_api::clients::build_request_url;
/// use graph_api::ApiVersion;
///
/// let version = ApiVersion::new("19.0").unwrap();
///
/// assert_eq!(
///     build_request_url(Some("/me?fields=id"), "token", Some(&version), None),
///     "https://graph.facebook.com/v19.0/me?fields=id&access_token=token"
/// );
/// assert_eq!(
///     build_request_url(Some("https://example.com/cb"), "token", Some(&version), None),
///     "https://example.com/cb?access_token=token"
/// );
/// ```
#[must_use]
pub fn build_request_url(
    target: Option<&str>,
    access_token: &str,
    explicit_version: Option<&ApiVersion>,
    configured_version: Option<&ApiVersion>,
) -> String {
    let target = target.unwrap_or_default();
    let mut url = String::with_capacity(
        GRAPH_API_ORIGIN.len() + 16 + target.len() + access_token.len(),
    );

    if !is_absolute(target) {
        url.push_str(GRAPH_API_ORIGIN);
        if let Some(version) = explicit_version.or(configured_version) {
            url.push_str(&version.path_segment());
        }
    }

    url.push_str(target.strip_prefix('/').unwrap_or(target));
    url.push(if target.contains('?') { '&' } else { '?' });
    url.push_str("access_token=");
    url.push_str(access_token);

    url
}
