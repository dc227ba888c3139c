//! Property-style tests for request URL construction.
//!
//! These tests run a spread of targets through the builder and check the
//! invariants every built URL must satisfy.

use graph_api::clients::{build_request_url, GRAPH_API_ORIGIN};
use graph_api::config::{MapConfigProvider, DEFAULT_CONFIG_SECTION};
use graph_api::{ApiVersion, GraphClient};

const RELATIVE_TARGETS: &[&str] = &[
    "me",
    "/me",
    "me/accounts",
    "/1234567890/feed",
    "act_42/campaigns",
    "",
    "/",
    "search",
];

const ABSOLUTE_TARGETS: &[&str] = &[
    "https://graph.facebook.com/v2.0/me",
    "http://localhost:8080/me",
    "HTTPS://GRAPH.FACEBOOK.COM/me",
    "Http://example.com/",
];

#[test]
fn test_relative_targets_without_version_end_with_single_token_param() {
    for &target in RELATIVE_TARGETS {
        let url = build_request_url(Some(target), "tok", None, None);

        assert!(url.starts_with(GRAPH_API_ORIGIN), "{url}");
        assert!(url.ends_with("?access_token=tok"), "{url}");
        assert_eq!(url.matches("access_token=").count(), 1, "{url}");
        assert_eq!(url.matches('?').count(), 1, "{url}");
        assert!(!url[GRAPH_API_ORIGIN.len()..].starts_with("v19"), "{url}");
    }
}

#[test]
fn test_relative_targets_with_version_have_one_segment_after_origin() {
    let version = ApiVersion::new("19.0").unwrap();

    for &target in RELATIVE_TARGETS {
        let url = build_request_url(Some(target), "tok", Some(&version), None);
        let expected_prefix = format!("{GRAPH_API_ORIGIN}v19.0/");

        assert!(url.starts_with(&expected_prefix), "{url}");
        assert_eq!(url.matches("v19.0/").count(), 1, "{url}");

        let rest = &url[expected_prefix.len()..];
        let stripped = target.strip_prefix('/').unwrap_or(target);
        assert!(rest.starts_with(stripped), "{url}");
    }
}

#[test]
fn test_leading_slash_never_doubles_separator() {
    let version = ApiVersion::new("19.0").unwrap();

    for target in RELATIVE_TARGETS.iter().copied().filter(|t| t.starts_with('/')) {
        for v in [None, Some(&version)] {
            let url = build_request_url(Some(target), "tok", v, None);
            let after_scheme = url.trim_start_matches("https://");
            assert!(!after_scheme.contains("//"), "{url}");
        }
    }
}

#[test]
fn test_absolute_targets_ignore_origin_and_version() {
    let version = ApiVersion::new("19.0").unwrap();

    for &target in ABSOLUTE_TARGETS {
        let url = build_request_url(Some(target), "tok", Some(&version), Some(&version));

        assert_eq!(url, format!("{target}?access_token=tok"));
        assert!(!url.contains("v19.0"), "{url}");
    }
}

#[test]
fn test_targets_with_query_get_ampersand() {
    let targets = [
        "me?fields=id",
        "/me?fields=id,name&limit=5",
        "https://graph.facebook.com/me?fields=id",
    ];

    for target in targets {
        let url = build_request_url(Some(target), "tok", None, None);

        assert!(url.ends_with("&access_token=tok"), "{url}");
        assert_eq!(url.matches('?').count(), 1, "{url}");
    }
}

#[test]
fn test_client_resolves_version_from_provider_once() {
    let provider = MapConfigProvider::new().with(DEFAULT_CONFIG_SECTION, "ApiVersion", "17.0");
    let client = GraphClient::from_provider(&provider, DEFAULT_CONFIG_SECTION).unwrap();

    assert_eq!(
        client.request_url("me"),
        "https://graph.facebook.com/v17.0/me?access_token="
    );

    let overridden = GraphClient::from_provider(&provider, DEFAULT_CONFIG_SECTION)
        .unwrap()
        .with_api_version(ApiVersion::new("19.0").unwrap());
    assert_eq!(
        overridden.request_url("me"),
        "https://graph.facebook.com/v19.0/me?access_token="
    );
}

#[test]
fn test_client_without_any_version_has_no_segment() {
    let client = GraphClient::new("tok", None).unwrap();

    assert!(client.api_version().is_none());
    assert_eq!(
        client.request_url(""),
        "https://graph.facebook.com/?access_token=tok"
    );
}
