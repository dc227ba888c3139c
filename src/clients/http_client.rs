//! Transport seam and the default `reqwest` implementation.
//!
//! [`GraphClient`](crate::clients::GraphClient) builds URLs and classifies
//! responses itself; a [`Transport`] only moves bytes. Connection pooling,
//! TLS, compression and timeouts belong to the transport.

use async_trait::async_trait;

use crate::clients::errors::GraphError;
use crate::clients::http_request::{HttpMethod, TransportRequest, JSON_CONTENT_TYPE};
use crate::clients::http_response::TransportResponse;
use crate::config::GraphApiConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Performs a single HTTP round trip.
///
/// Implementations must not retry and must not interpret the status code;
/// every response, successful or not, is returned as a [`TransportResponse`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Network`] (or another [`GraphError`]) when no
    /// response could be obtained.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, GraphError>;
}

/// [`Transport`] backed by a `reqwest` client.
///
/// Every request sends `Accept: application/json`, negotiates gzip and
/// deflate compression, and identifies itself with a `User-Agent` of
/// `[<prefix> | ]Graph API Library v<version> | Rust <rust-version>`.
///
/// # Thread Safety
///
/// `ReqwestTransport` is `Send + Sync` and cheap to clone; clones share the
/// connection pool.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    user_agent: String,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport with a fresh `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Network`] if the underlying client cannot be
    /// created (e.g. TLS initialization failure).
    pub fn new(config: Option<&GraphApiConfig>) -> Result<Self, GraphError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .gzip(true)
            .deflate(true)
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a transport around an existing `reqwest` client.
    ///
    /// Use this to share a connection pool or to customize timeouts and
    /// proxies.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: Option<&GraphApiConfig>) -> Self {
        let user_agent_prefix = config
            .and_then(GraphApiConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Graph API Library v{SDK_VERSION} | Rust {rust_version}");

        Self { client, user_agent }
    }

    /// Returns the `User-Agent` header value sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, GraphError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        }
        .header(reqwest::header::ACCEPT, JSON_CONTENT_TYPE)
        .header(reqwest::header::USER_AGENT, &self.user_agent);

        if let Some(body) = request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(body);
        }

        let response = builder.send().await?;
        let code = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(TransportResponse::new(code, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_user_agent_header_format() {
        let transport = ReqwestTransport::new(None).unwrap();

        assert!(transport.user_agent().starts_with("Graph API Library v"));
        assert!(transport.user_agent().contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = GraphApiConfig::builder()
            .user_agent_prefix("MyApp/1.0")
            .build();
        let transport = ReqwestTransport::new(Some(&config)).unwrap();

        assert!(transport.user_agent().starts_with("MyApp/1.0 | "));
        assert!(transport.user_agent().contains("Graph API Library"));
    }

    #[test]
    fn test_transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestTransport>();
    }

    #[tokio::test]
    async fn test_send_returns_error_statuses_without_interpreting_them() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(400).set_body_string("{\"error\":{}}"))
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new(None).unwrap();
        let response = transport
            .send(TransportRequest::new(
                HttpMethod::Get,
                format!("{}/me?access_token=t", mock_server.uri()),
            ))
            .await
            .unwrap();

        assert_eq!(response.code, 400);
        assert_eq!(response.body, b"{\"error\":{}}".to_vec());
    }

    #[tokio::test]
    async fn test_send_posts_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/me/feed"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"message": "hello"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "1"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new(None).unwrap();
        let response = transport
            .send(
                TransportRequest::new(HttpMethod::Post, format!("{}/me/feed", mock_server.uri()))
                    .with_body(br#"{"message":"hello"}"#.to_vec()),
            )
            .await
            .unwrap();

        assert_eq!(response.code, 200);
    }

    #[tokio::test]
    async fn test_send_maps_connection_failure_to_network_error() {
        let transport = ReqwestTransport::new(None).unwrap();
        let result = transport
            .send(TransportRequest::new(HttpMethod::Get, "http://127.0.0.1:1/"))
            .await;

        assert!(matches!(result, Err(GraphError::Network(_))));
    }
}
