//! # Graph API Rust Client
//!
//! An async client for the Facebook Graph API: authenticated GET, POST and
//! DELETE requests, typed JSON decoding with `serde`, and classified API
//! errors.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`GraphClient`], built manually or from configuration
//! - Request URL construction against `https://graph.facebook.com/`, with
//!   optional `v<version>/` segments and the `access_token` parameter
//! - Classification of API failures into [`ApiError::OAuth`],
//!   [`ApiError::RateLimit`] and [`ApiError::Api`], each carrying the full
//!   [`ErrorEnvelope`]
//! - Per-request cancellation via `tokio_util::sync::CancellationToken`
//! - A pluggable [`Transport`] with a `reqwest`-backed default
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use graph_api::{ApiVersion, GraphClient};
//!
//! let client = GraphClient::new("EAAB...", Some(ApiVersion::new("19.0")?))?;
//! let me = client.get_value("me?fields=id,name").await?;
//! println!("Hello {}", me["name"]);
//! ```
//!
//! ## Configuration
//!
//! Applications that keep the API version in process-wide configuration
//! resolve it once through a [`ConfigProvider`]:
//!
//! ```rust
//! use graph_api::config::{EnvConfigProvider, DEFAULT_CONFIG_SECTION};
//! use graph_api::GraphClient;
//!
//! // Reads FACEBOOKAPI__APIVERSION and FACEBOOKAPI__ACCESSTOKEN
//! let client = GraphClient::from_provider(&EnvConfigProvider::new(), DEFAULT_CONFIG_SECTION).unwrap();
//! client.set_access_token("rotated-token");
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use graph_api::{ApiError, GraphError};
//!
//! match client.get_value("me").await {
//!     Err(GraphError::Api(ApiError::RateLimit(envelope))) => { /* back off */ }
//!     Err(GraphError::Api(ApiError::OAuth(envelope))) => { /* refresh token */ }
//!     other => { /* ... */ }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is resolved once and passed explicitly
//! - **No hidden policy**: No retries, caching or backoff; errors are returned as-is
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiVersion, ConfigProvider, GraphApiConfig, GraphApiConfigBuilder};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    build_request_url, ApiError, ApiErrorKind, ErrorEnvelope, GraphClient, GraphError,
    HttpMethod, ReqwestTransport, Transport, TransportRequest, TransportResponse,
};
