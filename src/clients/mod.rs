//! HTTP client types for Graph API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`GraphClient`]: The async client with `get()`, `post()` and `delete()` methods
//! - [`build_request_url`]: Resolves a target into an authenticated URL
//! - [`ensure_success`] and [`classify`]: Response classification
//! - [`GraphError`]: Unified error type for requests
//! - [`ApiError`]: API-reported failures, classified by [`ApiErrorKind`]
//! - [`ErrorEnvelope`]: The error payload carried by every [`ApiError`]
//! - [`Transport`]: The HTTP seam, implemented by [`ReqwestTransport`]
//!
//! # Example
//!
//! ```rust,ignore
//! use graph_api::clients::{ApiError, GraphClient, GraphError};
//!
//! let client = GraphClient::new("access-token", None)?;
//!
//! match client.get_value("me?fields=id,name").await {
//!     Ok(me) => println!("{}", me["name"]),
//!     Err(GraphError::Api(ApiError::RateLimit(envelope))) => {
//!         println!("Rate limited: {}", envelope.message);
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```

pub mod classify;
mod errors;
pub mod graph;
mod http_client;
mod http_request;
mod http_response;
mod url;

pub use classify::{classify, ensure_success, parse_envelope, SUCCESS_STATUS};
pub use errors::{
    ApiError, ApiErrorKind, ErrorEnvelope, GraphError, OAUTH_EXCEPTION_TYPE, RATE_LIMIT_CODES,
};
pub use graph::GraphClient;
pub use http_client::{ReqwestTransport, Transport, SDK_VERSION};
pub use http_request::{HttpMethod, TransportRequest, JSON_CONTENT_TYPE};
pub use http_response::TransportResponse;
pub use url::{build_request_url, GRAPH_API_ORIGIN};
