//! Graph API client implementation.
//!
//! This module provides the [`GraphClient`] type for making authenticated
//! GET, POST and DELETE requests with typed response decoding.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::clients::classify::ensure_success;
use crate::clients::errors::GraphError;
use crate::clients::http_client::{ReqwestTransport, Transport};
use crate::clients::http_request::{HttpMethod, TransportRequest};
use crate::clients::url::build_request_url;
use crate::config::{AccessToken, ApiVersion, ConfigProvider, GraphApiConfig};

/// Client for the Graph API.
///
/// Provides `get`, `post` and `delete` methods that resolve the request URL,
/// send it through a [`Transport`], classify failures and decode successful
/// bodies into the caller's type. Each method has an untyped `*_value`
/// variant returning [`serde_json::Value`] and a `*_with_cancellation`
/// variant accepting a [`CancellationToken`].
///
/// # Construction
///
/// - [`GraphClient::new`]: explicit access token and optional API version
/// - [`GraphClient::from_config`]: version and token from a [`GraphApiConfig`]
/// - [`GraphClient::from_provider`]: resolve a [`GraphApiConfig`] from a
///   [`ConfigProvider`] section first
///
/// A version set with [`GraphClient::new`] or
/// [`GraphClient::with_api_version`] takes precedence over a configured one.
///
/// # Thread Safety
///
/// `GraphClient` is `Send + Sync`. Requests may run concurrently on one
/// client; the access token can be rotated with
/// [`GraphClient::set_access_token`] and each request reads it exactly once.
///
/// # Example
///
/// ```rust,ignore
/// use graph_api::{ApiVersion, GraphClient};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Me {
///     id: String,
///     name: String,
/// }
///
/// let client = GraphClient::new("EAAB...", Some(ApiVersion::new("19.0")?))?;
///
/// let me: Me = client.get("me?fields=id,name").await?;
/// let post = client
///     .post_value("me/feed", &serde_json::json!({"message": "Hello"}))
///     .await?;
/// ```
pub struct GraphClient {
    transport: Arc<dyn Transport>,
    access_token: RwLock<AccessToken>,
    api_version: Option<ApiVersion>,
    configured_api_version: Option<ApiVersion>,
}

// Verify GraphClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphClient>();
};

impl fmt::Debug for GraphClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphClient")
            .field("access_token", &self.access_token())
            .field("api_version", &self.api_version)
            .field("configured_api_version", &self.configured_api_version)
            .finish_non_exhaustive()
    }
}

impl GraphClient {
    /// Creates a client with an explicit access token and API version.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Network`] if the default transport cannot be
    /// created.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_api::{ApiVersion, GraphClient};
    ///
    /// let client = GraphClient::new("token", Some(ApiVersion::new("19.0").unwrap())).unwrap();
    /// assert_eq!(
    ///     client.request_url("me"),
    ///     "https://graph.facebook.com/v19.0/me?access_token=token"
    /// );
    /// ```
    pub fn new(
        access_token: impl Into<AccessToken>,
        api_version: Option<ApiVersion>,
    ) -> Result<Self, GraphError> {
        let transport = ReqwestTransport::new(None)?;
        Ok(Self {
            transport: Arc::new(transport),
            access_token: RwLock::new(access_token.into()),
            api_version,
            configured_api_version: None,
        })
    }

    /// Creates a client from configuration.
    ///
    /// The configured API version is used unless overridden with
    /// [`GraphClient::with_api_version`]. Without a configured access token
    /// the client starts with an empty one.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Network`] if the default transport cannot be
    /// created.
    pub fn from_config(config: &GraphApiConfig) -> Result<Self, GraphError> {
        let transport = ReqwestTransport::new(Some(config))?;
        Ok(Self {
            transport: Arc::new(transport),
            access_token: RwLock::new(config.access_token().cloned().unwrap_or_default()),
            api_version: None,
            configured_api_version: config.api_version().cloned(),
        })
    }

    /// Resolves configuration from `section` of `provider`, then creates a
    /// client from it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Config`] if the configured values are invalid,
    /// or [`GraphError::Network`] if the default transport cannot be created.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_api::config::{MapConfigProvider, DEFAULT_CONFIG_SECTION};
    /// use graph_api::GraphClient;
    ///
    /// let provider = MapConfigProvider::new().with("facebookApi", "ApiVersion", "18.0");
    /// let client = GraphClient::from_provider(&provider, DEFAULT_CONFIG_SECTION).unwrap();
    /// client.set_access_token("token");
    ///
    /// assert_eq!(
    ///     client.request_url("/me"),
    ///     "https://graph.facebook.com/v18.0/me?access_token=token"
    /// );
    /// ```
    pub fn from_provider<P: ConfigProvider + ?Sized>(
        provider: &P,
        section: &str,
    ) -> Result<Self, GraphError> {
        let config = GraphApiConfig::from_provider(provider, section)?;
        Self::from_config(&config)
    }

    /// Replaces the transport used to send requests.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Sets an explicit API version, taking precedence over any configured one.
    #[must_use]
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        if let Some(configured) = &self.configured_api_version {
            if configured == &version {
                tracing::debug!(
                    "Graph client has a redundant API version override to the configured {}",
                    configured
                );
            } else {
                tracing::debug!(
                    "Graph client overriding configured API version {} with {}",
                    configured,
                    version
                );
            }
        }
        self.api_version = Some(version);
        self
    }

    /// Returns the API version requests are sent with, if any.
    #[must_use]
    pub fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version
            .as_ref()
            .or(self.configured_api_version.as_ref())
    }

    /// Returns a copy of the current access token.
    #[must_use]
    pub fn access_token(&self) -> AccessToken {
        self.access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the access token used by subsequent requests.
    ///
    /// Requests already in flight keep the token they were built with.
    pub fn set_access_token(&self, token: impl Into<AccessToken>) {
        *self
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = token.into();
    }

    /// Returns the URL a request for `target` would be sent to.
    ///
    /// The result contains the access token; do not log it.
    #[must_use]
    pub fn request_url(&self, target: &str) -> String {
        let token = self.access_token();
        build_request_url(
            Some(target),
            token.as_ref(),
            self.api_version.as_ref(),
            self.configured_api_version.as_ref(),
        )
    }

    /// Sends a GET request and decodes the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Api`] for API-reported failures,
    /// [`GraphError::MalformedEnvelope`] for unreadable failures,
    /// [`GraphError::Decode`] if the body does not match `T`, and
    /// [`GraphError::Network`] for transport failures.
    pub async fn get<T: DeserializeOwned>(&self, target: &str) -> Result<T, GraphError> {
        self.send(HttpMethod::Get, target, None, None).await
    }

    /// Sends a GET request that is abandoned when `cancellation` fires.
    ///
    /// # Errors
    ///
    /// As [`GraphClient::get`], plus [`GraphError::Cancelled`].
    pub async fn get_with_cancellation<T: DeserializeOwned>(
        &self,
        target: &str,
        cancellation: &CancellationToken,
    ) -> Result<T, GraphError> {
        self.send(HttpMethod::Get, target, None, Some(cancellation))
            .await
    }

    /// Sends a GET request and returns the untyped JSON body.
    ///
    /// # Errors
    ///
    /// As [`GraphClient::get`].
    pub async fn get_value(&self, target: &str) -> Result<serde_json::Value, GraphError> {
        self.get(target).await
    }

    /// Sends a POST request with `body` encoded as JSON and decodes the
    /// response into `T`.
    ///
    /// # Errors
    ///
    /// As [`GraphClient::get`], plus [`GraphError::Encode`] if `body` cannot
    /// be serialized.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        target: &str,
        body: &B,
    ) -> Result<T, GraphError> {
        let body = serde_json::to_vec(body).map_err(GraphError::Encode)?;
        self.send(HttpMethod::Post, target, Some(body), None).await
    }

    /// Sends a POST request that is abandoned when `cancellation` fires.
    ///
    /// # Errors
    ///
    /// As [`GraphClient::post`], plus [`GraphError::Cancelled`].
    pub async fn post_with_cancellation<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        target: &str,
        body: &B,
        cancellation: &CancellationToken,
    ) -> Result<T, GraphError> {
        let body = serde_json::to_vec(body).map_err(GraphError::Encode)?;
        self.send(HttpMethod::Post, target, Some(body), Some(cancellation))
            .await
    }

    /// Sends a POST request and returns the untyped JSON body.
    ///
    /// # Errors
    ///
    /// As [`GraphClient::post`].
    pub async fn post_value<B: Serialize + ?Sized>(
        &self,
        target: &str,
        body: &B,
    ) -> Result<serde_json::Value, GraphError> {
        self.post(target, body).await
    }

    /// Sends a DELETE request and decodes the response into `T`.
    ///
    /// # Errors
    ///
    /// As [`GraphClient::get`].
    pub async fn delete<T: DeserializeOwned>(&self, target: &str) -> Result<T, GraphError> {
        self.send(HttpMethod::Delete, target, None, None).await
    }

    /// Sends a DELETE request that is abandoned when `cancellation` fires.
    ///
    /// # Errors
    ///
    /// As [`GraphClient::delete`], plus [`GraphError::Cancelled`].
    pub async fn delete_with_cancellation<T: DeserializeOwned>(
        &self,
        target: &str,
        cancellation: &CancellationToken,
    ) -> Result<T, GraphError> {
        self.send(HttpMethod::Delete, target, None, Some(cancellation))
            .await
    }

    /// Sends a DELETE request and returns the untyped JSON body.
    ///
    /// # Errors
    ///
    /// As [`GraphClient::delete`].
    pub async fn delete_value(&self, target: &str) -> Result<serde_json::Value, GraphError> {
        self.delete(target).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        target: &str,
        body: Option<Vec<u8>>,
        cancellation: Option<&CancellationToken>,
    ) -> Result<T, GraphError> {
        let mut request = TransportRequest::new(method, self.request_url(target));
        if let Some(body) = body {
            request = request.with_body(body);
        }

        tracing::debug!(%method, path = target, "Sending Graph API request");

        let response = match cancellation {
            Some(token) => {
                if token.is_cancelled() {
                    return Err(GraphError::Cancelled);
                }
                tokio::select! {
                    biased;
                    () = token.cancelled() => {
                        tracing::debug!(%method, path = target, "Graph API request cancelled");
                        return Err(GraphError::Cancelled);
                    }
                    response = self.transport.send(request) => response?,
                }
            }
            None => self.transport.send(request).await?,
        };

        ensure_success(response.code, &response.body)?;

        serde_json::from_slice(&response.body).map_err(GraphError::Decode)
    }
}
