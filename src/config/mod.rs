//! Configuration types for the Graph API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`GraphApiConfig`]: Settings used to construct a
//!   [`GraphClient`](crate::clients::GraphClient) from configuration
//! - [`GraphApiConfigBuilder`]: A builder for constructing [`GraphApiConfig`] instances
//! - [`AccessToken`]: The access token newtype with masked debug output
//! - [`ApiVersion`]: A validated API version
//! - [`ConfigProvider`]: The process-wide configuration seam, with
//!   [`EnvConfigProvider`], [`JsonConfigProvider`] and [`MapConfigProvider`]
//!
//! # Example
//!
//! ```rust
//! use graph_api::config::{GraphApiConfig, JsonConfigProvider, DEFAULT_CONFIG_SECTION};
//! use serde_json::json;
//!
//! let provider = JsonConfigProvider::new(json!({
//!     "facebookApi": { "ApiVersion": "19.0" }
//! }));
//!
//! let config = GraphApiConfig::from_provider(&provider, DEFAULT_CONFIG_SECTION).unwrap();
//! assert_eq!(config.api_version().map(AsRef::as_ref), Some("19.0"));
//! ```

mod newtypes;
mod provider;

pub use newtypes::{AccessToken, ApiVersion};
pub use provider::{ConfigProvider, EnvConfigProvider, JsonConfigProvider, MapConfigProvider};

use crate::error::ConfigError;

/// Section name used when none is given.
pub const DEFAULT_CONFIG_SECTION: &str = "facebookApi";

/// Key holding the API version within a configuration section.
pub const API_VERSION_KEY: &str = "ApiVersion";

/// Key holding the default access token within a configuration section.
pub const ACCESS_TOKEN_KEY: &str = "AccessToken";

/// Key holding the user agent prefix within a configuration section.
pub const USER_AGENT_PREFIX_KEY: &str = "UserAgentPrefix";

/// Configuration for a Graph API client.
///
/// Every field is optional. A client built from a configuration without an
/// access token sends an empty token until
/// [`GraphClient::set_access_token`](crate::clients::GraphClient::set_access_token)
/// is called.
///
/// # Thread Safety
///
/// `GraphApiConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default)]
pub struct GraphApiConfig {
    api_version: Option<ApiVersion>,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
}

impl GraphApiConfig {
    /// Creates a new builder for constructing a `GraphApiConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_api::{ApiVersion, GraphApiConfig};
    ///
    /// let config = GraphApiConfig::builder()
    ///     .api_version(ApiVersion::new("19.0").unwrap())
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> GraphApiConfigBuilder {
        GraphApiConfigBuilder::new()
    }

    /// Resolves a configuration from `provider`, reading keys from `section`.
    ///
    /// The lookup happens once; later changes to the underlying source do not
    /// affect the returned value. Empty values are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the configured version is
    /// not usable as a path segment.
    pub fn from_provider<P: ConfigProvider + ?Sized>(
        provider: &P,
        section: &str,
    ) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| {
            provider
                .get(section, key)
                .filter(|value| !value.trim().is_empty())
        };

        let mut builder = GraphApiConfigBuilder::new();
        if let Some(version) = non_empty(API_VERSION_KEY) {
            builder = builder.api_version(ApiVersion::new(version)?);
        }
        if let Some(token) = non_empty(ACCESS_TOKEN_KEY) {
            builder = builder.access_token(AccessToken::new(token));
        }
        if let Some(prefix) = non_empty(USER_AGENT_PREFIX_KEY) {
            builder = builder.user_agent_prefix(prefix);
        }

        tracing::debug!(
            section,
            has_api_version = builder.api_version.is_some(),
            has_access_token = builder.access_token.is_some(),
            "Resolved Graph API configuration"
        );

        Ok(builder.build())
    }

    /// Returns the configured API version, if any.
    #[must_use]
    pub const fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Returns the configured access token, if any.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify GraphApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphApiConfig>();
};

/// Builder for constructing [`GraphApiConfig`] instances.
#[derive(Debug, Default)]
pub struct GraphApiConfigBuilder {
    api_version: Option<ApiVersion>,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
}

impl GraphApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API version inserted into relative request URLs.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the access token a client starts with.
    #[must_use]
    pub fn access_token(mut self, token: impl Into<AccessToken>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`GraphApiConfig`]. Every field is optional.
    #[must_use]
    pub fn build(self) -> GraphApiConfig {
        GraphApiConfig {
            api_version: self.api_version,
            access_token: self.access_token,
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
