//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around the string values the client
//! threads into every request URL.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A Graph API access token.
///
/// The token is appended to every outgoing request as the `access_token`
/// query parameter. No validation is performed: an empty token still produces
/// a request, which the API will reject with an `OAuthException`.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use graph_api::AccessToken;
///
/// let token = AccessToken::new("EAAB-token");
/// assert_eq!(token.as_ref(), "EAAB-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns `true` if the token is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// A Graph API version, such as `19.0`.
///
/// The version is inserted into relative request URLs as a `v<version>/`
/// path segment. A leading `v` is tolerated on input and stripped, so
/// `"v19.0"` and `"19.0"` are the same version.
///
/// # Example
///
/// ```rust
/// use graph_api::ApiVersion;
///
/// let version = ApiVersion::new("19.0").unwrap();
/// assert_eq!(version.to_string(), "19.0");
/// assert_eq!(version.path_segment(), "v19.0/");
///
/// let version: ApiVersion = "v18.0".parse().unwrap();
/// assert_eq!(version.as_ref(), "18.0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Creates a new validated API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiVersion`] if the version is empty (or
    /// only a `v`), and [`ConfigError::InvalidApiVersion`] if it contains
    /// characters that would break the URL path (`/`, `?`, `&`, `#` or
    /// whitespace).
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        let trimmed = version.trim();
        let bare = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        if bare.is_empty() {
            return Err(ConfigError::EmptyApiVersion);
        }

        if bare
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '&' | '#'))
        {
            return Err(ConfigError::InvalidApiVersion { version });
        }

        Ok(Self(bare.to_string()))
    }

    /// Returns the `v<version>/` segment inserted after the base origin.
    #[must_use]
    pub fn path_segment(&self) -> String {
        format!("v{}/", self.0)
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
