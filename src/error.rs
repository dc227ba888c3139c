//! Error types for the Graph API client configuration.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors. Errors raised while talking to the API live in
//! [`crate::clients`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use graph_api::{ApiVersion, ConfigError};
//!
//! let result = ApiVersion::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiVersion)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API version cannot be empty.
    #[error("API version cannot be empty. Omit the version to use the API's default.")]
    EmptyApiVersion,

    /// API version is not usable as a path segment.
    #[error("Invalid API version '{version}'. Expected a version such as '19.0' or 'v19.0' with no slashes, '?', '&', '#' or inner whitespace.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },
}
