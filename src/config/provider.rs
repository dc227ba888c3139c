//! Configuration providers.
//!
//! A [`ConfigProvider`] is the seam between the client and whatever
//! process-wide configuration the application uses. Values are looked up by a
//! named section and a key, and are read once when a
//! [`GraphApiConfig`](super::GraphApiConfig) is resolved.

use std::collections::HashMap;

/// Source of process-wide configuration values, keyed by section name.
///
/// Implementations should treat keys case-insensitively.
pub trait ConfigProvider {
    /// Returns the value stored under `key` in `section`, if any.
    fn get(&self, section: &str, key: &str) -> Option<String>;
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for &P {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        (**self).get(section, key)
    }
}

/// Reads configuration from environment variables.
///
/// A value for `key` in `section` is read from the variable
/// `<PREFIX><SECTION>__<KEY>`, upper-cased. For example the API version of
/// the `facebookApi` section is read from `FACEBOOKAPI__APIVERSION`.
///
/// # Example
///
/// ```rust
/// use graph_api::config::{ConfigProvider, EnvConfigProvider};
///
/// let provider = EnvConfigProvider::with_prefix("MYAPP_");
/// assert_eq!(provider.variable_name("facebookApi", "ApiVersion"), "MYAPP_FACEBOOKAPI__APIVERSION");
/// ```
#[derive(Clone, Debug, Default)]
pub struct EnvConfigProvider {
    prefix: String,
}

impl EnvConfigProvider {
    /// Creates a provider reading unprefixed variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider reading variables that start with `prefix`.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the environment variable name consulted for `section`/`key`.
    #[must_use]
    pub fn variable_name(&self, section: &str, key: &str) -> String {
        format!("{}{}__{}", self.prefix, section, key).to_uppercase()
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        std::env::var(self.variable_name(section, key)).ok()
    }
}

/// Reads configuration from a JSON document, such as a parsed settings file.
///
/// Sections are top-level objects; section and key names are matched
/// case-insensitively. String, number and boolean values are returned as
/// strings; anything else is ignored.
///
/// # Example
///
/// ```rust
/// use graph_api::config::{ConfigProvider, JsonConfigProvider};
/// use serde_json::json;
///
/// let provider = JsonConfigProvider::new(json!({
///     "facebookApi": { "ApiVersion": "19.0" }
/// }));
/// assert_eq!(provider.get("facebookapi", "apiVersion"), Some("19.0".to_string()));
/// ```
#[derive(Clone, Debug)]
pub struct JsonConfigProvider {
    document: serde_json::Value,
}

impl JsonConfigProvider {
    /// Creates a provider over an already-parsed document.
    #[must_use]
    pub const fn new(document: serde_json::Value) -> Self {
        Self { document }
    }

    /// Parses a provider from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `json` is not valid JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }

    fn lookup<'a>(
        object: &'a serde_json::Map<String, serde_json::Value>,
        name: &str,
    ) -> Option<&'a serde_json::Value> {
        object
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }
}

impl ConfigProvider for JsonConfigProvider {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        let root = self.document.as_object()?;
        let section = Self::lookup(root, section)?.as_object()?;
        match Self::lookup(section, key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// In-memory provider, mostly useful for tests and for applications that
/// assemble their configuration by hand.
#[derive(Clone, Debug, Default)]
pub struct MapConfigProvider {
    values: HashMap<(String, String), String>,
}

impl MapConfigProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, returning the provider for chaining.
    #[must_use]
    pub fn with(mut self, section: &str, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(
            (section.to_lowercase(), key.to_lowercase()),
            value.into(),
        );
        self
    }
}

impl ConfigProvider for MapConfigProvider {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        self.values
            .get(&(section.to_lowercase(), key.to_lowercase()))
            .cloned()
    }
}
