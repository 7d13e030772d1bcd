//! Validated newtype wrappers for connection parameters.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Nautobot base URL.
///
/// The URL must use the `http` or `https` scheme and name a host. Surrounding
/// whitespace and trailing slashes are removed, so API paths can be appended
/// directly.
///
/// # Example
///
/// ```rust
/// use nautobot_graphql::NautobotUrl;
///
/// let url = NautobotUrl::new("https://nautobot.example.com:8443/").unwrap();
/// assert_eq!(url.as_ref(), "https://nautobot.example.com:8443");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "nautobot.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NautobotUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl NautobotUrl {
    /// Creates a new validated Nautobot URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        // Skip "://"
        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_start >= host_end {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins an API path onto the base URL.
    ///
    /// ```rust
    /// use nautobot_graphql::NautobotUrl;
    ///
    /// let url = NautobotUrl::new("http://localhost:8000").unwrap();
    /// assert_eq!(url.join("api/graphql/"), "http://localhost:8000/api/graphql/");
    /// ```
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for NautobotUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for NautobotUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for NautobotUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for NautobotUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A Nautobot API token.
///
/// The `Debug` implementation masks the value so tokens never end up in logs.
///
/// # Example
///
/// ```rust
/// use nautobot_graphql::ApiToken;
///
/// let token = ApiToken::new("0123456789abcdef").unwrap();
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self(token))
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Token {}", self.0)
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}
