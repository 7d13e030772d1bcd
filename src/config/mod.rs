//! Connection configuration for the Nautobot GraphQL client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`NautobotConfig`]: URL, token and TLS policy for one Nautobot instance
//! - [`NautobotConfigBuilder`]: A builder for constructing [`NautobotConfig`] instances
//! - [`NautobotUrl`]: A validated base URL
//! - [`ApiToken`]: An API token with masked debug output
//! - [`EnvSource`]: Where `NAUTOBOT_URL` / `NAUTOBOT_TOKEN` fallbacks come from
//!
//! # Example
//!
//! ```rust
//! use nautobot_graphql::{ApiToken, NautobotConfig, NautobotUrl};
//!
//! let config = NautobotConfig::builder()
//!     .url(NautobotUrl::new("https://nautobot.example.com").unwrap())
//!     .token(ApiToken::new("0123456789abcdef").unwrap())
//!     .validate_certs(false)
//!     .build()
//!     .unwrap();
//!
//! assert!(!config.validate_certs());
//! ```

mod env;
mod newtypes;

pub use env::{resolve_setting, EnvSource, ProcessEnv, TOKEN_ENV_VAR, URL_ENV_VAR};
pub use newtypes::{ApiToken, NautobotUrl};

use crate::error::ConfigError;

/// Connection settings for a Nautobot instance.
///
/// # Thread Safety
///
/// `NautobotConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct NautobotConfig {
    url: NautobotUrl,
    token: Option<ApiToken>,
    validate_certs: bool,
    api_version: Option<String>,
    user_agent_prefix: Option<String>,
}

impl NautobotConfig {
    /// Creates a new builder for constructing a `NautobotConfig`.
    #[must_use]
    pub fn builder() -> NautobotConfigBuilder {
        NautobotConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn url(&self) -> &NautobotUrl {
        &self.url
    }

    /// Returns the API token, if configured.
    #[must_use]
    pub const fn token(&self) -> Option<&ApiToken> {
        self.token.as_ref()
    }

    /// Returns whether TLS certificates are validated.
    #[must_use]
    pub const fn validate_certs(&self) -> bool {
        self.validate_certs
    }

    /// Returns the pinned REST API version, if configured.
    ///
    /// Nautobot reads it from the `Accept` header (`application/json; version=2.1`).
    #[must_use]
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify NautobotConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NautobotConfig>();
};

/// Builder for constructing [`NautobotConfig`] instances.
///
/// `url` is required. Defaults:
///
/// - `token`: `None` (anonymous access)
/// - `validate_certs`: `true`
/// - `api_version`: `None` (server default)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use nautobot_graphql::{NautobotConfig, NautobotUrl};
///
/// let config = NautobotConfig::builder()
///     .url(NautobotUrl::new("http://localhost:8000").unwrap())
///     .api_version("2.1")
///     .user_agent_prefix("inventory-sync/1.0")
///     .build()
///     .unwrap();
///
/// assert!(config.token().is_none());
/// assert!(config.validate_certs());
/// ```
#[derive(Debug, Default)]
pub struct NautobotConfigBuilder {
    url: Option<NautobotUrl>,
    token: Option<ApiToken>,
    validate_certs: Option<bool>,
    api_version: Option<String>,
    user_agent_prefix: Option<String>,
}

impl NautobotConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn url(mut self, url: NautobotUrl) -> Self {
        self.url = Some(url);
        self
    }

    /// Sets the API token.
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets whether TLS certificates are validated.
    #[must_use]
    pub const fn validate_certs(mut self, validate_certs: bool) -> Self {
        self.validate_certs = Some(validate_certs);
        self
    }

    /// Pins the API version sent in the `Accept` header.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`NautobotConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `url` is not set.
    pub fn build(self) -> Result<NautobotConfig, ConfigError> {
        let url = self
            .url
            .ok_or(ConfigError::MissingRequiredField { field: "url" })?;

        Ok(NautobotConfig {
            url,
            token: self.token,
            validate_certs: self.validate_certs.unwrap_or(true),
            api_version: self.api_version,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
