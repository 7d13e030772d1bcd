//! Connection to a Nautobot instance.
//!
//! [`NautobotApi`] holds the HTTP client, the base URL, and the default
//! headers (token authentication, content negotiation, user agent) for one
//! Nautobot instance.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;
use crate::config::{NautobotConfig, NautobotUrl};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// An authenticated connection to a Nautobot instance.
///
/// Construction performs no network I/O. Each request is sent exactly once;
/// there is no retry or timeout logic beyond what reqwest applies.
///
/// # Example
///
/// ```rust
/// use nautobot_graphql::{ApiToken, NautobotConfig, NautobotUrl};
/// use nautobot_graphql::clients::NautobotApi;
///
/// let config = NautobotConfig::builder()
///     .url(NautobotUrl::new("https://nautobot.example.com").unwrap())
///     .token(ApiToken::new("0123456789abcdef").unwrap())
///     .build()
///     .unwrap();
///
/// let api = NautobotApi::new(&config).unwrap();
/// assert_eq!(api.base_url().as_ref(), "https://nautobot.example.com");
/// assert_eq!(
///     api.default_headers().get("Authorization").map(String::as_str),
///     Some("Token 0123456789abcdef")
/// );
/// ```
#[derive(Debug)]
pub struct NautobotApi {
    client: reqwest::Client,
    base_url: NautobotUrl,
    validate_certs: bool,
    default_headers: HashMap<String, String>,
}

// Verify NautobotApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NautobotApi>();
};

impl NautobotApi {
    /// Creates a connection from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ClientBuild`] if the underlying reqwest client
    /// cannot be created (e.g. TLS backend initialization failure).
    pub fn new(config: &NautobotConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}nautobot-graphql v{SDK_VERSION}");

        let accept = config.api_version().map_or_else(
            || "application/json".to_string(),
            |version| format!("application/json; version={version}"),
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), accept);
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        if let Some(token) = config.token() {
            default_headers.insert("Authorization".to_string(), token.authorization_header());
        }

        if !config.validate_certs() {
            tracing::warn!(
                "TLS certificate validation is disabled for Nautobot at {}",
                config.url()
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(!config.validate_certs())
            .build()
            .map_err(HttpError::ClientBuild)?;

        tracing::debug!(
            "Created Nautobot connection to {} (validate_certs: {})",
            config.url(),
            config.validate_certs()
        );

        Ok(Self {
            client,
            base_url: config.url().clone(),
            validate_certs: config.validate_certs(),
            default_headers,
        })
    }

    /// Returns the base URL of the Nautobot instance.
    #[must_use]
    pub const fn base_url(&self) -> &NautobotUrl {
        &self.base_url
    }

    /// Returns whether TLS certificates are validated.
    #[must_use]
    pub const fn validate_certs(&self) -> bool {
        self.validate_certs
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a JSON body with POST to `path` (relative to the base URL).
    ///
    /// Any status code is returned as an [`HttpResponse`]; interpreting it
    /// is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request cannot be sent or the
    /// body cannot be read.
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        let url = self.base_url.join(path);

        let mut req_builder = self.client.post(&url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(body.to_string()).send().await?;

        let code = res.status().as_u16();
        let headers = HttpResponse::parse_headers(res.headers());
        let body_text = res.text().await?;

        Ok(HttpResponse::new(code, headers, body_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiToken;

    fn config_builder() -> crate::config::NautobotConfigBuilder {
        NautobotConfig::builder().url(NautobotUrl::new("https://nautobot.example.com/").unwrap())
    }

    #[test]
    fn test_connection_uses_configured_url() {
        let api = NautobotApi::new(&config_builder().build().unwrap()).unwrap();
        assert_eq!(api.base_url().as_ref(), "https://nautobot.example.com");
        assert!(api.validate_certs());
    }

    #[test]
    fn test_token_header_injection() {
        let config = config_builder()
            .token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap();
        let api = NautobotApi::new(&config).unwrap();

        assert_eq!(
            api.default_headers().get("Authorization"),
            Some(&"Token test-token".to_string())
        );
    }

    #[test]
    fn test_no_authorization_header_without_token() {
        let api = NautobotApi::new(&config_builder().build().unwrap()).unwrap();
        assert!(api.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_accept_header_pins_api_version() {
        let api = NautobotApi::new(&config_builder().build().unwrap()).unwrap();
        assert_eq!(
            api.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );

        let config = config_builder().api_version("2.1").build().unwrap();
        let api = NautobotApi::new(&config).unwrap();
        assert_eq!(
            api.default_headers().get("Accept"),
            Some(&"application/json; version=2.1".to_string())
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = config_builder()
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let api = NautobotApi::new(&config).unwrap();

        let user_agent = api.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("nautobot-graphql v"));
    }

    #[test]
    fn test_connection_without_cert_validation() {
        let config = config_builder().validate_certs(false).build().unwrap();
        let api = NautobotApi::new(&config).unwrap();
        assert!(!api.validate_certs());
    }
}
