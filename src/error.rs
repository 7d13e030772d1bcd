//! Configuration error types for the Nautobot GraphQL client.
//!
//! Connection parameters (`url`, `token`, `validate_certs`) are validated
//! before any request is built. Every failure maps to a [`ConfigError`]
//! variant with a message that names the offending parameter.
//!
//! # Example
//!
//! ```rust
//! use nautobot_graphql::{ConfigError, NautobotUrl};
//!
//! let result = NautobotUrl::new("nautobot.example.com");
//! assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
//! ```

use thiserror::Error;

/// Errors raised while resolving or validating connection parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No URL was passed and `NAUTOBOT_URL` is not set.
    #[error("Missing URL of Nautobot. Pass `url` or set the NAUTOBOT_URL environment variable.")]
    MissingUrl,

    /// The URL has no `http`/`https` scheme or no host.
    #[error("Invalid Nautobot URL '{url}'. Expected format: 'https://nautobot.example.com'.")]
    InvalidUrl {
        /// The URL that was provided.
        url: String,
    },

    /// An API token was provided but is empty.
    #[error("API token cannot be empty.")]
    EmptyToken,

    /// `validate_certs` was present but not a boolean.
    #[error("validate_certs must be a boolean, got {found}.")]
    InvalidValidateCerts {
        /// JSON type name of the value that was provided.
        found: &'static str,
    },

    /// A connection parameter has the wrong type.
    #[error("Parameter '{name}' must be of type {expected}, got {found}.")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Expected JSON type name.
        expected: &'static str,
        /// JSON type name of the value that was provided.
        found: &'static str,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_error_message() {
        let message = ConfigError::MissingUrl.to_string();
        assert!(message.contains("Missing URL"));
        assert!(message.contains("NAUTOBOT_URL"));
    }

    #[test]
    fn test_invalid_validate_certs_names_found_type() {
        let error = ConfigError::InvalidValidateCerts { found: "string" };
        let message = error.to_string();
        assert!(message.contains("validate_certs must be a boolean"));
        assert!(message.contains("string"));
    }

    #[test]
    fn test_invalid_parameter_error_message() {
        let error = ConfigError::InvalidParameter {
            name: "token",
            expected: "string",
            found: "number",
        };
        assert_eq!(
            error.to_string(),
            "Parameter 'token' must be of type string, got number."
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingUrl;
        let _: &dyn std::error::Error = &error;
    }
}
