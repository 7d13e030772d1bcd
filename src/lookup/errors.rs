//! Error types for GraphQL lookups.
//!
//! - [`ValidationError`]: The `query` / `variables` parameters are missing or malformed
//! - [`LookupError`]: Everything a lookup can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use nautobot_graphql::lookup::{lookup_graphql, LookupError};
//!
//! match lookup_graphql(&params, &env, &executor).await {
//!     Ok(result) => println!("{}", result.data),
//!     Err(LookupError::Configuration(e)) => println!("Bad connection parameters: {}", e),
//!     Err(LookupError::Validation(e)) => println!("Bad query parameters: {}", e),
//!     Err(LookupError::RemoteQuery { errors }) => println!("Query failed: {}", errors),
//!     Err(e) => println!("{}", e),
//! }
//! ```

use thiserror::Error;

use crate::clients::{GraphqlErrors, HttpError};
use crate::error::ConfigError;

/// Errors raised while validating the query parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No `query` parameter was passed.
    #[error("Query parameter was not passed. Please verify that query is passed.")]
    MissingQuery,

    /// `query` was not a string.
    #[error("Query parameter must be of type string, got {found}. Please see docs for examples.")]
    QueryNotString {
        /// JSON type name of the value that was provided.
        found: &'static str,
    },

    /// `variables` was not a mapping.
    #[error("Variables parameter must be of key/value pairs, got {found}. Please see docs for examples.")]
    VariablesNotMapping {
        /// JSON type name of the value that was provided.
        found: &'static str,
    },
}

/// Error type for [`lookup_graphql`](crate::lookup::lookup_graphql).
#[derive(Debug, Error)]
pub enum LookupError {
    /// Connection parameters are missing or malformed.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// Query parameters are missing or malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The endpoint rejected the query (HTTP 400).
    #[error("Error in the query to the Nautobot host. Errors: {errors}")]
    RemoteQuery {
        /// The errors reported by the endpoint.
        errors: GraphqlErrors,
    },

    /// The endpoint answered with something that is neither data nor errors.
    #[error("Unexpected response shape from the Nautobot host (HTTP {status}).")]
    UnexpectedResponse {
        /// HTTP status code of the response.
        status: u16,
    },

    /// The request could not be completed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_error_messages() {
        assert!(ValidationError::MissingQuery
            .to_string()
            .contains("Query parameter was not passed"));

        let error = ValidationError::QueryNotString { found: "number" };
        assert!(error.to_string().contains("must be of type string"));
        assert!(error.to_string().contains("number"));

        let error = ValidationError::VariablesNotMapping { found: "array" };
        assert!(error.to_string().contains("key/value pairs"));
    }

    #[test]
    fn test_remote_query_error_includes_error_list() {
        let errors = GraphqlErrors::from_value(&json!(["bad query"])).unwrap();
        let error = LookupError::RemoteQuery { errors };
        assert_eq!(
            error.to_string(),
            r#"Error in the query to the Nautobot host. Errors: ["bad query"]"#
        );
    }

    #[test]
    fn test_config_and_validation_errors_convert() {
        let error: LookupError = ConfigError::MissingUrl.into();
        assert!(matches!(error, LookupError::Configuration(ConfigError::MissingUrl)));
        assert!(error.to_string().contains("Missing URL"));

        let error: LookupError = ValidationError::MissingQuery.into();
        assert!(matches!(error, LookupError::Validation(_)));
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let error: &dyn std::error::Error = &LookupError::UnexpectedResponse { status: 200 };
        let _ = error;
    }
}
