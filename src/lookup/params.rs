//! Validation of the loosely typed lookup parameters.
//!
//! The host framework passes keyword parameters as a JSON object. This module
//! turns them into a [`NautobotConfig`] and a [`QueryRequest`], checking them
//! in a fixed order: `url`, `token`, `validate_certs`, `query`, `variables`.

use serde_json::{Map, Value};

use crate::config::{
    resolve_setting, ApiToken, EnvSource, NautobotConfig, NautobotUrl, TOKEN_ENV_VAR,
    URL_ENV_VAR,
};
use crate::error::ConfigError;
use crate::lookup::errors::{LookupError, ValidationError};

/// A validated GraphQL query document with its variables.
///
/// # Example
///
/// ```rust
/// use nautobot_graphql::lookup::QueryRequest;
/// use serde_json::{json, Map};
///
/// let mut variables = Map::new();
/// variables.insert("site_name".to_string(), json!("den"));
///
/// let request = QueryRequest::new("query ($site_name: String!) { sites (name: $site_name) { id } }")
///     .with_variables(variables);
/// assert!(request.variables().is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct QueryRequest {
    query: String,
    variables: Option<Map<String, Value>>,
}

impl QueryRequest {
    /// Creates a request without variables.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    /// Attaches variables to the request.
    #[must_use]
    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Returns the query document.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the variables, if any.
    #[must_use]
    pub const fn variables(&self) -> Option<&Map<String, Value>> {
        self.variables.as_ref()
    }
}

/// Lookup parameters after validation.
#[derive(Clone, Debug)]
pub struct LookupParams {
    /// Connection settings.
    pub config: NautobotConfig,
    /// The query to run.
    pub request: QueryRequest,
}

impl LookupParams {
    /// Validates raw keyword parameters.
    ///
    /// `url` and `token` fall back to `NAUTOBOT_URL` / `NAUTOBOT_TOKEN` from
    /// `env`. A JSON `null` is treated the same as an absent key.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Configuration`] for bad connection parameters
    /// and [`LookupError::Validation`] for bad query parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use nautobot_graphql::lookup::LookupParams;
    /// use serde_json::json;
    ///
    /// let params = json!({
    ///     "query": "{ sites { name } }",
    ///     "url": "https://nautobot.example.com",
    /// });
    ///
    /// let env: HashMap<String, String> = HashMap::new();
    /// let params = LookupParams::from_map(params.as_object().unwrap(), &env).unwrap();
    /// assert!(params.config.validate_certs());
    /// assert_eq!(params.request.query(), "{ sites { name } }");
    /// ```
    pub fn from_map<E: EnvSource + ?Sized>(
        params: &Map<String, Value>,
        env: &E,
    ) -> Result<Self, LookupError> {
        let url = resolve_setting(optional_string(params, "url")?, env, URL_ENV_VAR)
            .ok_or(ConfigError::MissingUrl)?;
        let url = NautobotUrl::new(url)?;

        let token = resolve_setting(optional_string(params, "token")?, env, TOKEN_ENV_VAR)
            .map(ApiToken::new)
            .transpose()?;

        let validate_certs = match params.get("validate_certs") {
            None | Some(Value::Null) => true,
            Some(Value::Bool(validate)) => *validate,
            Some(other) => {
                return Err(ConfigError::InvalidValidateCerts {
                    found: json_type_name(other),
                }
                .into())
            }
        };

        let query = match params.get("query") {
            None | Some(Value::Null) => return Err(ValidationError::MissingQuery.into()),
            Some(Value::String(query)) => query.clone(),
            Some(other) => {
                return Err(ValidationError::QueryNotString {
                    found: json_type_name(other),
                }
                .into())
            }
        };

        let variables = match params.get("variables") {
            None | Some(Value::Null) => None,
            Some(Value::Object(variables)) => Some(variables.clone()),
            Some(other) => {
                return Err(ValidationError::VariablesNotMapping {
                    found: json_type_name(other),
                }
                .into())
            }
        };

        let mut builder = NautobotConfig::builder()
            .url(url)
            .validate_certs(validate_certs);
        if let Some(token) = token {
            builder = builder.token(token);
        }

        let mut request = QueryRequest::new(query);
        if let Some(variables) = variables {
            request = request.with_variables(variables);
        }

        Ok(Self {
            config: builder.build()?,
            request,
        })
    }
}

fn optional_string<'a>(
    params: &'a Map<String, Value>,
    name: &'static str,
) -> Result<Option<&'a str>, ConfigError> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(other) => Err(ConfigError::InvalidParameter {
            name,
            expected: "string",
            found: json_type_name(other),
        }),
    }
}

/// JSON type name used in error messages.
const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
