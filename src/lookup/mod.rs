//! GraphQL lookups driven by loosely typed keyword parameters.
//!
//! This is the entry point a templating host calls: it receives the keyword
//! parameters (`query`, `variables`, `url`, `token`, `validate_certs`),
//! validates them, sends the query once, and returns `{"data": ...}`.
//!
//! # Overview
//!
//! - [`lookup_graphql`]: Validate, execute, and map the response
//! - [`LookupModule`]: Bundles an [`EnvSource`] and a [`GraphqlExecutor`]
//! - [`LookupParams`] / [`QueryRequest`]: Validated parameters
//! - [`LookupResult`]: The `{"data": ...}` mapping
//! - [`LookupError`] / [`ValidationError`]: Failure taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use nautobot_graphql::lookup::LookupModule;
//! use serde_json::json;
//!
//! let params = json!({
//!     "query": "query ($site_name: String!) { sites (name: $site_name) { id name } }",
//!     "variables": {"site_name": "den"},
//!     "url": "https://nautobot.example.com",
//!     "token": "0123456789abcdef",
//! });
//!
//! let result = LookupModule::from_process_env()
//!     .run(params.as_object().unwrap())
//!     .await?;
//! println!("{}", result.into_value());
//! ```
//!
//! # Environment Fallback
//!
//! When `url` or `token` is absent (or `null`, or empty), `NAUTOBOT_URL` and
//! `NAUTOBOT_TOKEN` are read from the module's [`EnvSource`].

mod errors;
mod executor;
mod params;

pub use errors::{LookupError, ValidationError};
pub use executor::{BoxFuture, GraphqlExecutor, NautobotExecutor};
pub use params::{LookupParams, QueryRequest};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{GraphqlErrors, QueryOutcome};
use crate::config::{EnvSource, ProcessEnv};

/// The result of a successful lookup: `{"data": <value>}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    /// The `data` member of the GraphQL response.
    pub data: Value,
}

impl LookupResult {
    /// Returns the result as a JSON mapping.
    ///
    /// ```rust
    /// use nautobot_graphql::lookup::LookupResult;
    /// use serde_json::json;
    ///
    /// let result = LookupResult { data: json!({"sites": []}) };
    /// assert_eq!(result.into_value(), json!({"data": {"sites": []}}));
    /// ```
    #[must_use]
    pub fn into_value(self) -> Value {
        let mut map = Map::new();
        map.insert("data".to_string(), self.data);
        Value::Object(map)
    }
}

/// Validates `params`, runs the query once through `executor`, and maps the
/// outcome.
///
/// # Errors
///
/// - [`LookupError::Configuration`] / [`LookupError::Validation`] for bad parameters
/// - [`LookupError::RemoteQuery`] when the endpoint rejects the query
/// - [`LookupError::UnexpectedResponse`] when the answer has neither shape
/// - [`LookupError::Http`] for transport failures and non-2xx responses
pub async fn lookup_graphql<E, X>(
    params: &Map<String, Value>,
    env: &E,
    executor: &X,
) -> Result<LookupResult, LookupError>
where
    E: EnvSource + ?Sized,
    X: GraphqlExecutor + ?Sized,
{
    let LookupParams { config, request } = LookupParams::from_map(params, env)?;

    match executor.execute(&config, &request).await? {
        QueryOutcome::Record { json, .. } => {
            let Value::Object(mut payload) = json else {
                return Ok(LookupResult { data: Value::Null });
            };
            if let Some(errors) = payload.get("errors").and_then(GraphqlErrors::from_value) {
                tracing::warn!(
                    "GraphQL query to {} returned partial data with errors: {}",
                    config.url(),
                    errors
                );
            }
            let data = payload.remove("data").unwrap_or(Value::Null);
            Ok(LookupResult { data })
        }
        QueryOutcome::Exception { status, errors } => {
            tracing::warn!(
                "GraphQL query to {} failed (HTTP {}): {}",
                config.url(),
                status,
                errors
            );
            Err(LookupError::RemoteQuery { errors })
        }
        QueryOutcome::Unexpected { status, body } => {
            tracing::debug!("Unexpected GraphQL response body: {}", body);
            Err(LookupError::UnexpectedResponse { status })
        }
    }
}

/// A lookup entry point with its environment and executor bound.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use nautobot_graphql::lookup::{LookupModule, NautobotExecutor};
///
/// let mut env = HashMap::new();
/// env.insert("NAUTOBOT_URL".to_string(), "http://localhost:8000".to_string());
///
/// let module = LookupModule::new(env, NautobotExecutor);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LookupModule<E = ProcessEnv, X = NautobotExecutor> {
    env: E,
    executor: X,
}

impl LookupModule {
    /// Creates a lookup module that reads the process environment and
    /// executes over HTTP.
    #[must_use]
    pub const fn from_process_env() -> Self {
        Self {
            env: ProcessEnv,
            executor: NautobotExecutor,
        }
    }
}

impl<E, X> LookupModule<E, X>
where
    E: EnvSource,
    X: GraphqlExecutor,
{
    /// Creates a lookup module.
    #[must_use]
    pub const fn new(env: E, executor: X) -> Self {
        Self { env, executor }
    }

    /// Runs a lookup with the given keyword parameters.
    ///
    /// # Errors
    ///
    /// See [`lookup_graphql`].
    pub async fn run(&self, params: &Map<String, Value>) -> Result<LookupResult, LookupError> {
        lookup_graphql(params, &self.env, &self.executor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, HttpResponse, HttpResponseError};
    use crate::config::NautobotConfig;
    use crate::error::ConfigError;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed outcome and counts calls.
    struct StubExecutor {
        outcome: fn() -> Result<QueryOutcome, HttpError>,
        calls: AtomicUsize,
    }

    impl StubExecutor {
        fn new(outcome: fn() -> Result<QueryOutcome, HttpError>) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl GraphqlExecutor for StubExecutor {
        fn execute<'a>(
            &'a self,
            _config: &'a NautobotConfig,
            _request: &'a QueryRequest,
        ) -> BoxFuture<'a, Result<QueryOutcome, HttpError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let outcome = (self.outcome)();
            Box::pin(async move { outcome })
        }
    }

    fn sites_record() -> Result<QueryOutcome, HttpError> {
        Ok(QueryOutcome::Record {
            status: 200,
            json: json!({"data": {"sites": []}}),
        })
    }

    fn bad_query() -> Result<QueryOutcome, HttpError> {
        Ok(QueryOutcome::Exception {
            status: 400,
            errors: GraphqlErrors::from_value(&json!(["bad query"])).unwrap(),
        })
    }

    fn html_page() -> Result<QueryOutcome, HttpError> {
        Ok(QueryOutcome::Unexpected {
            status: 200,
            body: "<html></html>".to_string(),
        })
    }

    fn forbidden() -> Result<QueryOutcome, HttpError> {
        Err(HttpResponseError {
            code: 403,
            message: r#"{"detail":"Invalid token"}"#.to_string(),
            request_id: None,
        }
        .into())
    }

    fn params() -> Map<String, Value> {
        json!({
            "query": "{ sites { name } }",
            "url": "http://localhost:8000",
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    fn no_env() -> HashMap<String, String> {
        HashMap::new()
    }

    #[tokio::test]
    async fn test_success_returns_data_mapping() {
        let executor = StubExecutor::new(sites_record);
        let result = lookup_graphql(&params(), &no_env(), &executor).await.unwrap();

        assert_eq!(result.into_value(), json!({"data": {"sites": []}}));
        assert_eq!(executor.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_record_without_data_maps_to_null() {
        fn no_data() -> Result<QueryOutcome, HttpError> {
            Ok(QueryOutcome::Record {
                status: 200,
                json: json!({"extensions": {}}),
            })
        }

        let executor = StubExecutor::new(no_data);
        let result = lookup_graphql(&params(), &no_env(), &executor).await.unwrap();
        assert_eq!(result.data, Value::Null);
    }

    #[tokio::test]
    async fn test_partial_success_keeps_data() {
        fn partial() -> Result<QueryOutcome, HttpError> {
            QueryOutcome::from_response(HttpResponse::new(
                200,
                HashMap::new(),
                r#"{"data":{"sites":[{"name":"den"}],"devices":null},"errors":[{"message":"resolver failed","path":["devices"]}]}"#
                    .to_string(),
            ))
        }

        let executor = StubExecutor::new(partial);
        let result = lookup_graphql(&params(), &no_env(), &executor).await.unwrap();

        assert_eq!(
            result.into_value(),
            json!({"data": {"sites": [{"name": "den"}], "devices": null}})
        );
    }

    #[tokio::test]
    async fn test_error_record_is_remote_query_error() {
        let executor = StubExecutor::new(bad_query);
        let error = lookup_graphql(&params(), &no_env(), &executor)
            .await
            .unwrap_err();

        assert!(matches!(error, LookupError::RemoteQuery { .. }));
        assert!(error.to_string().contains("bad query"));
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_an_error() {
        let executor = StubExecutor::new(html_page);
        let error = lookup_graphql(&params(), &no_env(), &executor)
            .await
            .unwrap_err();

        assert!(matches!(error, LookupError::UnexpectedResponse { status: 200 }));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let executor = StubExecutor::new(forbidden);
        let error = lookup_graphql(&params(), &no_env(), &executor)
            .await
            .unwrap_err();

        assert!(matches!(error, LookupError::Http(HttpError::Response(_))));
    }

    #[tokio::test]
    async fn test_validation_failure_skips_execution() {
        let executor = StubExecutor::new(sites_record);
        let mut params = params();
        params.remove("url");

        let error = lookup_graphql(&params, &no_env(), &executor)
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            LookupError::Configuration(ConfigError::MissingUrl)
        ));
        assert_eq!(executor.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_module_uses_bound_environment() {
        let mut env = no_env();
        env.insert("NAUTOBOT_URL".to_string(), "http://env:8000".to_string());

        let module = LookupModule::new(env, StubExecutor::new(sites_record));
        let mut params = params();
        params.remove("url");

        let result = module.run(&params).await.unwrap();
        assert_eq!(result.data, json!({"sites": []}));
    }
}
