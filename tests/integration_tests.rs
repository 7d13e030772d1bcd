//! Integration tests for connection configuration and parameter handling.
//!
//! These tests exercise the public configuration API and lookup parameter
//! validation without network access.

use std::collections::HashMap;

use nautobot_graphql::clients::{HttpError, QueryOutcome};
use nautobot_graphql::config::{resolve_setting, TOKEN_ENV_VAR, URL_ENV_VAR};
use nautobot_graphql::lookup::{BoxFuture, GraphqlExecutor, LookupParams, QueryRequest};
use nautobot_graphql::{
    ApiToken, ConfigError, LookupError, LookupModule, NautobotConfig, NautobotUrl,
};
use serde_json::{json, Map, Value};

/// Answers every query with an empty site list.
struct EmptySites;

impl GraphqlExecutor for EmptySites {
    fn execute<'a>(
        &'a self,
        config: &'a NautobotConfig,
        request: &'a QueryRequest,
    ) -> BoxFuture<'a, Result<QueryOutcome, HttpError>> {
        assert_eq!(config.url().as_ref(), "https://nautobot.example.com");
        assert!(request.query().contains("sites"));
        Box::pin(async {
            Ok(QueryOutcome::Record {
                status: 200,
                json: json!({"data": {"sites": []}}),
            })
        })
    }
}

fn params(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_full_workflow_create_newtypes_build_config_access_fields() {
    let url = NautobotUrl::new("https://nautobot.example.com:8443/").unwrap();
    let token = ApiToken::new("0123456789abcdef").unwrap();

    let config = NautobotConfig::builder()
        .url(url)
        .token(token)
        .validate_certs(false)
        .api_version("2.1")
        .user_agent_prefix("TestApp/1.0")
        .build()
        .unwrap();

    assert_eq!(config.url().as_ref(), "https://nautobot.example.com:8443");
    assert_eq!(config.url().host_name(), "nautobot.example.com");
    assert_eq!(config.token().unwrap().as_ref(), "0123456789abcdef");
    assert!(!config.validate_certs());
    assert_eq!(config.api_version(), Some("2.1"));
    assert_eq!(config.user_agent_prefix(), Some("TestApp/1.0"));
}

#[test]
fn test_environment_precedence() {
    let mut env = HashMap::new();
    env.insert(URL_ENV_VAR.to_string(), "https://env.example.com".to_string());

    assert_eq!(
        resolve_setting(Some("https://explicit.example.com"), &env, URL_ENV_VAR).as_deref(),
        Some("https://explicit.example.com")
    );
    assert_eq!(
        resolve_setting(None, &env, URL_ENV_VAR).as_deref(),
        Some("https://env.example.com")
    );
    assert_eq!(resolve_setting(None, &env, TOKEN_ENV_VAR), None);
}

#[test]
fn test_validation_error_messages_are_actionable() {
    let env: HashMap<String, String> = HashMap::new();

    let error = LookupParams::from_map(&params(json!({"query": "{ sites }"})), &env).unwrap_err();
    assert!(error.to_string().contains("Missing URL of Nautobot"));

    let error = LookupParams::from_map(
        &params(json!({"url": "https://nautobot.example.com", "validate_certs": "yes"})),
        &env,
    )
    .unwrap_err();
    assert!(error.to_string().contains("validate_certs must be a boolean"));

    let error = LookupParams::from_map(
        &params(json!({"url": "https://nautobot.example.com", "token": ""})),
        &env,
    )
    .unwrap_err();
    assert!(error.to_string().contains("Query parameter was not passed"));
}

#[test]
fn test_whitespace_token_is_rejected() {
    let env: HashMap<String, String> = HashMap::new();
    let error = LookupParams::from_map(
        &params(json!({
            "url": "https://nautobot.example.com",
            "token": "   ",
            "query": "{ sites }",
        })),
        &env,
    )
    .unwrap_err();

    assert!(matches!(
        error,
        LookupError::Configuration(ConfigError::EmptyToken)
    ));
}

#[test]
fn test_lookup_module_can_be_driven_from_blocking_code() {
    let module = LookupModule::new(HashMap::<String, String>::new(), EmptySites);
    let result = tokio_test::block_on(module.run(&params(json!({
        "query": "{ sites { name } }",
        "url": "https://nautobot.example.com",
    }))))
    .unwrap();

    assert_eq!(result.into_value(), json!({"data": {"sites": []}}));
}
