//! # Nautobot GraphQL lookups
//!
//! Runs GraphQL queries against a Nautobot instance and returns the decoded
//! `data` member, with validated connection parameters and environment
//! fallbacks for the URL and token.
//!
//! ## Overview
//!
//! This crate provides:
//! - Keyword-parameter lookups via [`lookup::lookup_graphql`] and [`lookup::LookupModule`]
//! - Type-safe connection settings via [`NautobotConfig`] and [`NautobotConfigBuilder`]
//! - Validated newtypes for the base URL and API token
//! - `NAUTOBOT_URL` / `NAUTOBOT_TOKEN` fallbacks through an injectable [`EnvSource`]
//! - A token-authenticated GraphQL client in [`clients`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nautobot_graphql::lookup::LookupModule;
//! use serde_json::json;
//!
//! let params = json!({
//!     "query": "query { sites { id name region { name } } }",
//!     "url": "https://nautobot.example.com",
//!     "token": "0123456789abcdef",
//! });
//!
//! let result = LookupModule::from_process_env()
//!     .run(params.as_object().unwrap())
//!     .await?;
//!
//! println!("Sites: {}", result.data["sites"]);
//! ```
//!
//! ## Lookup Parameters
//!
//! | Name             | Type    | Required | Fallback          |
//! |------------------|---------|----------|-------------------|
//! | `query`          | string  | yes      |                   |
//! | `variables`      | object  | no       |                   |
//! | `url`            | string  | yes      | `NAUTOBOT_URL`    |
//! | `token`          | string  | no       | `NAUTOBOT_TOKEN`  |
//! | `validate_certs` | boolean | no       | `true`            |
//!
//! ## Using the Client Directly
//!
//! ```rust,ignore
//! use nautobot_graphql::{ApiToken, NautobotConfig, NautobotUrl};
//! use nautobot_graphql::clients::{GraphqlQuery, NautobotApi, QueryOutcome};
//!
//! let config = NautobotConfig::builder()
//!     .url(NautobotUrl::new("https://nautobot.example.com").unwrap())
//!     .token(ApiToken::new("0123456789abcdef").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let api = NautobotApi::new(&config)?;
//! match GraphqlQuery::new("{ sites { name } }", &api, None).query().await? {
//!     QueryOutcome::Record { json, .. } => println!("{}", json["data"]),
//!     QueryOutcome::Exception { errors, .. } => println!("Errors: {}", errors),
//!     QueryOutcome::Unexpected { status, .. } => println!("Unexpected HTTP {}", status),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: The environment is read through [`EnvSource`], never ad hoc
//! - **Fail-fast validation**: Parameters are checked before any request is built
//! - **Single attempt**: Each lookup sends exactly one request, without retries
//! - **Thread-safe**: All types are `Send + Sync`

pub mod clients;
pub mod config;
pub mod error;
pub mod lookup;

// Re-export public types at crate root for convenience
pub use config::{
    ApiToken, EnvSource, NautobotConfig, NautobotConfigBuilder, NautobotUrl, ProcessEnv,
};
pub use error::ConfigError;

// Re-export lookup types
pub use lookup::{lookup_graphql, LookupError, LookupModule, LookupResult, ValidationError};
