//! Client types for the Nautobot API.
//!
//! This module provides the connection and request layer used by
//! [`lookup`](crate::lookup). It handles token authentication, TLS policy,
//! and classification of GraphQL responses.
//!
//! # Overview
//!
//! - [`NautobotApi`]: An authenticated connection to one Nautobot instance
//! - [`HttpResponse`]: A response from the API, with raw and parsed body
//! - [`HttpError`]: Network failures and non-2xx responses
//! - [`graphql::GraphqlQuery`]: A single GraphQL request
//! - [`graphql::QueryOutcome`]: The classified answer to a GraphQL request
//!
//! # Example
//!
//! ```rust,ignore
//! use nautobot_graphql::{NautobotConfig, NautobotUrl};
//! use nautobot_graphql::clients::{GraphqlQuery, NautobotApi};
//!
//! let config = NautobotConfig::builder()
//!     .url(NautobotUrl::new("https://nautobot.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let api = NautobotApi::new(&config)?;
//! let outcome = GraphqlQuery::new("{ sites { name } }", &api, None).query().await?;
//! ```
//!
//! # Retry Behavior
//!
//! Requests are sent exactly once. Timeouts are whatever reqwest applies
//! by default.

mod api;
mod errors;
pub mod graphql;
mod http_response;

pub use api::{NautobotApi, SDK_VERSION};
pub use errors::{HttpError, HttpResponseError};
pub use http_response::HttpResponse;

// Re-export GraphQL types at the clients module level
pub use graphql::{GraphqlErrors, GraphqlQuery, QueryOutcome};
