//! GraphQL requests against the Nautobot API.
//!
//! # Overview
//!
//! - [`GraphqlQuery`]: One request (query document + variables) bound to a
//!   [`NautobotApi`](crate::clients::NautobotApi) connection
//! - [`QueryOutcome`]: What the endpoint answered: a record, a rejected
//!   query, or something else
//! - [`GraphqlErrors`] / [`GraphqlError`]: The `errors` list of a response
//!
//! # Example
//!
//! ```rust,ignore
//! use nautobot_graphql::clients::{GraphqlQuery, NautobotApi, QueryOutcome};
//! use serde_json::{json, Map};
//!
//! let api = NautobotApi::new(&config)?;
//!
//! let mut variables = Map::new();
//! variables.insert("site_name".to_string(), json!("den"));
//!
//! let query = GraphqlQuery::new(
//!     "query ($site_name: String!) { sites (name: $site_name) { id name } }",
//!     &api,
//!     Some(variables),
//! );
//!
//! if let QueryOutcome::Record { json, .. } = query.query().await? {
//!     println!("Sites: {}", json["data"]["sites"]);
//! }
//! ```
//!
//! # Response Classification
//!
//! - A JSON object with a 2xx status is a [`QueryOutcome::Record`], even
//!   when partial `data` comes with an `errors` list
//! - A JSON object with status 400 is a [`QueryOutcome::Exception`]
//! - A 2xx status with a body that is not a JSON object is
//!   [`QueryOutcome::Unexpected`]
//! - Any other status is an [`HttpError`](crate::clients::HttpError)

mod errors;
mod query;

pub use errors::{GraphqlError, GraphqlErrors, GraphqlLocation};
pub use query::{GraphqlQuery, QueryOutcome, GRAPHQL_PATH, QUERY_ERROR_STATUS};
