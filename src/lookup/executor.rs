//! The seam between lookup validation and the remote client.

pub use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use crate::clients::{GraphqlQuery, HttpError, NautobotApi, QueryOutcome};
use crate::config::NautobotConfig;
use crate::lookup::QueryRequest;

/// Runs one GraphQL request against a Nautobot instance.
///
/// [`NautobotExecutor`] is the real implementation; tests substitute stubs
/// that return canned [`QueryOutcome`]s.
///
/// # Example
///
/// ```rust
/// use nautobot_graphql::clients::{HttpError, QueryOutcome};
/// use nautobot_graphql::lookup::{BoxFuture, GraphqlExecutor, QueryRequest};
/// use nautobot_graphql::NautobotConfig;
/// use serde_json::json;
///
/// struct Canned;
///
/// impl GraphqlExecutor for Canned {
///     fn execute<'a>(
///         &'a self,
///         _config: &'a NautobotConfig,
///         _request: &'a QueryRequest,
///     ) -> BoxFuture<'a, Result<QueryOutcome, HttpError>> {
///         Box::pin(async {
///             Ok(QueryOutcome::Record {
///                 status: 200,
///                 json: json!({"data": {"sites": []}}),
///             })
///         })
///     }
/// }
/// ```
pub trait GraphqlExecutor: Send + Sync {
    /// Executes `request` once using the connection described by `config`.
    fn execute<'a>(
        &'a self,
        config: &'a NautobotConfig,
        request: &'a QueryRequest,
    ) -> BoxFuture<'a, Result<QueryOutcome, HttpError>>;
}

/// Executes requests over HTTP with a fresh [`NautobotApi`] per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct NautobotExecutor;

impl GraphqlExecutor for NautobotExecutor {
    fn execute<'a>(
        &'a self,
        config: &'a NautobotConfig,
        request: &'a QueryRequest,
    ) -> BoxFuture<'a, Result<QueryOutcome, HttpError>> {
        async move {
            let api = NautobotApi::new(config)?;
            let query = GraphqlQuery::new(request.query(), &api, request.variables().cloned());
            query.query().await
        }
        .boxed()
    }
}
