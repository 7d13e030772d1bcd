//! A single GraphQL request against a Nautobot connection.

use serde_json::{Map, Value};

use crate::clients::graphql::GraphqlErrors;
use crate::clients::{HttpError, HttpResponse, HttpResponseError, NautobotApi};

/// Path of the GraphQL endpoint, relative to the Nautobot base URL.
pub const GRAPHQL_PATH: &str = "api/graphql/";

/// HTTP status a GraphQL endpoint uses to reject a query.
pub const QUERY_ERROR_STATUS: u16 = 400;

/// Result of executing a [`GraphqlQuery`].
///
/// Transport failures are reported separately as [`HttpError`]; this enum
/// only describes what the endpoint answered.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryOutcome {
    /// A 2xx answer with a JSON object body.
    ///
    /// The payload may carry `errors` next to partial `data`.
    Record {
        /// HTTP status code.
        status: u16,
        /// The full JSON payload (`data`, `errors`, `extensions`, ...).
        json: Value,
    },
    /// The endpoint rejected the query with HTTP 400.
    Exception {
        /// HTTP status code.
        status: u16,
        /// The reported errors, empty if the body listed none.
        errors: GraphqlErrors,
    },
    /// A successful status with a body that is not a JSON object.
    Unexpected {
        /// HTTP status code.
        status: u16,
        /// The body, as received.
        body: String,
    },
}

impl QueryOutcome {
    /// Classifies an HTTP response from the GraphQL endpoint.
    ///
    /// - 2xx with a JSON object: [`QueryOutcome::Record`]
    /// - 2xx with anything else: [`QueryOutcome::Unexpected`]
    /// - 400 with a JSON object: [`QueryOutcome::Exception`]
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for any other status, and for a 400
    /// whose body is not a JSON object.
    pub fn from_response(response: HttpResponse) -> Result<Self, HttpError> {
        let status = response.code;

        if status == QUERY_ERROR_STATUS {
            if let Some(Value::Object(payload)) = response.json() {
                let errors = payload
                    .get("errors")
                    .and_then(GraphqlErrors::from_value)
                    .unwrap_or_default();
                return Ok(Self::Exception { status, errors });
            }
        }

        if !response.is_ok() {
            return Err(HttpResponseError {
                code: status,
                request_id: response.request_id().map(String::from),
                message: response.body,
            }
            .into());
        }

        match response.into_parts() {
            (_, Some(json @ Value::Object(_))) => Ok(Self::Record { status, json }),
            (body, _) => Ok(Self::Unexpected { status, body }),
        }
    }
}

/// One GraphQL request awaiting execution.
///
/// # Example
///
/// ```rust,ignore
/// use nautobot_graphql::clients::{GraphqlQuery, NautobotApi, QueryOutcome};
///
/// let api = NautobotApi::new(&config)?;
/// let query = GraphqlQuery::new("query { sites { name } }", &api, None);
///
/// match query.query().await? {
///     QueryOutcome::Record { json, .. } => println!("{}", json["data"]),
///     QueryOutcome::Exception { errors, .. } => println!("errors: {}", errors),
///     QueryOutcome::Unexpected { body, .. } => println!("unexpected: {}", body),
/// }
/// ```
#[derive(Debug)]
pub struct GraphqlQuery<'a> {
    query: String,
    api: &'a NautobotApi,
    variables: Option<Map<String, Value>>,
}

impl<'a> GraphqlQuery<'a> {
    /// Creates a query bound to a connection.
    #[must_use]
    pub fn new(
        query: impl Into<String>,
        api: &'a NautobotApi,
        variables: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            query: query.into(),
            api,
            variables,
        }
    }

    /// Returns the JSON body sent to the endpoint.
    #[must_use]
    pub fn request_body(&self) -> Value {
        serde_json::json!({
            "query": self.query,
            "variables": self.variables,
        })
    }

    /// Sends the query once and classifies the answer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or on a non-2xx response
    /// other than a GraphQL rejection.
    pub async fn query(&self) -> Result<QueryOutcome, HttpError> {
        tracing::debug!(
            "Sending GraphQL query to {}",
            self.api.base_url().join(GRAPHQL_PATH)
        );

        let response = self.api.post_json(GRAPHQL_PATH, &self.request_body()).await?;
        QueryOutcome::from_response(response)
    }
}
