//! HTTP-specific error types for the Nautobot client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses that carry no GraphQL errors
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use nautobot_graphql::clients::{GraphqlQuery, HttpError};
//!
//! match query.query().await {
//!     Ok(outcome) => println!("Outcome: {:?}", outcome),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//!     Err(HttpError::ClientBuild(e)) => println!("Client setup failed: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when the endpoint answers with a non-successful status
/// and no GraphQL error payload.
///
/// # Example
///
/// ```rust
/// use nautobot_graphql::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 403,
///     message: r#"{"detail":"Invalid token"}"#.to_string(),
///     request_id: None,
/// };
///
/// assert!(error.to_string().contains("403"));
/// assert!(error.to_string().contains("Invalid token"));
/// ```
#[derive(Debug, Error)]
#[error("Nautobot returned HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body, as received.
    pub message: String,
    /// Value of the `X-Request-Id` response header, if present.
    pub request_id: Option<String>,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}
