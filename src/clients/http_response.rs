//! HTTP response type returned by [`NautobotApi`](crate::clients::NautobotApi).

use std::collections::HashMap;

/// A response from the Nautobot API.
///
/// The body is kept both as received and, when it is valid JSON, parsed.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use nautobot_graphql::clients::HttpResponse;
///
/// let response = HttpResponse::new(200, HashMap::new(), r#"{"data":{}}"#.to_string());
/// assert!(response.is_ok());
/// assert!(response.json().unwrap().get("data").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// Raw response body.
    pub body: String,
    json: Option<serde_json::Value>,
}

impl HttpResponse {
    /// Creates a response, parsing the body as JSON when possible.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        let json = serde_json::from_str(&body).ok();
        Self {
            code,
            headers,
            body,
            json,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the parsed JSON body, if the body was valid JSON.
    #[must_use]
    pub const fn json(&self) -> Option<&serde_json::Value> {
        self.json.as_ref()
    }

    /// Consumes the response and returns the raw and parsed body.
    #[must_use]
    pub fn into_parts(self) -> (String, Option<serde_json::Value>) {
        (self.body, self.json)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub(crate) fn parse_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
