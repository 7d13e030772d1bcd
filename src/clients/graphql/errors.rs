//! GraphQL error entries returned in a response's `errors` field.
//!
//! Entries normally follow the GraphQL response format
//! (`{"message": ..., "locations": [...], "path": [...]}`), but bare strings
//! are accepted as well so every error message is preserved.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A source location inside the query document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlLocation {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

/// One entry of a GraphQL `errors` list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    /// Human readable message.
    pub message: String,
    /// Locations in the query document the error refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<GraphqlLocation>>,
    /// Response path of the field that failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    /// Server-specific additional information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphqlError {
    /// Creates an error entry with only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: None,
            path: None,
            extensions: None,
        }
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(message) => Self::new(message.clone()),
            other => serde_json::from_value(other.clone())
                .unwrap_or_else(|_| Self::new(other.to_string())),
        }
    }
}

/// The `errors` list of a GraphQL response.
///
/// Each entry is kept as received as well as parsed, and `Display` renders
/// the received entries, e.g. `[{"message": "bad query", "path": ["sites"]}]`.
///
/// # Example
///
/// ```rust
/// use nautobot_graphql::clients::graphql::GraphqlErrors;
/// use serde_json::json;
///
/// let errors = GraphqlErrors::from_value(&json!([{"message": "bad query"}])).unwrap();
/// assert_eq!(errors.to_string(), r#"[{"message":"bad query"}]"#);
/// assert_eq!(errors.messages(), vec!["bad query"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphqlErrors {
    entries: Vec<GraphqlError>,
    raw: Vec<Value>,
}

impl GraphqlErrors {
    /// Parses an `errors` value.
    ///
    /// Returns `None` for `null` and for an empty list, which both mean
    /// "no errors". A single non-list value is treated as one error.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let raw = match value {
            Value::Null => return None,
            Value::Array(items) => items.clone(),
            other => vec![other.clone()],
        };

        if raw.is_empty() {
            return None;
        }

        Some(Self {
            entries: raw.iter().map(GraphqlError::from_value).collect(),
            raw,
        })
    }

    /// Returns the error messages in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|error| error.message.as_str()).collect()
    }

    /// Returns the parsed error entries.
    #[must_use]
    pub fn as_slice(&self) -> &[GraphqlError] {
        &self.entries
    }

    /// Returns the entries exactly as the endpoint sent them.
    #[must_use]
    pub fn raw(&self) -> &[Value] {
        &self.raw
    }

    /// Returns the number of error entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for GraphqlErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.raw.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}

impl Serialize for GraphqlErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GraphqlErrors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value).unwrap_or_default())
    }
}
