//! Request Types
//!
//! Entry points, request parameters and parsed responses.

use serde::Serialize;
use serde_json::{Map, Value};

/// Base URL family a request targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    /// Legacy REST API (`/api/`).
    Api,
    /// Reporting API (`/gds/`).
    Gds,
    /// Dedicated GraphQL endpoint.
    Graphql,
}

impl EntryPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Gds => "gds",
            Self::Graphql => "graphql",
        }
    }
}

impl std::fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request parameters.
///
/// Encoded as a query string, a form body or a JSON body depending on the
/// method and entry point.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Flatten into string pairs for query strings and form bodies.
    ///
    /// Strings are taken verbatim, `null` becomes empty, anything else is
    /// rendered as JSON.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key.clone(), rendered)
            })
            .collect()
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Parsed response from the resource API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON body; an empty object when the body was not valid JSON.
    pub body: Value,
}

impl ApiResponse {
    /// Build a response, decoding the body leniently.
    pub fn from_raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: parse_response(body),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Decode a JSON body, substituting an empty object on failure.
pub fn parse_response(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::Object(Map::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_point_names() {
        assert_eq!(EntryPoint::Api.as_str(), "api");
        assert_eq!(EntryPoint::Gds.to_string(), "gds");
        assert_eq!(EntryPoint::Graphql.as_str(), "graphql");
    }

    #[test]
    fn test_params_to_pairs() {
        let params = Params::new()
            .with("a", 1)
            .with("name", "value with space")
            .with("flag", true)
            .with("empty", Value::Null);

        let pairs = params.to_pairs();
        assert!(pairs.contains(&("a".to_string(), "1".to_string())));
        assert!(pairs.contains(&("name".to_string(), "value with space".to_string())));
        assert!(pairs.contains(&("flag".to_string(), "true".to_string())));
        assert!(pairs.contains(&("empty".to_string(), String::new())));
    }

    #[test]
    fn test_params_serialize_as_object() {
        let params: Params = [("query", "query { user { id } }")].into_iter().collect();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"query": "query { user { id } }"})
        );
    }

    #[test]
    fn test_parse_response_lenient() {
        assert_eq!(parse_response(r#"{"ok":true}"#), json!({"ok": true}));
        assert_eq!(parse_response("<html>oops</html>"), json!({}));
        assert_eq!(parse_response(""), json!({}));
    }

    #[test]
    fn test_api_response_success_range() {
        assert!(ApiResponse::from_raw(204, "").is_success());
        assert!(!ApiResponse::from_raw(404, "{}").is_success());
    }
}
