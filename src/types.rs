//! Common types used throughout hal-collection
//!
//! Type aliases for JSON values and the `MapInput` union accepted by every
//! route parameter / option setter.

use crate::error::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, insertion ordered
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Name of a JSON value's type, used in error messages
pub fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

// ============================================================================
// Map Input
// ============================================================================

/// Key/value input for route parameters, route options and attributes
///
/// Either a ready mapping or a finite sequence of pairs that is flattened
/// into a mapping when assigned.
#[derive(Debug, Clone, PartialEq)]
pub enum MapInput {
    /// An ordered mapping
    Map(JsonObject),
    /// Key/value pairs; later duplicates overwrite earlier ones
    Pairs(Vec<(String, JsonValue)>),
}

impl MapInput {
    /// Materialize into a concrete mapping
    pub fn into_map(self) -> JsonObject {
        match self {
            MapInput::Map(map) => map,
            MapInput::Pairs(pairs) => {
                let mut map = JsonObject::new();
                for (key, value) in pairs {
                    if map.contains_key(&key) {
                        debug!("Duplicate key '{}' in pairs input, keeping last value", key);
                    }
                    map.insert(key, value);
                }
                map
            }
        }
    }
}

impl Default for MapInput {
    fn default() -> Self {
        MapInput::Map(JsonObject::new())
    }
}

impl From<JsonObject> for MapInput {
    fn from(map: JsonObject) -> Self {
        MapInput::Map(map)
    }
}

impl From<HashMap<String, JsonValue>> for MapInput {
    fn from(map: HashMap<String, JsonValue>) -> Self {
        MapInput::Map(map.into_iter().collect())
    }
}

impl From<Vec<(String, JsonValue)>> for MapInput {
    fn from(pairs: Vec<(String, JsonValue)>) -> Self {
        MapInput::Pairs(pairs)
    }
}

impl<'a> From<Vec<(&'a str, JsonValue)>> for MapInput {
    fn from(pairs: Vec<(&'a str, JsonValue)>) -> Self {
        MapInput::Pairs(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

impl TryFrom<JsonValue> for MapInput {
    type Error = Error;

    /// Objects become `Map`; arrays of `[key, value]` pairs become `Pairs`.
    fn try_from(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(map) => Ok(MapInput::Map(map)),
            JsonValue::Array(items) => items
                .into_iter()
                .map(pair_from_value)
                .collect::<Result<Vec<_>>>()
                .map(MapInput::Pairs),
            other => Err(Error::invalid_argument(format!(
                "expected a mapping or key/value pairs, received {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn pair_from_value(item: JsonValue) -> Result<(String, JsonValue)> {
    if let JsonValue::Array(mut pair) = item {
        if pair.len() == 2 {
            let value = pair.pop().unwrap_or(JsonValue::Null);
            if let Some(JsonValue::String(key)) = pair.pop() {
                return Ok((key, value));
            }
            return Err(Error::invalid_argument(
                "key/value pair must have a string key",
            ));
        }
        return Err(Error::invalid_argument(format!(
            "key/value pair must have exactly 2 elements, received {}",
            pair.len()
        )));
    }
    Err(Error::invalid_argument(format!(
        "expected a [key, value] pair, received {}",
        json_type_name(&item)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_pairs_into_map() {
        let input = MapInput::from(vec![("a", json!(1)), ("b", json!("two"))]);
        let map = input.into_map();
        assert_eq!(JsonValue::Object(map), json!({"a": 1, "b": "two"}));
    }

    #[test]
    fn test_pairs_last_seen_wins() {
        let input = MapInput::from(vec![("a", json!(1)), ("b", json!(2)), ("a", json!(3))]);
        let map = input.into_map();
        assert_eq!(map.get("a"), Some(&json!(3)));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_try_from_object() {
        let input = MapInput::try_from(json!({"id": "id"})).unwrap();
        assert_eq!(input, MapInput::Map(json!({"id": "id"}).as_object().unwrap().clone()));
    }

    #[test]
    fn test_try_from_pair_array() {
        let input = MapInput::try_from(json!([["a", 1], ["b", null]])).unwrap();
        assert_eq!(
            input,
            MapInput::Pairs(vec![
                ("a".to_string(), json!(1)),
                ("b".to_string(), JsonValue::Null)
            ])
        );
    }

    #[test]
    fn test_try_from_empty_array() {
        let input = MapInput::try_from(json!([])).unwrap();
        assert!(input.into_map().is_empty());
    }

    #[test_case(json!(42), "number" ; "number")]
    #[test_case(json!("abc"), "string" ; "string")]
    #[test_case(json!(true), "boolean" ; "boolean")]
    #[test_case(JsonValue::Null, "null" ; "null")]
    fn test_try_from_scalar_fails(value: JsonValue, kind: &str) {
        let err = MapInput::try_from(value).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert!(err.to_string().contains(kind));
    }

    #[test_case(json!([1, 2]) ; "non-pair items")]
    #[test_case(json!([["a"]]) ; "short pair")]
    #[test_case(json!([[1, "a"]]) ; "non-string key")]
    fn test_try_from_bad_pairs_fails(value: JsonValue) {
        let err = MapInput::try_from(value).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }
}
