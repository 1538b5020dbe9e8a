use crate::utils::error::{LoadError, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Parse a job file from disk into a JSON tree value.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = std::fs::read_to_string(&path).map_err(LoadError::IoError)?;
    parse_literal(&content)
}

/// Parse a literal JSON string into a tree value.
pub fn parse_literal(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(LoadError::ParseError)
}

/// Structural schema check: every key the schema object names must exist in
/// the value with the same coarse JSON type. Schema leaf values are
/// placeholders, so an empty object schema accepts any object and a `""`
/// schema accepts any string. Content is never inspected.
pub fn validate(schema: &Value, value: &Value) -> bool {
    match (schema, value) {
        (Value::Object(schema_map), Value::Object(value_map)) => {
            schema_map.iter().all(|(key, schema_child)| {
                value_map
                    .get(key)
                    .is_some_and(|child| validate(schema_child, child))
            })
        }
        (Value::Null, Value::Null) => true,
        (Value::Bool(_), Value::Bool(_)) => true,
        (Value::Number(_), Value::Number(_)) => true,
        (Value::String(_), Value::String(_)) => true,
        (Value::Array(_), Value::Array(_)) => true,
        _ => false,
    }
}

/// Look up a string field on an object section.
pub fn get_str<'a>(section: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    section.get(key).and_then(Value::as_str)
}

/// Look up an object-valued field on the document root.
pub fn get_object<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    value.get(key).and_then(Value::as_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Value {
        json!({"name": "", "input": {}, "output": {}, "events": {}})
    }

    #[test]
    fn test_validate_accepts_matching_shape() {
        let doc = json!({
            "name": "job",
            "input": {"method": "inline-data"},
            "output": {"method": "file-out"},
            "events": {}
        });
        assert!(validate(&schema(), &doc));
    }

    #[test]
    fn test_validate_rejects_missing_key() {
        let doc = json!({"name": "job", "input": {}, "output": {}});
        assert!(!validate(&schema(), &doc));
    }

    #[test]
    fn test_validate_rejects_wrong_type_category() {
        let doc = json!({"name": 7, "input": {}, "output": {}, "events": {}});
        assert!(!validate(&schema(), &doc));

        let doc = json!({"name": "job", "input": [], "output": {}, "events": {}});
        assert!(!validate(&schema(), &doc));
    }

    #[test]
    fn test_validate_ignores_extra_keys() {
        let doc = json!({
            "name": "job",
            "input": {},
            "output": {},
            "events": {},
            "comment": "unchecked"
        });
        assert!(validate(&schema(), &doc));
    }

    #[test]
    fn test_empty_object_schema_matches_any_object() {
        let doc = json!({"anything": [1, 2, 3]});
        assert!(validate(&json!({}), &doc));
    }

    #[test]
    fn test_parse_literal_rejects_malformed_json() {
        assert!(parse_literal("{not json").is_err());
    }

    #[test]
    fn test_get_str_requires_string_value() {
        let section = json!({"method": "inline-data", "count": 3});
        let section = section.as_object().unwrap();
        assert_eq!(get_str(section, "method"), Some("inline-data"));
        assert_eq!(get_str(section, "count"), None);
        assert_eq!(get_str(section, "missing"), None);
    }
}
