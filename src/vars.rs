use std::io::Read;

use serde_json::Value;
use tera::Context;

use crate::error::{Result, TplrError};

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse the whole stream as one JSON document and turn it into the
/// top-level template scope. Anything other than a JSON object is
/// rejected, since only key/value pairs can be bound as variables.
pub fn load(reader: impl Read, source_name: &str) -> Result<Context> {
    log::info!("loading template variables from {}", source_name);

    let value: Value =
        serde_json::from_reader(reader).map_err(|e| TplrError::MalformedVariables {
            source_name: source_name.to_string(),
            source: e,
        })?;

    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(TplrError::VariablesNotAnObject {
                source_name: source_name.to_string(),
                found: json_type_name(&other).to_string(),
            })
        }
    };

    let mut context = Context::new();
    for (key, value) in map {
        context.insert(&key, &value);
    }
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_object() {
        let context = load(r#"{"key": "val", "n": 3}"#.as_bytes(), "-").unwrap();
        assert_eq!(context.get("key"), Some(&Value::String("val".into())));
        assert_eq!(context.get("n"), Some(&Value::from(3)));
    }

    #[test]
    fn test_load_nested_values_survive() {
        let context = load(r#"{"list": [1, 2], "obj": {"a": null}}"#.as_bytes(), "-").unwrap();
        assert_eq!(context.get("list"), Some(&serde_json::json!([1, 2])));
        assert_eq!(context.get("obj"), Some(&serde_json::json!({"a": null})));
    }

    #[test]
    fn test_load_invalid_json() {
        let err = load("{not json".as_bytes(), "vars.json").unwrap_err();
        assert!(matches!(err, TplrError::MalformedVariables { .. }));
        assert!(err.to_string().contains("vars.json"));
    }

    #[test]
    fn test_load_non_object_document() {
        let err = load(r#"["key", "val"]"#.as_bytes(), "-").unwrap_err();
        match err {
            TplrError::VariablesNotAnObject { found, .. } => assert_eq!(found, "an array"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_empty_stream() {
        let err = load("".as_bytes(), "-").unwrap_err();
        assert!(matches!(err, TplrError::MalformedVariables { .. }));
    }
}
