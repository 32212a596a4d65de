use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::decl::AggregateDecl;
use crate::error::LoadError;

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, LoadError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(path_error)
}

pub fn from_value_with_path<T: DeserializeOwned>(value: Value) -> Result<T, LoadError> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(path_error)
}

fn path_error(err: serde_path_to_error::Error<serde_json::Error>) -> LoadError {
    LoadError::Json {
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    }
}

/// A declaration document holds one declaration object or an array of them.
pub fn decls_from_str(src: &str) -> Result<Vec<AggregateDecl>, LoadError> {
    let value = from_str_with_path::<Value>(src)?;
    match value {
        Value::Array(_) => from_value_with_path(value),
        other => Ok(vec![from_value_with_path(other)?]),
    }
}

pub fn load_decls(path: &Path) -> Result<Vec<AggregateDecl>, LoadError> {
    let src = std::fs::read_to_string(path)?;
    decls_from_str(&src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_object_or_array() {
        let one = r#"{ "kind": "struct", "name": "A" }"#;
        let many = r#"[{ "kind": "struct", "name": "A" }, { "kind": "enum", "name": "B" }]"#;
        assert_eq!(decls_from_str(one).unwrap().len(), 1);
        assert_eq!(decls_from_str(many).unwrap()[1].name, "B");
    }

    #[test]
    fn errors_carry_the_json_path() {
        let bad = r#"[{ "kind": "struct", "name": "A", "members": [
            { "variable": { "bindings": [ { "pattern": { "identifier": 7 } } ] } }
        ] }]"#;
        match decls_from_str(bad) {
            Err(LoadError::Json { path, .. }) => {
                assert!(path.starts_with("[0].members[0]"), "{path}");
                assert!(path.contains("bindings[0].pattern"), "{path}");
            }
            other => panic!("expected JSON path error, got {other:?}"),
        }
    }
}
