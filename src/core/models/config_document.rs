use serde_json::{Map, Value};

use crate::core::errors::{ConfigError, Result};

/// Name of the section shared by every environment.
pub const BASE_SECTION: &str = "base";

/// A parsed configuration document.
///
/// The root is always a JSON object: a `base` section with values
/// common to all environments, plus zero or more environment-named
/// sections (`dev`, `prod`, ...) holding overrides. Property order
/// follows the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    root: Map<String, Value>,
}

impl ConfigDocument {
    /// Parse raw JSON text. `source_name` only feeds error messages.
    ///
    /// # Errors
    ///
    /// `InvalidDocument` if the text is not JSON or its root is not an object.
    pub fn parse(content: &str, source_name: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| ConfigError::InvalidDocument {
                source_name: source_name.to_string(),
                detail: e.to_string(),
            })?;
        Self::from_value(value, source_name)
    }

    /// Wrap an already parsed value, rejecting scalars and arrays.
    pub fn from_value(value: Value, source_name: &str) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ConfigError::InvalidDocument {
                source_name: source_name.to_string(),
                detail: format!("expected a JSON object, found {}", kind_of(&other)),
            }),
        }
    }

    /// The `base` section, if present.
    pub fn base(&self) -> Option<&Value> {
        self.root.get(BASE_SECTION)
    }

    /// The section named after `environment`, if present.
    pub fn environment(&self, environment: &str) -> Option<&Value> {
        self.root.get(environment)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_exposes_base_and_environment_sections() {
        let doc = ConfigDocument::parse(
            r#"{"base": {"a": 1}, "prod": {}, "dev": {"a": 2}}"#,
            "env.json",
        )
        .unwrap();

        assert_eq!(doc.environment("prod"), Some(&serde_json::json!({})));
        assert_eq!(doc.base().unwrap()["a"], 1);
        assert_eq!(doc.environment("dev").unwrap()["a"], 2);
        assert!(doc.environment("staging").is_none());
    }

    #[test]
    fn parse_rejects_non_json() {
        let err = ConfigDocument::parse("<html>not json</html>", "remote").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDocument { .. }));
        assert_eq!(err.title(), Some("ConfigError"));
    }

    #[test]
    fn parse_rejects_scalar_and_array_roots() {
        for content in ["42", "\"text\"", "[1, 2]", "null"] {
            let result = ConfigDocument::parse(content, "env.json");
            assert!(result.is_err(), "{content} should be rejected");
        }
    }

    #[test]
    fn from_value_reports_found_kind() {
        let err = ConfigDocument::from_value(Value::Bool(true), "env.json").unwrap_err();
        assert!(err.to_string().contains("a boolean"));
    }
}
