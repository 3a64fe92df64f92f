use serde_json::{Map, Value};

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The full merged mapping for the active environment.
    Config(Map<String, Value>),
    /// Requested keys mapped to their values, or to `true` once injected.
    Keys(Map<String, Value>),
    /// The whole mapping was written to the env store.
    Injected,
}

impl Resolution {
    /// Look up a top-level entry of a `Config` or `Keys` resolution.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Config(map) | Self::Keys(map) => map.get(key),
            Self::Injected => None,
        }
    }

    /// Render as JSON: mappings stay mappings, `Injected` becomes `true`.
    pub fn into_value(self) -> Value {
        match self {
            Self::Config(map) | Self::Keys(map) => Value::Object(map),
            Self::Injected => Value::Bool(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn injected_renders_as_true() {
        assert_eq!(Resolution::Injected.into_value(), json!(true));
        assert_eq!(Resolution::Injected.get("anything"), None);
    }

    #[test]
    fn keys_render_as_object() {
        let mut map = Map::new();
        map.insert("apis".into(), Value::Bool(true));

        let resolution = Resolution::Keys(map);
        assert_eq!(resolution.get("apis"), Some(&json!(true)));
        assert_eq!(resolution.into_value(), json!({"apis": true}));
    }
}
