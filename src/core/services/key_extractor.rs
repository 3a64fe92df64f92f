use serde_json::{Map, Value};

/// Find the value of the property named `key` anywhere in `map`.
///
/// A property directly on `map` wins. Otherwise nested objects are
/// searched depth-first in declaration order and the first hit is
/// returned. Arrays and scalars are never descended into.
pub fn find_key<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(key) {
        return Some(value);
    }

    map.values().find_map(|value| match value {
        Value::Object(child) => find_key(child, key),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn finds_top_level_key() {
        let map = object(json!({"app-port": 3000, "proxy": "http://proxy"}));
        assert_eq!(find_key(&map, "app-port"), Some(&json!(3000)));
    }

    #[test]
    fn finds_nested_key() {
        let map = object(json!({
            "apis": {"postRequest": {"emails": {"noreply": "noreply@localhost"}}}
        }));
        assert_eq!(
            find_key(&map, "emails"),
            Some(&json!({"noreply": "noreply@localhost"}))
        );
        assert_eq!(find_key(&map, "noreply"), Some(&json!("noreply@localhost")));
    }

    #[test]
    fn returns_whole_subtree_for_object_values() {
        let map = object(json!({"apis": {"a": 1, "b": {"c": 2}}}));
        assert_eq!(find_key(&map, "apis"), Some(&json!({"a": 1, "b": {"c": 2}})));
    }

    #[test]
    fn missing_key_is_none() {
        let map = object(json!({"a": {"b": 1}}));
        assert_eq!(find_key(&map, "zzz"), None);
    }

    #[test]
    fn does_not_descend_into_arrays() {
        let map = object(json!({"list": [{"hidden": true}]}));
        assert_eq!(find_key(&map, "hidden"), None);
    }

    #[test]
    fn direct_property_shadows_nested_one() {
        let map = object(json!({"outer": {"port": 1}, "port": 2}));
        assert_eq!(find_key(&map, "port"), Some(&json!(2)));
    }

    #[test]
    fn first_declared_subtree_wins() {
        let map = object(json!({
            "first": {"deep": {"port": 1}},
            "second": {"port": 2}
        }));
        assert_eq!(find_key(&map, "port"), Some(&json!(1)));
    }

    #[test]
    fn null_value_counts_as_found() {
        let map = object(json!({"a": {"optional": null}}));
        assert_eq!(find_key(&map, "optional"), Some(&Value::Null));
    }
}
