use serde_json::{Map, Value};

use crate::core::errors::{ConfigError, Result};
use crate::core::models::config_document::{BASE_SECTION, ConfigDocument};

/// Merge the `base` section with the section for `environment`.
///
/// 1. Start with every entry from `base` (absent = empty).
/// 2. Overlay each top-level entry of the environment section
///    (absent = no overrides). Environment values replace base
///    values wholesale; nested objects are not merged.
///
/// # Errors
///
/// `InvalidSection` if either section is present but not an object.
pub fn merge_environment(
    document: &ConfigDocument,
    environment: &str,
) -> Result<Map<String, Value>> {
    let mut merged = section(document.base(), BASE_SECTION)?
        .cloned()
        .unwrap_or_default();

    if let Some(overlay) = section(document.environment(environment), environment)? {
        for (key, value) in overlay {
            merged.insert(key.clone(), value.clone());
        }
    }

    Ok(merged)
}

fn section<'a>(value: Option<&'a Value>, name: &str) -> Result<Option<&'a Map<String, Value>>> {
    match value {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(ConfigError::InvalidSection {
            section: name.to_string(),
        }),
    }
}
