use crate::core::errors::{ConfigError, Result};
use crate::core::traits::env_store::EnvStore;

/// Writes into the real process environment.
///
/// Values are inherited by child processes spawned afterwards and
/// persist until the process exits. Writes are not synchronized with
/// other threads reading the environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvStore;

impl EnvStore for ProcessEnvStore {
    /// `set_var` panics on these inputs, so they are rejected up front.
    fn validate(&self, key: &str, value: &str) -> Result<()> {
        let reason = if key.is_empty() {
            "name is empty"
        } else if key.contains('=') {
            "name contains '='"
        } else if key.contains('\0') {
            "name contains a NUL byte"
        } else if value.contains('\0') {
            "value contains a NUL byte"
        } else {
            return Ok(());
        };

        Err(ConfigError::InvalidEnvEntry {
            key: key.escape_debug().to_string(),
            reason: reason.to_string(),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.validate(key, value)?;
        // SAFETY: callers inject configuration before spawning threads
        // that read the environment; concurrent writers are unsupported.
        unsafe { std::env::set_var(key, value) };
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn set_is_visible_through_std_env() {
        let store = ProcessEnvStore;
        store.set("ENVCONF_PROCESS_STORE_TEST", "on").unwrap();

        assert_eq!(
            std::env::var("ENVCONF_PROCESS_STORE_TEST").as_deref(),
            Ok("on")
        );
        assert_eq!(store.get("ENVCONF_PROCESS_STORE_TEST").as_deref(), Some("on"));

        unsafe { std::env::remove_var("ENVCONF_PROCESS_STORE_TEST") };
    }

    #[test]
    fn rejects_entries_the_os_cannot_hold() {
        let store = ProcessEnvStore;
        let cases = [
            ("", "x", "empty"),
            ("a=b", "x", "'='"),
            ("a\0b", "x", "NUL"),
            ("token", "ab\0cd", "value contains"),
        ];

        for (key, value, expected) in cases {
            let err = store.set(key, value).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidEnvEntry { .. }));
            assert!(err.to_string().contains(expected), "{key:?}: {err}");
        }
    }

    #[test]
    fn accepts_hyphenated_names_and_json_values() {
        assert!(ProcessEnvStore.validate("app-port", r#"{"a":[1]}"#).is_ok());
    }
}
