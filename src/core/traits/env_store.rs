use crate::core::errors::Result;

/// Port for the key-value store resolved values are injected into.
///
/// The process implementation writes real environment variables;
/// entries persist for the lifetime of the store.
pub trait EnvStore: Send + Sync {
    /// Check that `key` and `value` can be stored, without writing.
    ///
    /// Callers validate every entry of a batch before the first `set`.
    fn validate(&self, key: &str, value: &str) -> Result<()> {
        let _ = (key, value);
        Ok(())
    }

    /// Set `key` to `value`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Current value of `key`, if set.
    fn get(&self, key: &str) -> Option<String>;
}
