use std::collections::HashMap;
use std::sync::Mutex;

use crate::core::errors::Result;
use crate::core::traits::env_store::EnvStore;

/// In-process env store for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryEnvStore {
    vars: Mutex<HashMap<String, String>>,
}

impl MemoryEnvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.vars.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl EnvStore for MemoryEnvStore {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        if let Ok(mut vars) = self.vars.lock() {
            vars.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.vars.lock().ok()?.get(key).cloned()
    }
}
