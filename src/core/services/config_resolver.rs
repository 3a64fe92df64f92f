use std::path::Path;

use secrecy::SecretString;
use serde_json::{Map, Value};

use crate::config::settings::Settings;
use crate::core::errors::{ConfigError, Result};
use crate::core::models::config_document::ConfigDocument;
use crate::core::models::resolution::Resolution;
use crate::core::models::resolve_options::{FunctionKeys, ResolveOptions};
use crate::core::models::source::Source;
use crate::core::services::env_merger::merge_environment;
use crate::core::services::key_extractor::find_key;
use crate::core::traits::cipher::{CipherBackend, CipherProvider};
use crate::core::traits::env_store::EnvStore;
use crate::core::traits::fetcher::ConfigFetcher;

/// Resolves a configuration document for the active environment.
///
/// Each call runs acquire → decrypt → parse → merge → extract/inject
/// and keeps all intermediate state local to that call, so concurrent
/// resolutions never observe each other.
///
/// `C` builds the cipher backend for a call's key, e.g. `AesCbcBackend::new`.
pub struct ConfigResolver<F: ConfigFetcher, E: EnvStore, C: CipherProvider> {
    settings: Settings,
    fetcher: F,
    env_store: E,
    cipher: C,
}

impl<F: ConfigFetcher, E: EnvStore, C: CipherProvider> ConfigResolver<F, E, C> {
    pub fn new(settings: Settings, fetcher: F, env_store: E, cipher: C) -> Self {
        Self {
            settings,
            fetcher,
            env_store,
            cipher,
        }
    }

    pub fn env_store(&self) -> &E {
        &self.env_store
    }

    /// Resolve `options` into a merged mapping, a key selection, or an
    /// injection into the env store.
    ///
    /// # Errors
    ///
    /// - `NoSource` / `ModuleNotFound` if the local document cannot be loaded.
    /// - `FetchFailed` if the remote document cannot be retrieved.
    /// - `DecryptionFailed` if the key does not match.
    /// - `InvalidDocument` / `InvalidSection` if the document has the wrong shape.
    /// - `KeyNotFound` if a requested key is absent from the merged mapping.
    /// - `InvalidEnvEntry` if the env store cannot hold an injected entry.
    pub async fn resolve(&self, options: &ResolveOptions) -> Result<Resolution> {
        let source = self.source_for(options)?;
        let environment = options
            .environment
            .as_deref()
            .unwrap_or(&self.settings.environment);

        tracing::debug!(source = %source.display_name(), environment, "resolving configuration");

        if options.encrypted && options.key.is_none() {
            tracing::warn!(
                source = %source.display_name(),
                "source marked encrypted but no key given, reading it as plaintext"
            );
        }

        let document = match &source {
            Source::Url(url) => self.load_remote(url, options.decryption_key()).await?,
            Source::Path(path) => self.load_local(path, options.decryption_key())?,
        };

        let merged = merge_environment(&document, environment)?;
        tracing::debug!(keys = merged.len(), "merged base and {environment}");

        match &options.function_keys {
            None => self.deliver_all(merged, environment, options.return_config),
            Some(keys) => self.deliver_keys(&merged, keys, options.return_config),
        }
    }

    /// Options win over the `APP_CONFIG_PATH` fallback.
    fn source_for(&self, options: &ResolveOptions) -> Result<Source> {
        options
            .config_path
            .as_deref()
            .or(self.settings.config_path.as_deref())
            .filter(|location| !location.trim().is_empty())
            .map(Source::detect)
            .ok_or(ConfigError::NoSource)
    }

    /// Fetch a remote document. Encrypted bodies go through the backend's
    /// `decrypt_fetched`.
    async fn load_remote(&self, url: &str, key: Option<&SecretString>) -> Result<ConfigDocument> {
        let body = self.fetcher.fetch(url).await?;
        tracing::debug!(url, bytes = body.len(), "fetched remote configuration");

        let content = match key {
            Some(key) => self.cipher.for_key(key).decrypt_fetched(&body)?,
            None => String::from_utf8(body).map_err(|_| ConfigError::InvalidDocument {
                source_name: url.to_string(),
                detail: "response body is not valid UTF-8".into(),
            })?,
        };

        ConfigDocument::parse(&content, url)
    }

    /// Load a local document. A file that cannot be read, or plaintext
    /// that does not parse, is reported as `ModuleNotFound`.
    fn load_local(&self, path: &Path, key: Option<&SecretString>) -> Result<ConfigDocument> {
        let source_name = path.display().to_string();
        let raw = std::fs::read(path).map_err(|e| ConfigError::ModuleNotFound {
            path: path.to_path_buf(),
            trace: e.to_string(),
        })?;

        match key {
            Some(key) => {
                let content = self.cipher.for_key(key).decrypt(&raw)?;
                ConfigDocument::parse(&content, &source_name)
            }
            None => {
                let value: Value =
                    serde_json::from_slice(&raw).map_err(|e| ConfigError::ModuleNotFound {
                        path: path.to_path_buf(),
                        trace: e.to_string(),
                    })?;
                ConfigDocument::from_value(value, &source_name)
            }
        }
    }

    fn deliver_all(
        &self,
        merged: Map<String, Value>,
        environment: &str,
        return_config: bool,
    ) -> Result<Resolution> {
        if return_config {
            return Ok(Resolution::Config(merged));
        }

        let rendered = render(&Value::Object(merged));
        self.env_store.validate(environment, &rendered)?;
        self.env_store.set(environment, &rendered)?;
        tracing::debug!(environment, "injected merged configuration");
        Ok(Resolution::Injected)
    }

    /// The accumulator is created here, per call.
    fn deliver_keys(
        &self,
        merged: &Map<String, Value>,
        keys: &FunctionKeys,
        return_config: bool,
    ) -> Result<Resolution> {
        // Look every key up before writing anything to the env store.
        let found = keys
            .names()
            .iter()
            .map(|name| {
                find_key(merged, name)
                    .map(|value| (name, value))
                    .ok_or_else(|| ConfigError::KeyNotFound { key: name.clone() })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut selected = Map::new();
        if return_config {
            for (name, value) in found {
                selected.insert(name.clone(), value.clone());
            }
        } else {
            let entries = found
                .into_iter()
                .map(|(name, value)| {
                    let rendered = render(value);
                    self.env_store.validate(name, &rendered)?;
                    Ok((name, rendered))
                })
                .collect::<Result<Vec<_>>>()?;

            for (name, rendered) in entries {
                self.env_store.set(name, &rendered)?;
                selected.insert(name.clone(), Value::Bool(true));
            }
        }

        tracing::debug!(keys = selected.len(), return_config, "extracted function keys");
        Ok(Resolution::Keys(selected))
    }
}

/// Strings are injected verbatim, everything else as compact JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
