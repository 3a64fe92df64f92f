//! Load layered JSON configuration from a local file or a URL.
//!
//! A document carries a `base` section plus per-environment sections.
//! Resolution optionally decrypts the document, overlays the active
//! environment onto `base`, and either returns the result or injects
//! selected keys into the process environment.

pub mod adapters;
pub mod config;
pub mod core;

pub use crate::adapters::cipher::aes_cbc_backend::AesCbcBackend;
pub use crate::adapters::env_stores::memory_env_store::MemoryEnvStore;
pub use crate::adapters::env_stores::process_env_store::ProcessEnvStore;
pub use crate::adapters::fetch::http_fetcher::HttpFetcher;
pub use crate::config::settings::Settings;
pub use crate::core::errors::{ConfigError, ErrorKind, Result};
pub use crate::core::models::resolution::Resolution;
pub use crate::core::models::resolve_options::{FunctionKeys, ResolveOptions};
pub use crate::core::services::config_resolver::ConfigResolver;

/// Resolve configuration with process-level defaults.
///
/// Reads `APP_CONFIG_PATH` and `APP_ENV` at call time, fetches remote
/// documents over HTTP and injects into the real process environment.
///
/// # Errors
///
/// `MissingOptions` when `options` is `None`; otherwise anything
/// [`ConfigResolver::resolve`] returns.
pub async fn resolve(options: Option<ResolveOptions>) -> Result<Resolution> {
    let options = options.ok_or(ConfigError::MissingOptions)?;
    let resolver = ConfigResolver::new(
        Settings::from_env(),
        HttpFetcher::new()?,
        ProcessEnvStore,
        AesCbcBackend::new,
    );
    resolver.resolve(&options).await
}
