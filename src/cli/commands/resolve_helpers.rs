use envconf::{AesCbcBackend, ConfigError, ConfigResolver, HttpFetcher, ProcessEnvStore};
use envconf::{Resolution, Result};
use envconf::{ResolveOptions, Settings};

use crate::cli::SourceArgs;

/// Translate CLI source flags into resolve options.
pub fn options_from(source: &SourceArgs, return_config: bool) -> ResolveOptions {
    let mut options = ResolveOptions::new()
        .return_config(return_config)
        .function_keys(source.keys.iter().cloned());

    if let Some(path) = &source.path {
        options = options.config_path(path.clone());
    }
    if let Some(key) = &source.key {
        options = options.encrypted_with(key.clone());
    }
    options
}

/// Run one resolution against the real process environment.
///
/// Blocks on a current-thread runtime for the duration of the fetch.
pub fn resolve_blocking(source: &SourceArgs, return_config: bool) -> Result<Resolution> {
    let settings = Settings::from_env().with_environment(source.env.clone());
    let resolver = ConfigResolver::new(
        settings,
        HttpFetcher::new()?,
        ProcessEnvStore,
        AesCbcBackend::new,
    );
    let options = options_from(source, return_config);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ConfigError::Io)?;

    rt.block_on(resolver.resolve(&options))
}
