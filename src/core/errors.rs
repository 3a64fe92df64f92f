use std::path::PathBuf;

/// Broad failure category a caller can branch on.
///
/// `Config` failures carry the `ConfigError` title, local load failures
/// carry the `MODULE_NOT_FOUND` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    ModuleNotFound,
}

/// All resolution errors for envconf.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "No options supplied\n\n  \
         Pass resolve options with at least a config path, or set APP_CONFIG_PATH."
    )]
    MissingOptions,

    #[error(
        "Unable to require config file: no source configured\n\n  \
         Solutions:\n    \
         → Pass a config path (--path <file-or-url>)\n    \
         → Or export APP_CONFIG_PATH"
    )]
    NoSource,

    #[error("Unable to require config file {path}: {trace}")]
    ModuleNotFound { path: PathBuf, trace: String },

    #[error(
        "Unable to process environment file {source_name}: {detail}\n\n  \
         The document must be a JSON object with a `base` section and\n  \
         optional per-environment sections (dev, prod, ...)."
    )]
    InvalidDocument { source_name: String, detail: String },

    #[error("Section '{section}' must be a JSON object")]
    InvalidSection { section: String },

    #[error(
        "Decryption failed: {reason}\n\n  \
         Check that --key matches the key the document was encrypted with."
    )]
    DecryptionFailed { reason: String },

    #[error("Encryption failed: {reason}")]
    EncryptionFailed { reason: String },

    #[error("Failed to fetch {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Key '{key}' not found in the resolved configuration")]
    KeyNotFound { key: String },

    #[error(
        "Cannot inject '{key}' into the environment: {reason}\n\n  \
         Environment variable names must be non-empty and contain no '=' or NUL,\n  \
         and values must contain no NUL."
    )]
    InvalidEnvEntry { key: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoSource | Self::ModuleNotFound { .. } => ErrorKind::ModuleNotFound,
            _ => ErrorKind::Config,
        }
    }

    /// `"ConfigError"` for configuration failures, `None` otherwise.
    pub fn title(&self) -> Option<&'static str> {
        match self.kind() {
            ErrorKind::Config => Some("ConfigError"),
            ErrorKind::ModuleNotFound => None,
        }
    }

    /// `"MODULE_NOT_FOUND"` for local load failures, `None` otherwise.
    pub fn code(&self) -> Option<&'static str> {
        match self.kind() {
            ErrorKind::ModuleNotFound => Some("MODULE_NOT_FOUND"),
            ErrorKind::Config => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failures_carry_module_not_found_code() {
        let err = ConfigError::ModuleNotFound {
            path: PathBuf::from("missing.json"),
            trace: "No such file or directory".into(),
        };

        assert_eq!(err.kind(), ErrorKind::ModuleNotFound);
        assert_eq!(err.code(), Some("MODULE_NOT_FOUND"));
        assert_eq!(err.title(), None);
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn missing_source_is_a_load_failure() {
        assert_eq!(ConfigError::NoSource.code(), Some("MODULE_NOT_FOUND"));
    }

    #[test]
    fn processing_failures_carry_config_error_title() {
        let errors = [
            ConfigError::MissingOptions,
            ConfigError::DecryptionFailed {
                reason: "bad decrypt".into(),
            },
            ConfigError::FetchFailed {
                url: "http://localhost/env.json".into(),
                reason: "status 404".into(),
            },
            ConfigError::KeyNotFound { key: "apis".into() },
            ConfigError::InvalidEnvEntry {
                key: "a=b".into(),
                reason: "name contains '='".into(),
            },
        ];

        for err in errors {
            assert_eq!(err.kind(), ErrorKind::Config);
            assert_eq!(err.title(), Some("ConfigError"));
            assert_eq!(err.code(), None);
        }
    }
}
