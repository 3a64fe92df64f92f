/// Variable holding the fallback location of the configuration document.
pub const CONFIG_PATH_VAR: &str = "APP_CONFIG_PATH";

/// Variable selecting the active environment section.
pub const ENVIRONMENT_VAR: &str = "APP_ENV";

/// Environment used when `APP_ENV` is unset or empty.
pub const DEFAULT_ENVIRONMENT: &str = "dev";

/// Process-level settings shared by every resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Fallback source when the options carry no config path.
    pub config_path: Option<String>,
    /// Name of the environment section overlaid on `base`.
    pub environment: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: None,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            config_path: non_empty(CONFIG_PATH_VAR),
            environment: non_empty(ENVIRONMENT_VAR)
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        }
    }

    pub fn with_config_path(mut self, path: impl Into<String>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_to_dev_without_source() {
        let settings = settings_from(&[]);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.environment, "dev");
        assert!(settings.config_path.is_none());
    }

    #[test]
    fn reads_both_variables() {
        let settings = settings_from(&[
            ("APP_CONFIG_PATH", "/etc/app/config.env"),
            ("APP_ENV", "prod"),
        ]);
        assert_eq!(settings.config_path.as_deref(), Some("/etc/app/config.env"));
        assert_eq!(settings.environment, "prod");
    }

    #[test]
    fn empty_values_count_as_unset() {
        let settings = settings_from(&[("APP_CONFIG_PATH", ""), ("APP_ENV", "  ")]);
        assert_eq!(settings, Settings::default());
    }
}
