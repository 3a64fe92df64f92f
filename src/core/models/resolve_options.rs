use secrecy::SecretString;

/// One or more property names to pull out of the merged configuration.
///
/// A single name and a list of names go through the same code path;
/// construction from either shape normalizes to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionKeys(Vec<String>);

impl FunctionKeys {
    /// Build from any list of names. Returns `None` for an empty list.
    pub fn new<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            None
        } else {
            Some(Self(names))
        }
    }

    /// Build from a single name.
    pub fn single(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for FunctionKeys {
    fn from(name: &str) -> Self {
        Self::single(name)
    }
}

impl From<String> for FunctionKeys {
    fn from(name: String) -> Self {
        Self::single(name)
    }
}

/// Options for a single resolution call.
///
/// The secret `key` is redacted from `Debug` output.
#[derive(Debug)]
pub struct ResolveOptions {
    /// Local path or URL of the document. Falls back to `APP_CONFIG_PATH`.
    pub config_path: Option<String>,
    /// Return values (`true`) or inject them into the env store (`false`).
    pub return_config: bool,
    pub function_keys: Option<FunctionKeys>,
    /// The source is encrypted. Only honored when `key` is also set.
    pub encrypted: bool,
    pub key: Option<SecretString>,
    /// Per-call override of the environment name.
    pub environment: Option<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            return_config: true,
            function_keys: None,
            encrypted: false,
            key: None,
            environment: None,
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config_path(mut self, path: impl Into<String>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn return_config(mut self, return_config: bool) -> Self {
        self.return_config = return_config;
        self
    }

    /// Extract a single property by name.
    pub fn function_key(mut self, name: impl Into<String>) -> Self {
        self.function_keys = Some(FunctionKeys::single(name));
        self
    }

    /// Extract several properties. An empty list clears the selection.
    pub fn function_keys<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.function_keys = FunctionKeys::new(names);
        self
    }

    /// Mark the source as encrypted with the given key.
    pub fn encrypted_with(mut self, key: impl Into<String>) -> Self {
        self.encrypted = true;
        self.key = Some(SecretString::from(key.into()));
        self
    }

    pub fn environment(mut self, name: impl Into<String>) -> Self {
        self.environment = Some(name.into());
        self
    }

    /// The decryption key, when the source should be decrypted.
    pub(crate) fn decryption_key(&self) -> Option<&SecretString> {
        if self.encrypted { self.key.as_ref() } else { None }
    }
}
