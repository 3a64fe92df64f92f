use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

/// Scheme-relative or absolute URL with a dotted host or `localhost`.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\w+:)?//([^\s.]+\.\S{2}|localhost[:?\d]*)\S*$").expect("valid URL pattern")
});

/// Where a configuration document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    Path(PathBuf),
}

impl Source {
    /// Classify a configured location as a URL or a local path.
    pub fn detect(location: &str) -> Self {
        if URL_PATTERN.is_match(location) {
            Self::Url(location.to_string())
        } else {
            Self::Path(PathBuf::from(location))
        }
    }

    /// Display form used in logs and error messages.
    pub fn display_name(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Path(path) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_urls() {
        for url in [
            "http://localhost/env.json",
            "http://localhost:8080/env.json",
            "https://gist.githubusercontent.com/user/raw/sample.json",
            "http://127.0.0.1:39211/config.env",
        ] {
            assert_eq!(Source::detect(url), Source::Url(url.to_string()), "{url}");
        }
    }

    #[test]
    fn detects_local_paths() {
        for path in ["./env.json", "/etc/app/config.env", "config.env", "C:\\app\\env.json"] {
            assert_eq!(Source::detect(path), Source::Path(PathBuf::from(path)), "{path}");
        }
    }

    #[test]
    fn url_without_dotted_host_is_a_path() {
        assert!(matches!(Source::detect("http://intranet"), Source::Path(_)));
    }
}
