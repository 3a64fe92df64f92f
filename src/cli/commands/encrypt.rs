use std::path::{Path, PathBuf};

use envconf::core::models::config_document::ConfigDocument;
use envconf::core::traits::cipher::CipherBackend;
use envconf::{AesCbcBackend, ConfigError, Result};
use secrecy::SecretString;

use crate::cli::output;

/// Execute the `envconf encrypt` command.
///
/// Checks that the file is a configuration document, then writes the
/// encrypted form to `out_path` (default: `<file>.enc`).
pub fn execute(file: &Path, key: &str, out_path: Option<&Path>) -> Result<()> {
    let plaintext = std::fs::read_to_string(file).map_err(|e| ConfigError::ModuleNotFound {
        path: file.to_path_buf(),
        trace: e.to_string(),
    })?;
    ConfigDocument::parse(&plaintext, &file.display().to_string())?;

    let backend = AesCbcBackend::new(&SecretString::from(key.to_string()));
    let ciphertext = backend.encrypt(plaintext.as_bytes())?;

    let dest = out_path.map(Path::to_path_buf).unwrap_or_else(|| default_output(file));
    std::fs::write(&dest, ciphertext)?;

    output::success(&format!(
        "Encrypted {} with {} → {}",
        file.display(),
        backend.name(),
        dest.display()
    ));
    Ok(())
}

fn default_output(file: &Path) -> PathBuf {
    let mut name = file.as_os_str().to_owned();
    name.push(".enc");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_appends_enc() {
        assert_eq!(
            default_output(Path::new("config/env.json")),
            PathBuf::from("config/env.json.enc")
        );
    }
}
