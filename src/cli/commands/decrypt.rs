use std::path::Path;

use envconf::core::traits::cipher::CipherBackend;
use envconf::{AesCbcBackend, ConfigError, Result};
use secrecy::SecretString;

use crate::cli::output;

/// Execute the `envconf decrypt` command.
///
/// Prints the plaintext document, or writes it to `out_path`.
pub fn execute(file: &Path, key: &str, out_path: Option<&Path>) -> Result<()> {
    if !file.exists() {
        return Err(ConfigError::ModuleNotFound {
            path: file.to_path_buf(),
            trace: "file does not exist".into(),
        });
    }

    let backend = AesCbcBackend::new(&SecretString::from(key.to_string()));
    let plaintext = backend.decrypt_file(file)?;

    match out_path {
        Some(dest) => {
            std::fs::write(dest, &plaintext)?;
            output::success(&format!("Decrypted {} → {}", file.display(), dest.display()));
        }
        None => print!("{plaintext}"),
    }
    Ok(())
}
