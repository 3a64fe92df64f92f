use std::path::Path;

use secrecy::SecretString;

use crate::core::errors::Result;

/// Port for symmetric encryption backends.
///
/// Implementations live in `adapters::cipher` (e.g. AesCbcBackend).
/// The core layer only depends on this trait, never on a concrete backend.
pub trait CipherBackend: Send + Sync {
    /// Encrypt plaintext into the backend's text-friendly wire format.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt ciphertext produced by `encrypt` into UTF-8 text.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<String>;

    /// Read the file at `path` and decrypt its contents.
    fn decrypt_file(&self, path: &Path) -> Result<String> {
        let ciphertext = std::fs::read(path)?;
        self.decrypt(&ciphertext)
    }

    /// Decrypt content received over the network.
    ///
    /// Backends that work from files stage the bytes on disk first.
    fn decrypt_fetched(&self, body: &[u8]) -> Result<String> {
        self.decrypt(body)
    }

    /// Human-readable name of this backend (e.g. "aes-256-cbc").
    fn name(&self) -> &str;
}

/// Builds a cipher backend for the key given in a resolve call.
///
/// Any `Fn(&SecretString) -> B` works, e.g. `AesCbcBackend::new`.
pub trait CipherProvider: Send + Sync {
    type Backend: CipherBackend;

    fn for_key(&self, key: &SecretString) -> Self::Backend;
}

impl<F, B> CipherProvider for F
where
    F: Fn(&SecretString) -> B + Send + Sync,
    B: CipherBackend,
{
    type Backend = B;

    fn for_key(&self, key: &SecretString) -> B {
        self(key)
    }
}
