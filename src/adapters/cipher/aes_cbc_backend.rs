use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use crate::adapters::temp_files;
use crate::core::errors::{ConfigError, Result};
use crate::core::traits::cipher::CipherBackend;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

const IV_LEN: usize = 16;
const BLOCK_LEN: usize = 16;

/// Passphrase-keyed AES-256-CBC backend.
///
/// The 256-bit key is the SHA-256 digest of the passphrase. Output is
/// base64 of `IV || ciphertext` so encrypted documents stay text and
/// can be served over HTTP or committed like any config file.
pub struct AesCbcBackend {
    key: [u8; 32],
}

impl AesCbcBackend {
    /// Derive the cipher key from a passphrase.
    pub fn new(passphrase: &SecretString) -> Self {
        let key: [u8; 32] = Sha256::digest(passphrase.expose_secret().as_bytes()).into();
        Self { key }
    }
}

impl CipherBackend for AesCbcBackend {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut iv = [0u8; IV_LEN];
        rand::rng().fill(&mut iv);

        let ciphertext =
            Aes256CbcEnc::new(&self.key.into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);

        let mut payload = Vec::with_capacity(IV_LEN + ciphertext.len());
        payload.extend_from_slice(&iv);
        payload.extend_from_slice(&ciphertext);

        let mut encoded = STANDARD.encode(payload).into_bytes();
        encoded.push(b'\n');
        Ok(encoded)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(ciphertext).map_err(|_| ConfigError::DecryptionFailed {
            reason: "encrypted content is not base64 text".into(),
        })?;

        let payload = STANDARD
            .decode(text.trim())
            .map_err(|e| ConfigError::DecryptionFailed {
                reason: format!("invalid base64: {e}"),
            })?;

        if payload.len() < IV_LEN + BLOCK_LEN || (payload.len() - IV_LEN) % BLOCK_LEN != 0 {
            return Err(ConfigError::DecryptionFailed {
                reason: format!("truncated ciphertext ({} bytes)", payload.len()),
            });
        }

        let (iv, body) = payload.split_at(IV_LEN);
        let mut iv_block = [0u8; IV_LEN];
        iv_block.copy_from_slice(iv);

        let plaintext = Aes256CbcDec::new(&self.key.into(), &iv_block.into())
            .decrypt_padded_vec_mut::<Pkcs7>(body)
            .map_err(|_| ConfigError::DecryptionFailed {
                reason: "bad decrypt (wrong key or corrupted file)".into(),
            })?;

        String::from_utf8(plaintext).map_err(|_| ConfigError::DecryptionFailed {
            reason: "decrypted content is not valid UTF-8 (wrong key?)".into(),
        })
    }

    /// Stages the body in a temporary `.env` file that is removed on return.
    fn decrypt_fetched(&self, body: &[u8]) -> Result<String> {
        let staged = temp_files::persist(body)?;
        self.decrypt_file(staged.path())
    }

    fn name(&self) -> &str {
        "aes-256-cbc"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(passphrase: &str) -> AesCbcBackend {
        AesCbcBackend::new(&SecretString::from(passphrase.to_string()))
    }

    #[test]
    fn encrypt_decrypt_round_trip() {
        let backend = backend("thi5i5apa55word");
        let plaintext = r#"{"base": {"app-port": 3000}}"#;

        let ciphertext = backend.encrypt(plaintext.as_bytes()).unwrap();
        assert!(!String::from_utf8_lossy(&ciphertext).contains("app-port"));

        let decrypted = backend.decrypt(&ciphertext).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn same_plaintext_encrypts_differently() {
        let backend = backend("key");
        let a = backend.encrypt(b"same").unwrap();
        let b = backend.encrypt(b"same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn decrypt_wrong_key_fails() {
        let plaintext = r#"{"base": {"secret": "value", "padding": "xxxxxxxxxxxxxxxx"}}"#;
        let ciphertext = backend("right").encrypt(plaintext.as_bytes()).unwrap();

        match backend("wrong").decrypt(&ciphertext) {
            Err(err) => assert!(matches!(err, ConfigError::DecryptionFailed { .. })),
            // Garbage that happens to unpad cleanly must still not be the document.
            Ok(text) => assert_ne!(text, plaintext),
        }
    }

    #[test]
    fn decrypt_rejects_plain_json() {
        let err = backend("key").decrypt(br#"{"base": {}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::DecryptionFailed { .. }));
    }

    #[test]
    fn decrypt_rejects_truncated_payload() {
        let short = STANDARD.encode([0u8; 20]);
        let err = backend("key").decrypt(short.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn decrypt_fetched_body() {
        let backend = backend("key");
        let body = backend.encrypt(br#"{"dev": {}}"#).unwrap();

        assert_eq!(backend.decrypt_fetched(&body).unwrap(), r#"{"dev": {}}"#);
    }

    #[test]
    fn decrypt_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.env");
        let backend = backend("key");
        std::fs::write(&path, backend.encrypt(b"{}").unwrap()).unwrap();

        assert_eq!(backend.decrypt_file(&path).unwrap(), "{}");
    }
}
