//! Reversible XOR-stream obfuscation for note content at rest.
//!
//! The at-rest form is the plaintext's UTF-8 bytes XORed with a cycled key and
//! rendered as lowercase hex. This is obfuscation only: the same key decodes
//! every note, there is no nonce, and identical plaintexts encode identically.

use crate::error::AppError;

/// XOR each byte of `bytes` with `key[i % key.len()]`.
///
/// The transform is its own inverse. The caller guarantees a non-empty key.
pub fn apply_keystream(bytes: &[u8], key: &[u8]) -> Vec<u8> {
    debug_assert!(!key.is_empty(), "keystream requires a non-empty key");
    bytes
        .iter()
        .zip(key.iter().cycle())
        .map(|(byte, key_byte)| byte ^ key_byte)
        .collect()
}

/// Content codec bound to the process-wide shared secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorCodec {
    key: Vec<u8>,
}

impl XorCodec {
    /// Build a codec for `key`.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] when `key` is empty.
    pub fn new(key: impl Into<Vec<u8>>) -> Result<Self, AppError> {
        let key = key.into();
        if key.is_empty() {
            return Err(AppError::InvalidInput(
                "XOR key must not be empty".to_string(),
            ));
        }
        Ok(Self { key })
    }

    /// Encode plaintext into its at-rest hex representation.
    ///
    /// The decoded byte length always equals `plaintext.len()`.
    pub fn encode(&self, plaintext: &str) -> String {
        hex::encode(apply_keystream(plaintext.as_bytes(), &self.key))
    }

    /// Decode an at-rest hex string back into plaintext.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] when `at_rest` is not even-length hex
    /// or the recovered bytes are not UTF-8 (wrong key or corrupted row).
    pub fn decode(&self, at_rest: &str) -> Result<String, AppError> {
        let bytes = hex::decode(at_rest).map_err(|err| {
            AppError::InvalidInput(format!("Stored content is not valid hex: {}", err))
        })?;
        String::from_utf8(apply_keystream(&bytes, &self.key)).map_err(|err| {
            AppError::InvalidInput(format!("Decoded content is not valid UTF-8: {}", err))
        })
    }
}
