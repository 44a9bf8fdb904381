//! Authenticated encryption of payloads with ChaCha20-Poly1305

use crate::OCTET_STREAM;
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, OsRng};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use std::fmt;
use thiserror::Error;
use wirecodec_core::{CodecError, CodecResult, Payload, PayloadTransform};

/// Size of the nonce prefixed to every ciphertext
pub(crate) const NONCE_LEN: usize = 12;

/// Size of the authentication tag appended by the cipher
pub(crate) const TAG_LEN: usize = 16;

/// Errors from building an [`EncryptionKey`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("encryption key must be 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// A 256-bit symmetric key
///
/// `Debug` never prints the key material.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionKey([u8; 32]);

impl EncryptionKey {
    /// Generate a random key from the operating system RNG
    pub fn generate() -> Self {
        let generated = ChaCha20Poly1305::generate_key(&mut OsRng);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&generated);
        Self(bytes)
    }

    /// Use the given bytes as a key
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw key bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl TryFrom<&[u8]> for EncryptionKey {
    type Error = KeyError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| KeyError::InvalidLength(bytes.len()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncryptionKey(<redacted>)")
    }
}

/// Encrypts outbound payloads and authenticates inbound ones
///
/// Each call to `apply` draws a fresh random nonce, so encrypting the same
/// payload twice yields different ciphertexts. The wire layout is
/// `nonce (12 bytes) || ciphertext || tag (16 bytes)`.
#[derive(Clone)]
pub struct Encryption {
    cipher: ChaCha20Poly1305,
}

impl Encryption {
    /// Create an encryption transform using `key`
    pub fn new(key: &EncryptionKey) -> Self {
        Self {
            cipher: ChaCha20Poly1305::new(Key::from_slice(key.as_bytes())),
        }
    }
}

impl fmt::Debug for Encryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encryption").finish_non_exhaustive()
    }
}

impl PayloadTransform for Encryption {
    fn apply(&self, payload: Payload) -> CodecResult<Payload> {
        let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, payload.as_bytes())
            .map_err(|e| CodecError::encoding(format!("encryption failed: {e}")))?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce);
        sealed.extend_from_slice(&ciphertext);
        Ok(Payload::Binary(sealed))
    }

    fn revert(&self, payload: &Payload) -> CodecResult<Payload> {
        let sealed = payload.as_bytes();
        if sealed.len() < NONCE_LEN + TAG_LEN {
            return Err(CodecError::decoding(format!(
                "encrypted payload is {} bytes, shorter than nonce and tag",
                sealed.len()
            )));
        }

        let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| {
                tracing::warn!("rejected encrypted payload of {} bytes", sealed.len());
                CodecError::decoding("payload failed authentication")
            })?;
        Ok(Payload::Binary(plaintext))
    }

    fn content_type(&self) -> Option<&'static str> {
        Some(OCTET_STREAM)
    }
}
