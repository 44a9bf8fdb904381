//! wirecodec-layers - Payload transforms for layered codecs
//!
//! This crate provides [`PayloadTransform`](wirecodec_core::PayloadTransform)
//! implementations that wrap any codec:
//! - [`Encryption`] authenticated encryption with ChaCha20-Poly1305
//! - [`Checksum`] SHA-256 integrity prefix
//! - [`Base64Armor`] binary-to-text armoring
//!
//! ```ignore
//! use wirecodec_core::CodecExt;
//! use wirecodec_layers::{Base64Armor, Encryption, EncryptionKey};
//! use wirecodec_transport::JsonCodec;
//!
//! let codec = JsonCodec::new()
//!     .layer(Encryption::new(&EncryptionKey::generate()))
//!     .layer(Base64Armor);
//! ```

mod armor;
mod checksum;
mod encryption;

pub use armor::Base64Armor;
pub use checksum::Checksum;
pub use encryption::{Encryption, EncryptionKey, KeyError};

/// Content type of payloads that are no longer readable as the inner format
pub const OCTET_STREAM: &str = "application/octet-stream";
