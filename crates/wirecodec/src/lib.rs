//! # wirecodec
//!
//! Typed serialization codecs whose wire format is chosen by runtime settings.
//!
//! wirecodec converts any serde type to an opaque [`Payload`] and back, with the
//! type chosen per call. It provides:
//! - One [`Codec`] capability implemented by JSON, MessagePack, and layered codecs
//! - Immutable [`CodecSettings`] for formatting, nulls, type names, enums, dates
//! - Payload transforms (encryption, checksums, base64) that stack over any codec
//! - Instances that are safe to share between threads without locking
//!
//! ## Quick Start
//!
//! ```ignore
//! use wirecodec::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, WireEnum)]
//! #[wire_enum(crate = "wirecodec")]
//! enum BrokerRequest {
//!     Subscribe = 10,
//!     Publish = 40,
//! }
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct BrokerMessage {
//!     request: BrokerRequest,
//!     channel_id: String,
//!     message_content: Option<String>,
//! }
//!
//! let codec = JsonCodec::with_settings(
//!     CodecSettings::default().with_enum_handling(EnumHandling::Ordinal),
//! );
//! let payload = codec.serialize(&message)?;
//! let decoded: BrokerMessage = codec.deserialize(&payload)?;
//!
//! // Layers wrap any codec
//! let sealed = MessagePackCodec::new()
//!     .layer(Encryption::new(&EncryptionKey::generate()))
//!     .layer(Base64Armor);
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`wirecodec_core`] - Codec trait, payloads, settings, layering, helpers
//! - [`wirecodec_macros`] - `#[derive(WireEnum)]`
//! - [`wirecodec_transport`] - JSON and MessagePack codecs
//! - [`wirecodec_layers`] - Encryption, checksum, and armor transforms

// Re-export core types
pub use wirecodec_core::{
    Codec, CodecError, CodecExt, CodecResult, CodecSettings, DateFormatHandling, EnumHandling,
    Formatting, LayeredCodec, NullValueHandling, Payload, PayloadTransform, TypeNameHandling,
    WireEnum,
};

// Re-export helper modules used from serde attributes and generated code
pub use wirecodec_core::{datetime, scope, wire_enum};

#[doc(hidden)]
pub use wirecodec_core::__private;

// Re-export macros
pub use wirecodec_macros::WireEnum;

// Re-export codecs and transforms
pub use wirecodec_layers::{Base64Armor, Checksum, Encryption, EncryptionKey, KeyError};
pub use wirecodec_transport::{JsonCodec, MessagePackCodec};

// Re-export common dependencies that message authors need
pub use chrono;
pub use serde;

/// Prelude module for convenient imports.
///
/// Use `use wirecodec::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Traits: `Codec`, `CodecExt`, `PayloadTransform`, `WireEnum` (and its derive)
/// - Codecs: `JsonCodec`, `MessagePackCodec`, `LayeredCodec`
/// - Settings: `CodecSettings` and its option enums
/// - Transforms: `Encryption`, `EncryptionKey`, `Checksum`, `Base64Armor`
/// - Serde derives: `Serialize`, `Deserialize`
pub mod prelude {
    pub use crate::{
        Base64Armor, Checksum, Codec, CodecError, CodecExt, CodecResult, CodecSettings,
        DateFormatHandling, EnumHandling, Encryption, EncryptionKey, Formatting, JsonCodec,
        LayeredCodec, MessagePackCodec, NullValueHandling, Payload, PayloadTransform,
        TypeNameHandling, WireEnum,
    };

    // Serde derives (commonly needed for message types)
    pub use serde::{Deserialize, Serialize};
}
