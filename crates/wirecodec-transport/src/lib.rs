//! wirecodec-transport - JSON and MessagePack codecs
//!
//! This crate provides:
//! - [`JsonCodec`] textual codec for JSON transport
//! - [`MessagePackCodec`] binary codec with the same capability
//!
//! Both implement [`wirecodec_core::Codec`] and honor [`wirecodec_core::CodecSettings`].

mod json;
mod msgpack;

pub use json::JsonCodec;
pub use msgpack::MessagePackCodec;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{JsonCodec, MessagePackCodec};
    pub use wirecodec_core::prelude::*;
}
