//! wirecodec-core - Codec capability, payloads, settings, and layering
//!
//! This crate provides the foundational types shared by every wirecodec codec:
//! - [`Codec`] trait for serializing typed values into [`Payload`]s and back
//! - [`CodecError`] for error handling
//! - [`CodecSettings`] for the immutable wire-format options
//! - [`LayeredCodec`] and [`PayloadTransform`] for wrapping one codec in another
//! - [`WireEnum`] and [`datetime`] helpers whose output follows the active settings

mod codec;
mod config;
pub mod datetime;
mod error;
mod layered;
mod payload;
pub mod scope;
pub mod wire_enum;

pub use codec::{Codec, CodecExt};
pub use config::{
    CodecSettings, DateFormatHandling, EnumHandling, Formatting, NullValueHandling,
    TypeNameHandling,
};
pub use error::{CodecError, CodecResult};
pub use layered::{LayeredCodec, PayloadTransform};
pub use payload::Payload;
pub use wire_enum::WireEnum;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Codec, CodecError, CodecExt, CodecResult, CodecSettings, LayeredCodec, Payload,
        PayloadTransform, WireEnum,
    };
}

#[cfg(test)]
mod test_support;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
