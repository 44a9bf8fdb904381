//! The codec capability shared by every wire format

use crate::error::CodecResult;
use crate::layered::{LayeredCodec, PayloadTransform};
use crate::payload::Payload;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

/// Trait for converting typed values to payloads and back
///
/// The type is chosen by the caller at each call, not fixed per codec. A
/// payload does not describe its own type: the caller must deserialize with
/// the same `T` used to serialize. Naming a different type may fail with a
/// decoding error or may silently produce a partial value, unless the codec is
/// configured to embed type names.
///
/// Implementations hold only immutable state, so one instance can be shared
/// between threads without locking.
pub trait Codec: Send + Sync {
    /// Serialize a value into a payload
    fn serialize<T: Serialize>(&self, value: &T) -> CodecResult<Payload>;

    /// Deserialize a payload into a value of the caller's type
    fn deserialize<T: DeserializeOwned>(&self, payload: &Payload) -> CodecResult<T>;

    /// Get the content type of the payloads this codec produces
    fn content_type(&self) -> &'static str;
}

impl<C: Codec> Codec for &C {
    fn serialize<T: Serialize>(&self, value: &T) -> CodecResult<Payload> {
        (**self).serialize(value)
    }

    fn deserialize<T: DeserializeOwned>(&self, payload: &Payload) -> CodecResult<T> {
        (**self).deserialize(payload)
    }

    fn content_type(&self) -> &'static str {
        (**self).content_type()
    }
}

impl<C: Codec> Codec for Box<C> {
    fn serialize<T: Serialize>(&self, value: &T) -> CodecResult<Payload> {
        (**self).serialize(value)
    }

    fn deserialize<T: DeserializeOwned>(&self, payload: &Payload) -> CodecResult<T> {
        (**self).deserialize(payload)
    }

    fn content_type(&self) -> &'static str {
        (**self).content_type()
    }
}

impl<C: Codec> Codec for Arc<C> {
    fn serialize<T: Serialize>(&self, value: &T) -> CodecResult<Payload> {
        (**self).serialize(value)
    }

    fn deserialize<T: DeserializeOwned>(&self, payload: &Payload) -> CodecResult<T> {
        (**self).deserialize(payload)
    }

    fn content_type(&self) -> &'static str {
        (**self).content_type()
    }
}

/// Combinators available on every codec
pub trait CodecExt: Codec + Sized {
    /// Wrap this codec so `transform` is applied to every payload it produces
    ///
    /// ```ignore
    /// let codec = JsonCodec::new().layer(Encryption::new(key)).layer(Base64Armor);
    /// ```
    fn layer<L: PayloadTransform>(self, transform: L) -> LayeredCodec<Self, L> {
        LayeredCodec::new(self, transform)
    }
}

impl<C: Codec> CodecExt for C {}
