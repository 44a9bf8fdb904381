//! Codecs that wrap another codec and transform its payloads
//!
//! A [`LayeredCodec`] delegates the typed conversion to an inner codec and
//! applies a [`PayloadTransform`] to the resulting bytes (encryption,
//! integrity checks, text armoring). Transforms never look inside the inner
//! payload, so any codec can sit underneath any transform.

use crate::codec::Codec;
use crate::error::CodecResult;
use crate::payload::Payload;
use serde::{Serialize, de::DeserializeOwned};

/// A reversible transform over opaque payloads
pub trait PayloadTransform: Send + Sync {
    /// Transform an outbound payload
    fn apply(&self, payload: Payload) -> CodecResult<Payload>;

    /// Undo [`apply`](Self::apply) on an inbound payload
    fn revert(&self, payload: &Payload) -> CodecResult<Payload>;

    /// Content type of transformed payloads, or `None` to keep the inner one
    fn content_type(&self) -> Option<&'static str> {
        None
    }
}

/// A codec made of an inner codec and one payload transform
#[derive(Debug, Clone)]
pub struct LayeredCodec<C, L> {
    inner: C,
    transform: L,
}

impl<C, L> LayeredCodec<C, L> {
    /// Wrap `inner` with `transform`
    pub fn new(inner: C, transform: L) -> Self {
        Self { inner, transform }
    }

    /// Get the wrapped codec
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Get the transform
    pub fn transform(&self) -> &L {
        &self.transform
    }

    /// Split into the wrapped codec and the transform
    pub fn into_parts(self) -> (C, L) {
        (self.inner, self.transform)
    }
}

impl<C: Codec, L: PayloadTransform> Codec for LayeredCodec<C, L> {
    fn serialize<T: Serialize>(&self, value: &T) -> CodecResult<Payload> {
        let payload = self.inner.serialize(value)?;
        self.transform.apply(payload)
    }

    fn deserialize<T: DeserializeOwned>(&self, payload: &Payload) -> CodecResult<T> {
        let payload = self.transform.revert(payload)?;
        self.inner.deserialize(&payload)
    }

    fn content_type(&self) -> &'static str {
        self.transform
            .content_type()
            .unwrap_or_else(|| self.inner.content_type())
    }
}
