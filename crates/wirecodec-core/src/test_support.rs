//! Minimal codecs and transforms for unit tests

use crate::{Codec, CodecError, CodecResult, Payload, PayloadTransform};
use serde::{Serialize, de::DeserializeOwned};

/// serde_json without any settings
pub(crate) struct PlainJson;

impl Codec for PlainJson {
    fn serialize<T: Serialize>(&self, value: &T) -> CodecResult<Payload> {
        serde_json::to_string(value)
            .map(Payload::Text)
            .map_err(CodecError::encoding)
    }

    fn deserialize<T: DeserializeOwned>(&self, payload: &Payload) -> CodecResult<T> {
        serde_json::from_slice(payload.as_bytes()).map_err(CodecError::decoding)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

/// XORs every byte with a fixed mask
pub(crate) struct XorMask(pub u8);

impl PayloadTransform for XorMask {
    fn apply(&self, payload: Payload) -> CodecResult<Payload> {
        Ok(Payload::Binary(
            payload.into_bytes().into_iter().map(|b| b ^ self.0).collect(),
        ))
    }

    fn revert(&self, payload: &Payload) -> CodecResult<Payload> {
        Ok(Payload::Binary(
            payload.as_bytes().iter().map(|b| b ^ self.0).collect(),
        ))
    }

    fn content_type(&self) -> Option<&'static str> {
        Some("application/octet-stream")
    }
}

/// Rejects every inbound payload
pub(crate) struct RejectInbound;

impl PayloadTransform for RejectInbound {
    fn apply(&self, payload: Payload) -> CodecResult<Payload> {
        Ok(payload)
    }

    fn revert(&self, _payload: &Payload) -> CodecResult<Payload> {
        Err(CodecError::decoding("rejected"))
    }
}
