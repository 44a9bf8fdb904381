//! Base64 armoring so binary payloads can travel over text channels

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use wirecodec_core::{CodecError, CodecResult, Payload, PayloadTransform};

/// Encodes payloads as standard padded base64 text
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Armor;

impl PayloadTransform for Base64Armor {
    fn apply(&self, payload: Payload) -> CodecResult<Payload> {
        Ok(Payload::Text(STANDARD.encode(payload.as_bytes())))
    }

    fn revert(&self, payload: &Payload) -> CodecResult<Payload> {
        STANDARD
            .decode(payload.as_bytes())
            .map(Payload::Binary)
            .map_err(|e| CodecError::decoding(format!("invalid base64 payload: {e}")))
    }

    fn content_type(&self) -> Option<&'static str> {
        Some("text/plain")
    }
}
