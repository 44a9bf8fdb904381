//! SHA-256 integrity prefix

use crate::OCTET_STREAM;
use sha2::{Digest, Sha256};
use wirecodec_core::{CodecError, CodecResult, Payload, PayloadTransform};

const DIGEST_LEN: usize = 32;

/// Prefixes each payload with its SHA-256 digest and verifies it on the way in
///
/// Detects corruption, not tampering: anyone can recompute the digest. Layer
/// [`Encryption`](crate::Encryption) for authenticity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checksum;

impl PayloadTransform for Checksum {
    fn apply(&self, payload: Payload) -> CodecResult<Payload> {
        let body = payload.into_bytes();
        let mut framed = Sha256::digest(&body).to_vec();
        framed.extend_from_slice(&body);
        Ok(Payload::Binary(framed))
    }

    fn revert(&self, payload: &Payload) -> CodecResult<Payload> {
        let framed = payload.as_bytes();
        if framed.len() < DIGEST_LEN {
            return Err(CodecError::decoding(format!(
                "checksummed payload is {} bytes, shorter than its digest",
                framed.len()
            )));
        }

        let (expected, body) = framed.split_at(DIGEST_LEN);
        if Sha256::digest(body).as_slice() != expected {
            tracing::debug!("checksum mismatch on payload of {} bytes", framed.len());
            return Err(CodecError::decoding("payload checksum mismatch"));
        }
        Ok(Payload::Binary(body.to_vec()))
    }

    fn content_type(&self) -> Option<&'static str> {
        Some(OCTET_STREAM)
    }
}
