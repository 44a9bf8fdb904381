//! Opaque transportable output of a codec

use crate::error::{CodecError, CodecResult};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A serialized value, ready for transport
///
/// Textual codecs produce [`Payload::Text`], binary codecs and most payload
/// transforms produce [`Payload::Binary`]. A payload has no meaning outside a
/// codec configured compatibly with the one that produced it.
///
/// Payloads are themselves serializable, so a record may carry a list of
/// sub-payloads produced independently (e.g. the parameters of a remote call).
/// Text is written as a string, binary as a byte sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Payload {
    /// UTF-8 text
    Text(String),
    /// Raw bytes
    Binary(Vec<u8>),
}

impl Payload {
    /// View the payload as bytes, regardless of variant
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(text) => text.as_bytes(),
            Payload::Binary(bytes) => bytes,
        }
    }

    /// Consume the payload into bytes
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Payload::Text(text) => text.into_bytes(),
            Payload::Binary(bytes) => bytes,
        }
    }

    /// View the payload as text
    ///
    /// Binary payloads are accepted when they hold valid UTF-8.
    pub fn as_text(&self) -> CodecResult<&str> {
        match self {
            Payload::Text(text) => Ok(text),
            Payload::Binary(bytes) => std::str::from_utf8(bytes)
                .map_err(|e| CodecError::decoding(format!("payload is not UTF-8 text: {e}"))),
        }
    }

    /// Consume the payload into text
    pub fn into_text(self) -> CodecResult<String> {
        match self {
            Payload::Text(text) => Ok(text),
            Payload::Binary(bytes) => String::from_utf8(bytes)
                .map_err(|e| CodecError::decoding(format!("payload is not UTF-8 text: {e}"))),
        }
    }

    /// Check whether this is a text payload
    pub fn is_text(&self) -> bool {
        matches!(self, Payload::Text(_))
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Check whether the payload holds no bytes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Binary(bytes)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Payload::Binary(bytes.to_vec())
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::Text(text) => serializer.serialize_str(text),
            Payload::Binary(bytes) => serializer.serialize_bytes(bytes),
        }
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = Payload;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a byte sequence")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Payload, E> {
        Ok(Payload::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Payload, E> {
        Ok(Payload::Text(value))
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Payload, E> {
        Ok(Payload::Binary(value.to_vec()))
    }

    fn visit_byte_buf<E: de::Error>(self, value: Vec<u8>) -> Result<Payload, E> {
        Ok(Payload::Binary(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Payload, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(Payload::Binary(bytes))
    }
}
