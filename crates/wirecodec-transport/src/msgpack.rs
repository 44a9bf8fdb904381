//! MessagePack codec built on rmp-serde

use serde::de::IgnoredAny;
use serde::{Serialize, de::DeserializeOwned};
use std::any::type_name;
use wirecodec_core::{
    Codec, CodecError, CodecResult, CodecSettings, Payload, TypeNameHandling, scope,
};

/// Binary codec writing MessagePack with named struct fields
///
/// Honors the enum, date-time, and type-name settings. Formatting and null
/// handling have no meaning for this format and are ignored; `max_depth` is
/// left to rmp-serde's own recursion limit.
///
/// With [`TypeNameHandling::Root`] the payload is a two-element array of the
/// type name and the value.
#[derive(Debug, Clone, Default)]
pub struct MessagePackCodec {
    settings: CodecSettings,
}

impl MessagePackCodec {
    /// Create a MessagePack codec with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MessagePack codec with the given settings
    pub fn with_settings(settings: CodecSettings) -> Self {
        Self { settings }
    }

    /// Get the settings this codec was built with
    pub fn settings(&self) -> &CodecSettings {
        &self.settings
    }

    /// Encode a value directly to MessagePack bytes
    pub fn encode_vec<T: Serialize>(&self, value: &T) -> CodecResult<Vec<u8>> {
        let result = scope::with_settings(&self.settings, || {
            match self.settings.type_name_handling {
                TypeNameHandling::None => rmp_serde::to_vec_named(value),
                TypeNameHandling::Root => rmp_serde::to_vec_named(&(type_name::<T>(), value)),
            }
            .map_err(CodecError::encoding)
        });
        match &result {
            Ok(bytes) => tracing::trace!("encoded {} as {} bytes of MessagePack", type_name::<T>(), bytes.len()),
            Err(e) => tracing::debug!("failed to encode {}: {}", type_name::<T>(), e),
        }
        result
    }

    /// Decode MessagePack bytes to a value
    pub fn decode_slice<T: DeserializeOwned>(&self, data: &[u8]) -> CodecResult<T> {
        let result = scope::with_settings(&self.settings, || match self.settings.type_name_handling {
            TypeNameHandling::None => rmp_serde::from_slice(data).map_err(CodecError::decoding),
            TypeNameHandling::Root => decode_tagged(data),
        });
        match &result {
            Ok(_) => tracing::trace!("decoded {} from {} bytes of MessagePack", type_name::<T>(), data.len()),
            Err(e) => tracing::debug!("failed to decode {}: {}", type_name::<T>(), e),
        }
        result
    }
}

impl From<CodecSettings> for MessagePackCodec {
    fn from(settings: CodecSettings) -> Self {
        Self::with_settings(settings)
    }
}

impl Codec for MessagePackCodec {
    fn serialize<T: Serialize>(&self, value: &T) -> CodecResult<Payload> {
        self.encode_vec(value).map(Payload::Binary)
    }

    fn deserialize<T: DeserializeOwned>(&self, payload: &Payload) -> CodecResult<T> {
        self.decode_slice(payload.as_bytes())
    }

    fn content_type(&self) -> &'static str {
        "application/msgpack"
    }
}

/// Check the leading type name before decoding the value itself
fn decode_tagged<T: DeserializeOwned>(data: &[u8]) -> CodecResult<T> {
    let (actual, _): (String, IgnoredAny) =
        rmp_serde::from_slice(data).map_err(CodecError::decoding)?;
    let expected = type_name::<T>();
    if actual != expected {
        return Err(CodecError::TypeMismatch {
            expected: expected.to_string(),
            actual,
        });
    }
    let (_, value): (IgnoredAny, T) = rmp_serde::from_slice(data).map_err(CodecError::decoding)?;
    Ok(value)
}
