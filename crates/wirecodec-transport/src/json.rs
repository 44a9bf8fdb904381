//! JSON codec built on serde_json

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::any::type_name;
use wirecodec_core::{
    Codec, CodecError, CodecResult, CodecSettings, Formatting, NullValueHandling, Payload,
    TypeNameHandling, scope,
};

mod null_fields;

use null_fields::SkipNoneFields;

/// Member holding the type name in a type envelope
const TYPE_KEY: &str = "$type";

/// Member holding the value in a type envelope
const VALUE_KEY: &str = "$value";

/// JSON codec implementation using serde_json
///
/// Produces [`Payload::Text`]. Reads text payloads and binary payloads holding
/// UTF-8 JSON (as returned by most payload transforms).
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    settings: CodecSettings,
}

impl JsonCodec {
    /// Create a JSON codec with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON codec with the given settings
    pub fn with_settings(settings: CodecSettings) -> Self {
        Self { settings }
    }

    /// Create a JSON codec that pretty-prints output
    pub fn pretty() -> Self {
        Self::with_settings(CodecSettings::default().with_formatting(Formatting::Indented))
    }

    /// Get the settings this codec was built with
    pub fn settings(&self) -> &CodecSettings {
        &self.settings
    }

    /// Encode a value directly to a JSON string
    pub fn encode_string<T: Serialize>(&self, value: &T) -> CodecResult<String> {
        let result = scope::with_settings(&self.settings, || self.write_document(value));
        match &result {
            Ok(text) => tracing::trace!("encoded {} as {} bytes of JSON", type_name::<T>(), text.len()),
            Err(e) => tracing::debug!("failed to encode {}: {}", type_name::<T>(), e),
        }
        result
    }

    /// Decode a JSON string to a value
    pub fn decode_str<T: DeserializeOwned>(&self, data: &str) -> CodecResult<T> {
        self.decode_slice(data.as_bytes())
    }

    /// Decode UTF-8 JSON bytes to a value
    pub fn decode_slice<T: DeserializeOwned>(&self, data: &[u8]) -> CodecResult<T> {
        let result = scope::with_settings(&self.settings, || self.read_document(data));
        match &result {
            Ok(_) => tracing::trace!("decoded {} from {} bytes of JSON", type_name::<T>(), data.len()),
            Err(e) => tracing::debug!("failed to decode {}: {}", type_name::<T>(), e),
        }
        result
    }

    /// Settings that need the document as a tree on its way in or out
    fn needs_tree(&self) -> bool {
        self.settings.type_name_handling == TypeNameHandling::Root
            || self.settings.max_depth.is_some()
    }

    fn write_document<T: Serialize>(&self, value: &T) -> CodecResult<String> {
        match self.settings.null_value_handling {
            NullValueHandling::Include => self.write_checked(value, type_name::<T>()),
            NullValueHandling::Ignore => self.write_checked(&SkipNoneFields(value), type_name::<T>()),
        }
    }

    fn write_checked<V: Serialize + ?Sized>(&self, value: &V, name: &str) -> CodecResult<String> {
        if !self.needs_tree() {
            return self.write(value);
        }

        let mut tree = serde_json::to_value(value).map_err(CodecError::encoding)?;
        if let Some(limit) = self.settings.max_depth {
            check_depth(&tree, limit).map_err(CodecError::Encoding)?;
        }
        if self.settings.type_name_handling == TypeNameHandling::Root {
            let mut envelope = Map::new();
            envelope.insert(TYPE_KEY.to_string(), Value::String(name.to_string()));
            envelope.insert(VALUE_KEY.to_string(), tree);
            tree = Value::Object(envelope);
        }
        self.write(&tree)
    }

    fn write<V: Serialize + ?Sized>(&self, value: &V) -> CodecResult<String> {
        match self.settings.formatting {
            Formatting::Compact => serde_json::to_string(value),
            Formatting::Indented => serde_json::to_string_pretty(value),
        }
        .map_err(CodecError::encoding)
    }

    fn read_document<T: DeserializeOwned>(&self, data: &[u8]) -> CodecResult<T> {
        if !self.needs_tree() {
            return serde_json::from_slice(data).map_err(CodecError::decoding);
        }

        let mut tree: Value = serde_json::from_slice(data).map_err(CodecError::decoding)?;
        if self.settings.type_name_handling == TypeNameHandling::Root {
            tree = open_envelope::<T>(tree)?;
        }
        if let Some(limit) = self.settings.max_depth {
            check_depth(&tree, limit).map_err(CodecError::Decoding)?;
        }
        serde_json::from_value(tree).map_err(CodecError::decoding)
    }
}

impl From<CodecSettings> for JsonCodec {
    fn from(settings: CodecSettings) -> Self {
        Self::with_settings(settings)
    }
}

impl Codec for JsonCodec {
    fn serialize<T: Serialize>(&self, value: &T) -> CodecResult<Payload> {
        self.encode_string(value).map(Payload::Text)
    }

    fn deserialize<T: DeserializeOwned>(&self, payload: &Payload) -> CodecResult<T> {
        self.decode_slice(payload.as_bytes())
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

/// Nesting depth: 0 for scalars, 1 for a flat array or object
fn depth_of(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(depth_of).max().unwrap_or(0),
        Value::Object(members) => 1 + members.values().map(depth_of).max().unwrap_or(0),
        _ => 0,
    }
}

fn check_depth(value: &Value, limit: usize) -> Result<(), String> {
    let depth = depth_of(value);
    if depth > limit {
        return Err(format!("nesting depth {depth} exceeds the limit of {limit}"));
    }
    Ok(())
}

/// Unwrap a `{"$type", "$value"}` envelope, checking the type name against `T`
fn open_envelope<T>(tree: Value) -> CodecResult<Value> {
    let Value::Object(mut envelope) = tree else {
        return Err(CodecError::decoding("expected a type envelope object"));
    };
    let actual = match envelope.remove(TYPE_KEY) {
        Some(Value::String(name)) => name,
        _ => return Err(CodecError::decoding("type envelope is missing `$type`")),
    };
    let expected = type_name::<T>();
    if actual != expected {
        return Err(CodecError::TypeMismatch {
            expected: expected.to_string(),
            actual,
        });
    }
    envelope
        .remove(VALUE_KEY)
        .ok_or_else(|| CodecError::decoding("type envelope is missing `$value`"))
}

#[cfg(test)]
#[path = "json/json_tests.rs"]
mod json_tests;
