//! Codec settings fixed at construction time

use serde::{Deserialize, Serialize};

/// Whitespace in textual output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formatting {
    /// Single line, no insignificant whitespace
    #[default]
    Compact,
    /// Multi-line output with two-space indentation
    Indented,
}

/// Whether object members holding `null` are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullValueHandling {
    /// Write `null` members
    #[default]
    Include,
    /// Leave out struct fields whose value is `None`
    ///
    /// Only struct fields are affected. Map entries, array elements and unit
    /// values are written even when they serialize as `null`. Readers see the
    /// field as missing, which a plain `Option` field treats as `None`; fields
    /// with a `#[serde(with = ...)]` helper also need `#[serde(default)]`.
    Ignore,
}

/// Whether payloads carry the name of the type they were produced from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeNameHandling {
    /// No type information on the wire; the caller names the type when decoding
    #[default]
    None,
    /// Wrap the root value together with its type name and check it on decode
    Root,
}

/// How enumerated values are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumHandling {
    /// Variant name, e.g. `"Subscribe"`
    #[default]
    Name,
    /// Variant ordinal, e.g. `10`
    Ordinal,
}

/// How date-times are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormatHandling {
    /// RFC 3339 text in UTC, e.g. `"2024-03-01T12:00:00Z"`
    #[default]
    Iso8601,
    /// Whole seconds since the Unix epoch
    ///
    /// Values with a fractional second fail to encode rather than being
    /// truncated.
    UnixSeconds,
    /// Milliseconds since the Unix epoch
    ///
    /// Values finer than a millisecond fail to encode.
    UnixMillis,
}

/// Settings that shape the wire representation of a codec
///
/// Settings are captured when a codec is constructed and never change
/// afterwards. A codec built without settings behaves exactly like one built
/// with `CodecSettings::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecSettings {
    /// Whitespace in textual output
    pub formatting: Formatting,

    /// Whether `null` object members are written
    pub null_value_handling: NullValueHandling,

    /// Whether the root type name travels with the payload
    pub type_name_handling: TypeNameHandling,

    /// Names or ordinals for [`WireEnum`](crate::WireEnum) types
    pub enum_handling: EnumHandling,

    /// Representation of date-time fields using [`datetime`](crate::datetime)
    pub date_format_handling: DateFormatHandling,

    /// Maximum nesting depth of arrays and objects
    ///
    /// Owned serde values cannot form reference cycles, so runaway nesting is
    /// the failure this guards against. `None` leaves only the format's own
    /// recursion limit in place.
    ///
    /// A JSON codec checks the limit, and the `$type` envelope of
    /// [`TypeNameHandling::Root`], on an in-memory `serde_json::Value`. That
    /// tree only holds integers within the `i64`/`u64` range, so wider
    /// `i128`/`u128` values fail to encode under either setting.
    pub max_depth: Option<usize>,
}

impl CodecSettings {
    /// Create the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create settings from JSON bytes
    ///
    /// Missing fields keep their defaults; empty input yields the defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    pub fn with_formatting(mut self, formatting: Formatting) -> Self {
        self.formatting = formatting;
        self
    }

    pub fn with_null_value_handling(mut self, handling: NullValueHandling) -> Self {
        self.null_value_handling = handling;
        self
    }

    pub fn with_type_name_handling(mut self, handling: TypeNameHandling) -> Self {
        self.type_name_handling = handling;
        self
    }

    pub fn with_enum_handling(mut self, handling: EnumHandling) -> Self {
        self.enum_handling = handling;
        self
    }

    pub fn with_date_format_handling(mut self, handling: DateFormatHandling) -> Self {
        self.date_format_handling = handling;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
