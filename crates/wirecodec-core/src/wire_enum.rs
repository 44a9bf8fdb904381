//! Enumerated values written by name or by ordinal
//!
//! Request codes and similar fieldless enums implement [`WireEnum`] (usually
//! through `#[derive(WireEnum)]`) and route their serde impls through
//! [`serialize`] and [`deserialize`]. The active codec's
//! [`EnumHandling`](crate::EnumHandling) picks the written form. Self-describing
//! formats read either form back.

use crate::config::EnumHandling;
use crate::scope;
use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use std::fmt;
use std::marker::PhantomData;

/// A fieldless enum with a stable name and ordinal per variant
pub trait WireEnum: Sized {
    /// Name used in error messages
    const TYPE_NAME: &'static str;

    /// Wire name of this variant
    fn name(&self) -> &'static str;

    /// Wire ordinal of this variant
    fn ordinal(&self) -> i64;

    /// Look a variant up by wire name
    fn from_name(name: &str) -> Option<Self>;

    /// Look a variant up by wire ordinal
    fn from_ordinal(ordinal: i64) -> Option<Self>;
}

/// Serialize a [`WireEnum`] using the active enum handling
pub fn serialize<E, S>(value: &E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: WireEnum,
    S: Serializer,
{
    match scope::current().enum_handling {
        EnumHandling::Name => serializer.serialize_str(value.name()),
        EnumHandling::Ordinal => serializer.serialize_i64(value.ordinal()),
    }
}

/// Deserialize a [`WireEnum`]
///
/// Human-readable formats accept a name or an ordinal regardless of settings.
/// Compact formats cannot be probed, so the active enum handling decides.
pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: WireEnum,
    D: Deserializer<'de>,
{
    let visitor = WireEnumVisitor::<E>(PhantomData);
    if deserializer.is_human_readable() {
        return deserializer.deserialize_any(visitor);
    }
    match scope::current().enum_handling {
        EnumHandling::Name => deserializer.deserialize_str(visitor),
        EnumHandling::Ordinal => deserializer.deserialize_i64(visitor),
    }
}

struct WireEnumVisitor<W>(PhantomData<W>);

impl<'de, W: WireEnum> Visitor<'de> for WireEnumVisitor<W> {
    type Value = W;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} variant name or ordinal", W::TYPE_NAME)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<W, E> {
        W::from_name(value)
            .ok_or_else(|| E::custom(format!("unknown {} variant `{}`", W::TYPE_NAME, value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<W, E> {
        W::from_ordinal(value)
            .ok_or_else(|| E::custom(format!("unknown {} ordinal {}", W::TYPE_NAME, value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<W, E> {
        let ordinal = i64::try_from(value)
            .map_err(|_| E::custom(format!("unknown {} ordinal {}", W::TYPE_NAME, value)))?;
        self.visit_i64(ordinal)
    }
}
