//! `DateTime<Utc>` fields written per the active date format
//!
//! Use with `#[serde(with = "wirecodec_core::datetime")]`, or
//! `#[serde(with = "wirecodec_core::datetime::option", default)]` for
//! `Option<DateTime<Utc>>`. The `default` is required for the field to read
//! back as `None` when it was left out under
//! [`NullValueHandling::Ignore`](crate::config::NullValueHandling::Ignore);
//! serde only fills in missing fields that have no `with` attribute.
//!
//! The Unix formats refuse to write a value they would truncate: a fractional
//! second under [`DateFormatHandling::UnixSeconds`], or a fraction of a
//! millisecond under [`DateFormatHandling::UnixMillis`].
//!
//! Human-readable readers accept RFC 3339 text or a number. Numbers are read
//! as milliseconds under [`DateFormatHandling::UnixMillis`] and as seconds
//! otherwise.

use crate::config::DateFormatHandling;
use crate::scope;
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::{self, Serializer};
use std::fmt;

pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    let nanos = value.timestamp_subsec_nanos();
    match scope::current().date_format_handling {
        DateFormatHandling::Iso8601 => serializer.serialize_str(&rfc3339(value)),
        DateFormatHandling::UnixSeconds if nanos != 0 => Err(ser::Error::custom(format!(
            "{} has a fractional second and cannot be written as Unix seconds",
            rfc3339(value)
        ))),
        DateFormatHandling::UnixSeconds => serializer.serialize_i64(value.timestamp()),
        DateFormatHandling::UnixMillis if nanos % 1_000_000 != 0 => Err(ser::Error::custom(format!(
            "{} has a fractional millisecond and cannot be written as Unix milliseconds",
            rfc3339(value)
        ))),
        DateFormatHandling::UnixMillis => serializer.serialize_i64(value.timestamp_millis()),
    }
}

fn rfc3339(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let handling = scope::current().date_format_handling;
    let visitor = DateTimeVisitor { handling };
    if deserializer.is_human_readable() {
        return deserializer.deserialize_any(visitor);
    }
    match handling {
        DateFormatHandling::Iso8601 => deserializer.deserialize_str(visitor),
        DateFormatHandling::UnixSeconds | DateFormatHandling::UnixMillis => {
            deserializer.deserialize_i64(visitor)
        }
    }
}

/// Same as the parent module, for `Option<DateTime<Utc>>`
pub mod option {
    use super::*;
    use serde::{Deserialize, Serialize};

    struct Wrapped(DateTime<Utc>);

    impl Serialize for Wrapped {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            super::serialize(&self.0, serializer)
        }
    }

    impl<'de> Deserialize<'de> for Wrapped {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            super::deserialize(deserializer).map(Wrapped)
        }
    }

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_some(&Wrapped(*value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|wrapped| wrapped.0))
    }
}

struct DateTimeVisitor {
    handling: DateFormatHandling,
}

impl DateTimeVisitor {
    fn timestamp<E: de::Error>(&self, value: i64) -> Result<DateTime<Utc>, E> {
        let parsed = match self.handling {
            DateFormatHandling::UnixMillis => Utc.timestamp_millis_opt(value).single(),
            DateFormatHandling::Iso8601 | DateFormatHandling::UnixSeconds => {
                Utc.timestamp_opt(value, 0).single()
            }
        };
        parsed.ok_or_else(|| E::custom(format!("timestamp {value} is out of range")))
    }
}

impl<'de> Visitor<'de> for DateTimeVisitor {
    type Value = DateTime<Utc>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an RFC 3339 date-time or a Unix timestamp")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        DateTime::parse_from_rfc3339(value)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|e| E::custom(format!("invalid date-time `{value}`: {e}")))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        self.timestamp(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        let value = i64::try_from(value)
            .map_err(|_| E::custom(format!("timestamp {value} is out of range")))?;
        self.timestamp(value)
    }
}
