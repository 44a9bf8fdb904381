#![allow(non_snake_case)]

use super::*;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use tracing_test::traced_test;
use wirecodec_core::{DateFormatHandling, EnumHandling};
use wirecodec_macros::WireEnum;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct TestMessage {
    name: String,
    value: i32,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct WrappedData {
    added_data: Option<String>,
    original_data: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, WireEnum)]
enum MonitorChannelMessageType {
    Ping = 10,
    Message = 20,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct MonitorChannelMessage {
    message_type: MonitorChannelMessageType,
    message_content: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Event {
    #[serde(with = "wirecodec_core::datetime")]
    raised_at: DateTime<Utc>,
}

/// Stands in for a member that has no wire representation (an OS handle, a lock)
struct Handle;

impl Serialize for Handle {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("handles cannot be serialized"))
    }
}

#[derive(Serialize)]
struct WithHandle {
    name: String,
    handle: Handle,
}

fn test_message() -> TestMessage {
    TestMessage {
        name: "Hello".to_string(),
        value: 123,
    }
}

// JsonCodec basics

#[test]
fn JsonCodec___serialize_deserialize___roundtrip_preserves_data() {
    let codec = JsonCodec::new();
    let original = test_message();

    let payload = codec.serialize(&original).unwrap();
    let decoded: TestMessage = codec.deserialize(&payload).unwrap();

    assert_eq!(original, decoded);
}

#[test]
fn JsonCodec___serialize___produces_text_payload() {
    let codec = JsonCodec::new();

    let payload = codec.serialize(&test_message()).unwrap();

    assert_eq!(payload, Payload::Text(r#"{"name":"Hello","value":123}"#.into()));
}

#[test]
fn JsonCodec___pretty___output_contains_newlines() {
    let codec = JsonCodec::pretty();

    let encoded = codec.encode_string(&test_message()).unwrap();

    assert!(encoded.contains('\n'));
    assert_eq!(codec.decode_str::<TestMessage>(&encoded).unwrap(), test_message());
}

#[test]
fn JsonCodec___new___output_is_compact() {
    let codec = JsonCodec::new();

    let encoded = codec.encode_string(&test_message()).unwrap();

    assert!(!encoded.contains('\n'));
}

#[test]
fn JsonCodec___new___matches_explicit_default_settings_byte_for_byte() {
    let implicit = JsonCodec::new();
    let explicit = JsonCodec::with_settings(CodecSettings::default());
    let value = WrappedData {
        added_data: Some("ž".into()),
        original_data: None,
    };

    let a = implicit.serialize(&value).unwrap();
    let b = explicit.serialize(&value).unwrap();

    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn JsonCodec___from_settings___keeps_settings() {
    let settings = CodecSettings::default().with_max_depth(4);

    let codec = JsonCodec::from(settings);

    assert_eq!(codec.settings(), &settings);
}

#[test]
fn JsonCodec___content_type___returns_application_json() {
    let codec = JsonCodec::new();

    assert_eq!(codec.content_type(), "application/json");
}

#[test]
fn JsonCodec___decode_str___parses_json_string() {
    let codec = JsonCodec::new();
    let json = r#"{"name": "from_string", "value": 99}"#;

    let result: TestMessage = codec.decode_str(json).unwrap();

    assert_eq!(result.value, 99);
    assert_eq!(result.name, "from_string");
}

#[test]
fn JsonCodec___deserialize___accepts_utf8_binary_payload() {
    let codec = JsonCodec::new();
    let payload = Payload::Binary(br#"{"name":"bytes","value":-1}"#.to_vec());

    let result: TestMessage = codec.deserialize(&payload).unwrap();

    assert_eq!(result.name, "bytes");
}

// Null handling

#[test]
fn JsonCodec___null_field___roundtrips_as_none() {
    let codec = JsonCodec::new();
    let original = WrappedData {
        added_data: Some("Hello".into()),
        original_data: None,
    };

    let encoded = codec.encode_string(&original).unwrap();
    let decoded: WrappedData = codec.decode_str(&encoded).unwrap();

    assert!(encoded.contains(r#""original_data":null"#));
    assert_eq!(decoded, original);
}

#[test]
fn JsonCodec___ignore_nulls___omits_null_members_and_still_roundtrips() {
    let codec = JsonCodec::with_settings(
        CodecSettings::default().with_null_value_handling(NullValueHandling::Ignore),
    );
    let original = WrappedData {
        added_data: Some("Hello".into()),
        original_data: None,
    };

    let encoded = codec.encode_string(&original).unwrap();
    let decoded: WrappedData = codec.decode_str(&encoded).unwrap();

    assert_eq!(encoded, r#"{"added_data":"Hello"}"#);
    assert_eq!(decoded, original);
}

#[test]
fn JsonCodec___ignore_nulls___keeps_null_array_elements() {
    let codec = JsonCodec::with_settings(
        CodecSettings::default().with_null_value_handling(NullValueHandling::Ignore),
    );
    let original = vec![Some(1), None, Some(3)];

    let encoded = codec.encode_string(&original).unwrap();
    let decoded: Vec<Option<i32>> = codec.decode_str(&encoded).unwrap();

    assert_eq!(encoded, "[1,null,3]");
    assert_eq!(decoded, original);
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Marker;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct WithUnit {
    name: String,
    marker: Marker,
    nothing: (),
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Settled {
    #[serde(with = "wirecodec_core::datetime::option", default)]
    settled_at: Option<DateTime<Utc>>,
    inner: WrappedData,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
enum Command {
    Publish { topic: String, reply_to: Option<String> },
}

fn ignore_nulls() -> JsonCodec {
    JsonCodec::with_settings(
        CodecSettings::default().with_null_value_handling(NullValueHandling::Ignore),
    )
}

#[test]
fn JsonCodec___ignore_nulls___keeps_none_map_entries() {
    let codec = ignore_nulls();
    let original: BTreeMap<String, Option<i32>> =
        BTreeMap::from([("a".to_string(), None), ("b".to_string(), Some(1))]);

    let encoded = codec.encode_string(&original).unwrap();
    let decoded: BTreeMap<String, Option<i32>> = codec.decode_str(&encoded).unwrap();

    assert_eq!(encoded, r#"{"a":null,"b":1}"#);
    assert_eq!(decoded, original);
}

#[test]
fn JsonCodec___ignore_nulls___keeps_unit_fields() {
    let codec = ignore_nulls();
    let original = WithUnit {
        name: "x".into(),
        marker: Marker,
        nothing: (),
    };

    let encoded = codec.encode_string(&original).unwrap();
    let decoded: WithUnit = codec.decode_str(&encoded).unwrap();

    assert_eq!(encoded, r#"{"name":"x","marker":null,"nothing":null}"#);
    assert_eq!(decoded, original);
}

#[test]
fn JsonCodec___ignore_nulls___skips_none_in_nested_and_helper_fields() {
    let codec = ignore_nulls();
    let original = Settled {
        settled_at: None,
        inner: WrappedData {
            added_data: None,
            original_data: Some("kept".into()),
        },
    };

    let encoded = codec.encode_string(&original).unwrap();
    let decoded: Settled = codec.decode_str(&encoded).unwrap();

    assert_eq!(encoded, r#"{"inner":{"original_data":"kept"}}"#);
    assert_eq!(decoded, original);
}

#[test]
fn JsonCodec___ignore_nulls___skips_none_in_struct_variant() {
    let codec = ignore_nulls();
    let original = vec![Command::Publish {
        topic: "prices".into(),
        reply_to: None,
    }];

    let encoded = codec.encode_string(&original).unwrap();
    let decoded: Vec<Command> = codec.decode_str(&encoded).unwrap();

    assert_eq!(encoded, r#"[{"Publish":{"topic":"prices"}}]"#);
    assert_eq!(decoded, original);
}

#[test]
fn JsonCodec___ignore_nulls___applies_inside_type_envelope() {
    let codec = JsonCodec::with_settings(
        CodecSettings::default()
            .with_null_value_handling(NullValueHandling::Ignore)
            .with_type_name_handling(TypeNameHandling::Root),
    );
    let original = WrappedData {
        added_data: None,
        original_data: Some("Hello".into()),
    };

    let encoded = codec.encode_string(&original).unwrap();
    let decoded: WrappedData = codec.decode_str(&encoded).unwrap();

    assert_eq!(
        encoded,
        format!(
            r#"{{"$type":"{}","$value":{{"original_data":"Hello"}}}}"#,
            std::any::type_name::<WrappedData>()
        )
    );
    assert_eq!(decoded, original);
}

#[test]
fn JsonCodec___ignore_nulls___encodes_wide_integers_directly() {
    let wide = i128::from(i64::MAX) + 1;

    let encoded = ignore_nulls().encode_string(&wide).unwrap();

    assert_eq!(encoded, "9223372036854775808");
}

#[test]
fn JsonCodec___tree_settings___reject_integers_wider_than_64_bits() {
    let wide = u128::from(u64::MAX) + 1;
    let depth_limited = JsonCodec::with_settings(CodecSettings::default().with_max_depth(4));
    let tagged = JsonCodec::with_settings(
        CodecSettings::default().with_type_name_handling(TypeNameHandling::Root),
    );

    assert_eq!(
        JsonCodec::new().encode_string(&wide).unwrap(),
        "18446744073709551616"
    );
    assert!(depth_limited.encode_string(&wide).unwrap_err().is_encoding());
    assert!(tagged.encode_string(&wide).unwrap_err().is_encoding());
}

#[test]
fn JsonCodec___none_at_root___roundtrips() {
    let codec = JsonCodec::new();

    let payload = codec.serialize(&Option::<String>::None).unwrap();
    let decoded: Option<String> = codec.deserialize(&payload).unwrap();

    assert_eq!(payload.as_text().unwrap(), "null");
    assert!(decoded.is_none());
}

// Enum and date handling

#[test]
fn JsonCodec___enum_by_name___writes_variant_name() {
    let codec = JsonCodec::new();
    let message = MonitorChannelMessage {
        message_type: MonitorChannelMessageType::Message,
        message_content: None,
    };

    let encoded = codec.encode_string(&message).unwrap();

    assert_eq!(encoded, r#"{"message_type":"Message","message_content":null}"#);
}

#[test]
fn JsonCodec___enum_by_ordinal___writes_discriminant_and_roundtrips() {
    let codec = JsonCodec::with_settings(
        CodecSettings::default().with_enum_handling(EnumHandling::Ordinal),
    );
    let message = MonitorChannelMessage {
        message_type: MonitorChannelMessageType::Ping,
        message_content: Some("Hello2".into()),
    };

    let encoded = codec.encode_string(&message).unwrap();
    let decoded: MonitorChannelMessage = codec.decode_str(&encoded).unwrap();

    assert_eq!(encoded, r#"{"message_type":10,"message_content":"Hello2"}"#);
    assert_eq!(decoded, message);
}

#[test]
fn JsonCodec___unix_millis___writes_timestamp_and_roundtrips() {
    let codec = JsonCodec::with_settings(
        CodecSettings::default().with_date_format_handling(DateFormatHandling::UnixMillis),
    );
    let event = Event {
        raised_at: Utc.timestamp_millis_opt(1_700_000_000_250).unwrap(),
    };

    let encoded = codec.encode_string(&event).unwrap();
    let decoded: Event = codec.decode_str(&encoded).unwrap();

    assert_eq!(encoded, r#"{"raised_at":1700000000250}"#);
    assert_eq!(decoded, event);
}

// Type names

#[test]
fn JsonCodec___root_type_names___wraps_value_in_envelope() {
    let codec = JsonCodec::with_settings(
        CodecSettings::default().with_type_name_handling(TypeNameHandling::Root),
    );

    let encoded = codec.encode_string(&42i32).unwrap();

    assert_eq!(encoded, r#"{"$type":"i32","$value":42}"#);
    assert_eq!(codec.decode_str::<i32>(&encoded).unwrap(), 42);
}

#[test]
fn JsonCodec___root_type_names___detects_mismatched_type() {
    let codec = JsonCodec::with_settings(
        CodecSettings::default().with_type_name_handling(TypeNameHandling::Root),
    );
    let encoded = codec.encode_string(&test_message()).unwrap();

    let err = codec.decode_str::<WrappedData>(&encoded).unwrap_err();

    match err {
        CodecError::TypeMismatch { expected, actual } => {
            assert!(expected.ends_with("WrappedData"));
            assert!(actual.ends_with("TestMessage"));
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn JsonCodec___root_type_names___rejects_bare_value() {
    let codec = JsonCodec::with_settings(
        CodecSettings::default().with_type_name_handling(TypeNameHandling::Root),
    );

    let err = codec.decode_str::<i32>("42").unwrap_err();

    assert!(matches!(err, CodecError::Decoding(_)));
}

#[test]
fn JsonCodec___without_type_names___mismatched_type_is_best_effort() {
    #[derive(Debug, Deserialize)]
    struct NameOnly {
        name: String,
    }
    let codec = JsonCodec::new();
    let payload = codec.serialize(&test_message()).unwrap();

    let partial: NameOnly = codec.deserialize(&payload).unwrap();
    let mismatch = codec.deserialize::<WrappedData>(&Payload::from("[1,2]"));

    assert_eq!(partial.name, "Hello");
    assert!(mismatch.unwrap_err().is_decoding());
}

// Depth limit

#[test]
fn JsonCodec___max_depth___rejects_deep_value_on_encode() {
    let codec = JsonCodec::with_settings(CodecSettings::default().with_max_depth(2));
    let nested = vec![vec![vec![1u8]]];

    let err = codec.encode_string(&nested).unwrap_err();

    assert!(err.is_encoding());
    assert!(err.to_string().contains("nesting depth 3 exceeds the limit of 2"));
}

#[test]
fn JsonCodec___max_depth___rejects_deep_input_on_decode() {
    let codec = JsonCodec::with_settings(CodecSettings::default().with_max_depth(2));

    let err = codec.decode_str::<Vec<Vec<Vec<u8>>>>("[[[1]]]").unwrap_err();

    assert!(err.is_decoding());
}

#[test]
fn JsonCodec___max_depth___allows_value_at_limit() {
    let codec = JsonCodec::with_settings(CodecSettings::default().with_max_depth(2));
    let nested = vec![vec![1u8, 2], vec![]];

    let encoded = codec.encode_string(&nested).unwrap();

    assert_eq!(codec.decode_str::<Vec<Vec<u8>>>(&encoded).unwrap(), nested);
}

// Errors

#[test]
fn JsonCodec___decode___invalid_json_returns_decoding_error() {
    let codec = JsonCodec::new();

    let result: Result<TestMessage, _> = codec.deserialize(&Payload::from("invalid json"));

    assert!(matches!(result, Err(CodecError::Decoding(_))));
}

#[test]
fn JsonCodec___decode___wrong_member_type_returns_decoding_error() {
    let codec = JsonCodec::new();

    let result = codec.decode_str::<TestMessage>(r#"{"name":"x","value":"not a number"}"#);

    assert!(matches!(result, Err(CodecError::Decoding(_))));
}

#[test]
fn JsonCodec___decode___non_utf8_binary_returns_decoding_error() {
    let codec = JsonCodec::new();

    let result = codec.deserialize::<String>(&Payload::Binary(vec![b'"', 0xff, b'"']));

    assert!(matches!(result, Err(CodecError::Decoding(_))));
}

#[test]
fn JsonCodec___encode___non_string_map_keys_return_encoding_error() {
    let codec = JsonCodec::new();
    let mut map = HashMap::new();
    map.insert((1, 2), "pair");

    let result = codec.serialize(&map);

    assert!(matches!(result, Err(CodecError::Encoding(_))));
}

#[test]
fn JsonCodec___encode___unserializable_member_returns_encoding_error() {
    let codec = JsonCodec::new();
    let value = WithHandle {
        name: "resource".into(),
        handle: Handle,
    };

    let err = codec.serialize(&value).unwrap_err();

    assert_eq!(
        err,
        CodecError::Encoding("handles cannot be serialized".into())
    );
}

// Logging

#[test]
#[traced_test]
fn JsonCodec___decode_failure___is_logged_at_debug() {
    let codec = JsonCodec::new();

    let _ = codec.decode_str::<TestMessage>("{");

    assert!(logs_contain("failed to decode"));
}

#[test]
#[traced_test]
fn JsonCodec___encode___is_traced_with_size() {
    let codec = JsonCodec::new();

    codec.encode_string(&true).unwrap();

    assert!(logs_contain("encoded bool as 4 bytes of JSON"));
}
