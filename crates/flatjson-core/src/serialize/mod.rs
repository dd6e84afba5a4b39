mod json;

use crate::map::FlatMap;
use std::fmt;
use thiserror::Error as ThisError;

/// JSON encode/decode for flattened maps.
///
/// This module is format-level only:
/// - The flattener never calls into it.
/// - Decoding reports every number as `Value::Float`.
/// - Nested arrays or objects are rejected on decode.

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("deserialize error: {0}")]
    Deserialize(String),
}

///
/// SerializeErrorKind
///
/// Stable error-kind taxonomy for serializer failures.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SerializeErrorKind {
    Serialize,
    Deserialize,
}

impl SerializeErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serialize => "serialize",
            Self::Deserialize => "deserialize",
        }
    }
}

impl fmt::Display for SerializeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SerializeError {
    /// Return a stable error kind independent of backend error-message text.
    #[must_use]
    pub const fn kind(&self) -> SerializeErrorKind {
        match self {
            Self::Serialize(_) => SerializeErrorKind::Serialize,
            Self::Deserialize(_) => SerializeErrorKind::Deserialize,
        }
    }
}

/// Encode a flat map as a JSON object string.
pub fn to_json(map: &FlatMap) -> Result<String, SerializeError> {
    json::to_string(map)
}

/// Encode a flat map as JSON bytes.
pub fn to_json_vec(map: &FlatMap) -> Result<Vec<u8>, SerializeError> {
    json::to_vec(map)
}

/// Decode a JSON object of scalars produced by [`to_json`].
pub fn from_json(s: &str) -> Result<FlatMap, SerializeError> {
    json::from_str(s)
}

/// Decode JSON bytes produced by [`to_json_vec`].
pub fn from_json_slice(bytes: &[u8]) -> Result<FlatMap, SerializeError> {
    json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn sample() -> FlatMap {
        [
            ("A", Value::Int(10)),
            ("B", Value::Text("str".to_string())),
            ("C.flag", Value::Bool(true)),
            ("C.none", Value::Null),
            ("C.ratio", Value::Float(0.25)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn encodes_bare_scalars() {
        let json = to_json(&sample()).expect("encode");

        assert_eq!(
            json,
            r#"{"A":10,"B":"str","C.flag":true,"C.none":null,"C.ratio":0.25}"#
        );
    }

    #[test]
    fn decode_reports_numbers_as_floats() {
        let map = from_json(r#"{"A":10,"B":-3}"#).expect("decode");

        assert!(matches!(map.get("A"), Some(Value::Float(f)) if *f == 10.0));
        assert!(matches!(map.get("B"), Some(Value::Float(f)) if *f == -3.0));
    }

    #[test]
    fn round_trip_preserves_equality() {
        let map = sample();
        let bytes = to_json_vec(&map).expect("encode");
        let decoded = from_json_slice(&bytes).expect("decode");

        assert_eq!(decoded, map);
    }

    #[test]
    fn encode_rejects_non_finite_floats() {
        for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut map = sample();
            map.insert("C.ratio", Value::Float(f));

            let err = to_json(&map).expect_err("non-finite float");
            assert_eq!(err.kind(), SerializeErrorKind::Serialize);
            assert!(err.to_string().contains("non-finite float"), "{err}");

            let err = to_json_vec(&map).expect_err("non-finite float");
            assert_eq!(err.kind(), SerializeErrorKind::Serialize);
        }
    }

    #[test]
    fn decode_rejects_nested_values() {
        let err = from_json(r#"{"A":{"B":1}}"#).expect_err("nested object must fail");
        assert_eq!(err.kind(), SerializeErrorKind::Deserialize);

        let err = from_json(r#"{"A":[1,2]}"#).expect_err("array must fail");
        assert_eq!(err.kind(), SerializeErrorKind::Deserialize);
    }
}
