use crate::serialize::SerializeError;
use serde::{Serialize, de::DeserializeOwned};

/// Serialize a value into a JSON string.
pub(super) fn to_string<T>(t: &T) -> Result<String, SerializeError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(t).map_err(|e| SerializeError::Serialize(e.to_string()))
}

/// Serialize a value into JSON bytes.
pub(super) fn to_vec<T>(t: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_vec(t).map_err(|e| SerializeError::Serialize(e.to_string()))
}

/// Deserialize a JSON string into a value.
pub(super) fn from_str<T>(s: &str) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(s).map_err(|e| SerializeError::Deserialize(e.to_string()))
}

/// Deserialize JSON bytes into a value.
pub(super) fn from_slice<T>(bytes: &[u8]) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(bytes).map_err(|e| SerializeError::Deserialize(e.to_string()))
}
