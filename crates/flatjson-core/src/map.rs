use crate::value::Value;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// FlatMap
///
/// Single-level mapping from joined key paths to leaf values.
///
/// - Keys iterate in sorted order; traversal order is not preserved.
/// - Equality follows `Value` semantics, so a map compares equal to its own
///   JSON round trip.
/// - Serializes as a plain JSON object.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, IntoIterator, PartialEq, Serialize)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct FlatMap(BTreeMap<String, Value>);

impl FlatMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a leaf, returning the value previously stored at `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}

impl From<BTreeMap<String, Value>> for FlatMap {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for FlatMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K, V> Extend<(K, V)> for FlatMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_from_pairs() {
        let map: FlatMap = [("b", Value::Int(2)), ("a", Value::Int(1))]
            .into_iter()
            .collect();

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn insert_reports_previous_value() {
        let mut map = FlatMap::new();

        assert_eq!(map.insert("A", 1i64), None);
        assert_eq!(map.insert("A", "x"), Some(Value::Int(1)));
        assert_eq!(map.get("A"), Some(&Value::Text("x".to_string())));
    }

    #[test]
    fn equality_ignores_numeric_kind() {
        let ints: FlatMap = [("n", Value::Int(10)), ("m", Value::Uint(3))]
            .into_iter()
            .collect();
        let floats: FlatMap = [("n", Value::Float(10.0)), ("m", Value::Float(3.0))]
            .into_iter()
            .collect();

        assert_eq!(ints, floats);
    }

    #[test]
    fn borrowed_iteration_walks_sorted_keys() {
        let map: FlatMap = [("z", 1i64), ("m", 2), ("a", 3)].into_iter().collect();

        let keys: Vec<&String> = (&map).into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["a", "m", "z"]);
    }
}
