use crate::value::Value;

/// Cross-kind numeric equality; returns `None` if either side is non-numeric.
///
/// Integers of the same signedness compare exactly. Everything else goes
/// through the `f64` projection, matching what a JSON decoder reports after
/// a round trip.
#[must_use]
#[expect(clippy::float_cmp)]
pub fn numeric_eq(left: &Value, right: &Value) -> Option<bool> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a == b),
        (Value::Uint(a), Value::Uint(b)) => Some(a == b),
        (Value::Int(i), Value::Uint(u)) | (Value::Uint(u), Value::Int(i)) => {
            Some(u64::try_from(*i).is_ok_and(|i| i == *u))
        }
        _ => {
            let (a, b) = (left.as_f64()?, right.as_f64()?);
            Some(a == b)
        }
    }
}
