mod compare;
mod wire;


use serde::{Serialize, Serializer, ser::Error as _};
use std::fmt;

// re-exports
pub use compare::numeric_eq;

///
/// CONSTANTS
///

/// Largest integer magnitude an `f64` holds without rounding.
pub const F64_SAFE_INT: u64 = 1u64 << 53;

///
/// Value
///
/// Terminal output unit of flattening. Every variant maps onto one of the
/// JSON scalar kinds (number, string, boolean, null).
///
/// Null  → an absent dynamic payload or an explicit `()` / `Value::Null`.
///

#[remain::sorted]
#[derive(Clone, Debug)]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Float(_) | Self::Int(_) | Self::Uint(_) => ValueKind::Number,
            Self::Null => ValueKind::Null,
            Self::Text(_) => ValueKind::Text,
        }
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Float(_) | Self::Int(_) | Self::Uint(_))
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    ///
    /// EMPTY
    ///

    /// True when the value equals the zero value of its kind:
    /// `null`, `false`, `0`, `0.0` and `""`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bool(b) => !*b,
            Self::Float(f) => *f == 0.0,
            Self::Int(i) => *i == 0,
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            Self::Uint(u) => *u == 0,
        }
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Project a numeric value onto the encoder's single numeric kind.
    ///
    /// Integers beyond ±2^53 round to the nearest representable `f64`.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            Self::Uint(u) => Some(*u as f64),
            _ => None,
        }
    }

    /// True when `as_f64` is exact for this value.
    #[must_use]
    pub const fn is_exact_f64(&self) -> bool {
        match self {
            Self::Int(i) => i.unsigned_abs() <= F64_SAFE_INT,
            Self::Uint(u) => *u <= F64_SAFE_INT,
            _ => true,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => numeric_eq(self, other).unwrap_or(false),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Null => f.write_str("null"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}

// Bare JSON scalars; the variant name never reaches the wire.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            // JSON has no NaN or infinity; refuse rather than write null
            Self::Float(f) if !f.is_finite() => Err(S::Error::custom(format!(
                "non-finite float {f} has no JSON encoding"
            ))),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Null => serializer.serialize_unit(),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Uint(u) => serializer.serialize_u64(*u),
        }
    }
}

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool   => Bool,
    f32    => Float,
    f64    => Float,
    i8     => Int,
    i16    => Int,
    i32    => Int,
    i64    => Int,
    &str   => Text,
    String => Text,
    u8     => Uint,
    u16    => Uint,
    u32    => Uint,
    u64    => Uint,
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

///
/// ValueKind
///
/// Coarse JSON-level classification, used in diagnostics.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    Bool,
    Null,
    Number,
    Text,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Null => "null",
            Self::Number => "number",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
