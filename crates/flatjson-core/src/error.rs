use crate::value::ValueKind;
use std::fmt;
use thiserror::Error as ThisError;

///
/// FlattenError
///
/// Failure of a whole flatten call. No partial map is returned alongside.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FlattenError {
    #[error("flattening depth exceeded at '{path}' (limit {limit})")]
    DepthExceeded { limit: usize, path: String },

    #[error("root is not a flattenable record: found {found}")]
    InvalidRoot { found: ValueKind },

    #[error("flattened key '{key}' was produced more than once")]
    KeyCollision { key: String },
}

impl FlattenError {
    /// Return a stable error kind independent of message text.
    #[must_use]
    pub const fn kind(&self) -> FlattenErrorKind {
        match self {
            Self::DepthExceeded { .. } => FlattenErrorKind::DepthExceeded,
            Self::InvalidRoot { .. } => FlattenErrorKind::InvalidRoot,
            Self::KeyCollision { .. } => FlattenErrorKind::KeyCollision,
        }
    }
}

///
/// FlattenErrorKind
///
/// Stable error-kind taxonomy for flatten failures.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlattenErrorKind {
    DepthExceeded,
    InvalidRoot,
    KeyCollision,
}

impl FlattenErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DepthExceeded => "depth_exceeded",
            Self::InvalidRoot => "invalid_root",
            Self::KeyCollision => "key_collision",
        }
    }
}

impl fmt::Display for FlattenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
