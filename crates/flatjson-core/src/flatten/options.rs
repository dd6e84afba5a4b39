use crate::{DEFAULT_MAX_DEPTH, DEFAULT_SEPARATOR};
use serde::{Deserialize, Serialize};

///
/// FlattenOptions
///
/// Per-flattener configuration. Missing fields fall back to defaults when
/// deserialized, so a partial config document is valid.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct FlattenOptions {
    /// Joins key segments.
    pub separator: String,
    /// Recursion guard; see [`DEFAULT_MAX_DEPTH`].
    pub max_depth: usize,
    pub collision: CollisionPolicy,
    /// Prepended to every key.
    pub prefix: Option<String>,
}

impl FlattenOptions {
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_collision(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            collision: CollisionPolicy::default(),
            prefix: None,
        }
    }
}

///
/// CollisionPolicy
///
/// What happens when two fields flatten to the same key.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Later field in declaration order wins.
    #[default]
    Overwrite,
    /// Later field wins and a warning is logged.
    Warn,
    /// The call fails with `FlattenError::KeyCollision`.
    Reject,
}
