//! Depth-first flattening of records into a `FlatMap`.
//!
//! Fields are walked in declaration order. References and dynamic values are
//! resolved until a record, a leaf, or an absent value is reached; records
//! recurse under an extended prefix (or the same prefix when embedded) and
//! leaves are written under the joined key.

mod options;


pub use options::{CollisionPolicy, FlattenOptions};

use crate::{
    error::FlattenError,
    map::FlatMap,
    model::field::FieldDescriptor,
    traits::{Flatten, Node, Record, Reference},
    value::Value,
};
use tracing::{debug, trace, warn};

/// Flatten `value` with default options.
///
/// An absent root (an empty `Option` or `Dynamic`) yields an empty map; a
/// root that resolves to a leaf is rejected.
pub fn flatten<T>(value: &T) -> Result<FlatMap, FlattenError>
where
    T: Flatten + ?Sized,
{
    Flattener::default().flatten(value)
}

///
/// Flattener
///
/// Reusable flatten entry point bound to one set of options.
/// Holds no per-call state, so one instance may serve concurrent callers.
///

#[derive(Clone, Debug, Default)]
pub struct Flattener {
    options: FlattenOptions,
}

impl Flattener {
    #[must_use]
    pub const fn new(options: FlattenOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &FlattenOptions {
        &self.options
    }

    pub fn flatten<T>(&self, value: &T) -> Result<FlatMap, FlattenError>
    where
        T: Flatten + ?Sized,
    {
        let mut walk = Walk::new(&self.options);
        walk.root(value.node(), 0)?;

        debug!(
            keys = walk.out.len(),
            depth = walk.deepest,
            "flattened record"
        );

        Ok(walk.out)
    }
}

///
/// Walk
/// State for one flatten call.
///

struct Walk<'o> {
    options: &'o FlattenOptions,
    out: FlatMap,
    deepest: usize,
}

impl<'o> Walk<'o> {
    const fn new(options: &'o FlattenOptions) -> Self {
        Self {
            options,
            out: FlatMap::new(),
            deepest: 0,
        }
    }

    fn root(&mut self, node: Node<'_>, depth: usize) -> Result<(), FlattenError> {
        let prefix = self.options.prefix.clone().unwrap_or_default();
        self.guard(depth, |_| prefix.clone())?;

        match node {
            Node::Record(record) => self.record(record, &prefix, depth + 1),
            Node::Reference(Reference::Present(inner)) | Node::Dynamic(Some(inner)) => {
                self.root(inner.node(), depth + 1)
            }
            Node::Reference(Reference::Absent(_)) | Node::Dynamic(None) => {
                trace!("absent root");
                Ok(())
            }
            Node::Leaf(value) => Err(FlattenError::InvalidRoot {
                found: value.kind(),
            }),
        }
    }

    fn record(
        &mut self,
        record: &dyn Record,
        prefix: &str,
        depth: usize,
    ) -> Result<(), FlattenError> {
        self.guard(depth, |_| prefix.to_string())?;

        for (index, field) in record.fields().iter().enumerate() {
            if !field.is_visible() {
                trace!(field = field.name, "hidden field");
                continue;
            }

            // descriptor says visible but the record has no accessor for it
            let Some(value) = record.field(index) else {
                continue;
            };

            self.value(field, value.node(), prefix, depth + 1)?;
        }

        Ok(())
    }

    fn value(
        &mut self,
        field: &FieldDescriptor,
        node: Node<'_>,
        prefix: &str,
        depth: usize,
    ) -> Result<(), FlattenError> {
        self.guard(depth, |walk| walk.join(prefix, field.key()))?;

        match node {
            Node::Reference(Reference::Present(inner)) | Node::Dynamic(Some(inner)) => {
                self.value(field, inner.node(), prefix, depth + 1)
            }

            Node::Reference(Reference::Absent(zero)) => {
                if field.omit_empty {
                    trace!(field = field.name, "omitted absent reference");
                    return Ok(());
                }

                let zero = zero();
                self.value(field, zero.node(), prefix, depth + 1)
            }

            Node::Dynamic(None) => {
                trace!(field = field.name, "omitted empty dynamic value");
                Ok(())
            }

            Node::Record(record) if field.embedded => self.record(record, prefix, depth + 1),

            Node::Record(record) => {
                let key = self.join(prefix, field.key());
                self.record(record, &key, depth + 1)
            }

            Node::Leaf(value) => {
                if field.omit_empty && value.is_empty() {
                    trace!(field = field.name, "omitted empty value");
                    return Ok(());
                }

                let key = self.join(prefix, field.key());
                self.emit(key, value)
            }
        }
    }

    fn emit(&mut self, key: String, value: Value) -> Result<(), FlattenError> {
        if self.out.contains_key(&key) {
            match self.options.collision {
                CollisionPolicy::Overwrite => {}
                CollisionPolicy::Warn => {
                    warn!(key = %key, "flattened key collision, last write wins");
                }
                CollisionPolicy::Reject => return Err(FlattenError::KeyCollision { key }),
            }
        }

        trace!(key = %key, value = %value, "emit");
        self.out.insert(key, value);

        Ok(())
    }

    // `path` is only rendered when the limit is hit
    fn guard<F>(&mut self, depth: usize, path: F) -> Result<(), FlattenError>
    where
        F: FnOnce(&Self) -> String,
    {
        if depth > self.options.max_depth {
            let path = path(self);
            return Err(self.depth_exceeded(&path));
        }
        self.deepest = self.deepest.max(depth);

        Ok(())
    }

    fn depth_exceeded(&self, path: &str) -> FlattenError {
        warn!(path, limit = self.options.max_depth, "flattening depth exceeded");

        FlattenError::DepthExceeded {
            limit: self.options.max_depth,
            path: path.to_string(),
        }
    }

    fn join(&self, prefix: &str, segment: &str) -> String {
        if prefix.is_empty() {
            return segment.to_string();
        }

        let mut key =
            String::with_capacity(prefix.len() + self.options.separator.len() + segment.len());
        key.push_str(prefix);
        key.push_str(&self.options.separator);
        key.push_str(segment);

        key
    }
}
