use crate::traits::{Flatten, Node};
use std::fmt;

///
/// Dynamic
///
/// A field whose concrete type is only known at run time. Holds any
/// `Flatten` value, or nothing. An empty `Dynamic` is never emitted.
///

#[derive(Default)]
pub struct Dynamic(Option<Box<dyn Flatten + Send + Sync>>);

impl Dynamic {
    pub fn new<T>(value: T) -> Self
    where
        T: Flatten + Send + Sync + 'static,
    {
        Self(Some(Box::new(value)))
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self(None)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Replace the held value, returning the previous one.
    pub fn replace<T>(&mut self, value: T) -> Option<Box<dyn Flatten + Send + Sync>>
    where
        T: Flatten + Send + Sync + 'static,
    {
        self.0.replace(Box::new(value))
    }

    pub fn take(&mut self) -> Option<Box<dyn Flatten + Send + Sync>> {
        self.0.take()
    }
}

impl Flatten for Dynamic {
    fn node(&self) -> Node<'_> {
        Node::Dynamic(self.0.as_deref().map(|inner| -> &dyn Flatten { inner }))
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("Dynamic(None)")
        } else {
            f.write_str("Dynamic(..)")
        }
    }
}
