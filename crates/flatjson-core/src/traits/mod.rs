#[macro_use]
mod macros;
mod dynamic;

pub use dynamic::*;

use crate::{model::field::FieldDescriptor, value::Value};
use std::{rc::Rc, sync::Arc};

// ============================================================================
// NODE MODEL
// ============================================================================
//
// Closed set of shapes the flattener understands. Every field value is
// reduced to one of these before the traversal decides what to do with it.
//

///
/// Node
///

pub enum Node<'a> {
    /// Runtime-typed payload; `None` when nothing is held.
    Dynamic(Option<&'a dyn Flatten>),
    Leaf(Value),
    Record(&'a dyn Record),
    Reference(Reference<'a>),
}

///
/// Reference
///
/// Optional indirection. An absent reference carries a constructor for the
/// zero value of the pointed-to type.
///

pub enum Reference<'a> {
    Absent(ZeroFn),
    Present(&'a dyn Flatten),
}

/// Builds the zero value of a pointed-to type.
pub type ZeroFn = fn() -> Box<dyn Flatten>;

/// `ZeroFn` for any defaultable type.
#[must_use]
pub fn zero_of<T>() -> Box<dyn Flatten>
where
    T: Flatten + Default + 'static,
{
    Box::new(T::default())
}

// ============================================================================
// TRAVERSAL CONTRACTS
// ============================================================================

///
/// Flatten
///
/// Anything that may appear as a field value (or as the root).
///

pub trait Flatten {
    fn node(&self) -> Node<'_>;
}

///
/// Record
///
/// A value with a fixed, declaration-ordered set of named fields.
/// Usually implemented with `#[derive(Record)]`.
///
/// `field(i)` returns the value for `fields()[i]`, or `None` when the field
/// is private or skipped.
///

pub trait Record {
    fn fields(&self) -> &'static [FieldDescriptor];

    fn field(&self, index: usize) -> Option<&dyn Flatten>;
}

// ============================================================================
// INDIRECTION
// ============================================================================

impl<T> Flatten for Option<T>
where
    T: Flatten + Default + 'static,
{
    fn node(&self) -> Node<'_> {
        match self {
            Some(inner) => Node::Reference(Reference::Present(inner)),
            None => Node::Reference(Reference::Absent(zero_of::<T>)),
        }
    }
}

// Never-absent pointers resolve in place.
impl_transparent!(Box, Rc, Arc);

impl<T: Flatten + ?Sized> Flatten for &T {
    fn node(&self) -> Node<'_> {
        (**self).node()
    }
}

// ============================================================================
// LEAVES
// ============================================================================

impl_leaf!(bool, f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

impl Flatten for usize {
    fn node(&self) -> Node<'_> {
        Node::Leaf(Value::Uint(*self as u64))
    }
}

impl Flatten for isize {
    fn node(&self) -> Node<'_> {
        Node::Leaf(Value::Int(*self as i64))
    }
}

impl Flatten for char {
    fn node(&self) -> Node<'_> {
        Node::Leaf(Value::Text(self.to_string()))
    }
}

impl Flatten for str {
    fn node(&self) -> Node<'_> {
        Node::Leaf(Value::Text(self.to_string()))
    }
}

impl Flatten for String {
    fn node(&self) -> Node<'_> {
        Node::Leaf(Value::Text(self.clone()))
    }
}

impl Flatten for () {
    fn node(&self) -> Node<'_> {
        Node::Leaf(Value::Null)
    }
}

impl Flatten for Value {
    fn node(&self) -> Node<'_> {
        Node::Leaf(self.clone())
    }
}
