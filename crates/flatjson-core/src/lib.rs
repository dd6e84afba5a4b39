//! Core runtime for flatjson: the leaf value model, field descriptors, the
//! `Flatten` / `Record` traits, and the flattener that turns nested records
//! into a single-level `FlatMap`.
#![warn(unreachable_pub)]

extern crate self as flatjson;

// public exports are one module level down
pub mod error;
pub mod flatten;
pub mod map;
pub mod model;
pub mod serialize;
pub mod traits;
pub mod value;

///
/// CONSTANTS
///

/// Default key segment separator.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Default recursion guard for a single flatten call.
///
/// Depth counts every record, field and indirection step on the current
/// path, so each level of plain struct nesting costs two.
pub const DEFAULT_MAX_DEPTH: usize = 128;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, serializers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        flatten::{Flattener, flatten},
        map::FlatMap,
        model::field::FieldDescriptor,
        traits::{Dynamic, Flatten, Record},
        value::Value,
    };
}
