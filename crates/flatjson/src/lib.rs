//! Flatten nested records into a single-level map of dotted keys to JSON
//! scalars.
//!
//! ## Crate layout
//! - `core`: runtime value model, traits, flattener and JSON helpers.
//! - `Record`: derive macro that builds a record's field table.
//!
//! ```ignore
//! use flatjson::prelude::*;
//!
//! #[derive(Default, Record)]
//! pub struct Child {
//!     #[flat(rename = "CC")]
//!     pub c: i64,
//! }
//!
//! #[derive(Default, Record)]
//! pub struct Parent {
//!     #[flat(embed)]
//!     pub child: Child,
//!     pub other: Child,
//! }
//!
//! let flat = flatten(&Parent::default())?;
//! assert_eq!(flat.len(), 2); // "CC", "other.CC"
//! ```

pub use flatjson_core as core;
pub use flatjson_derive::Record;

// derive output resolves `::flatjson::{model, traits}`
pub use flatjson_core::{error, flatten, map, model, serialize, traits, value};

pub use flatjson_core::{
    error::FlattenError,
    flatten::{CollisionPolicy, FlattenOptions, Flattener, flatten},
    map::FlatMap,
    value::Value,
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::Record;
    pub use flatjson_core::{
        flatten::{Flattener, flatten},
        map::FlatMap,
        model::field::FieldDescriptor,
        traits::{Dynamic, Flatten as _, Record as _},
        value::Value,
    };
}
