//! Runtime field metadata.
//!
//! The derive macro emits one `FieldDescriptor` table per record type; the
//! flattener reads only these tables and never inspects Rust types directly.
//!
//! In general:
//! - Macro code defines *what exists*
//! - `model` defines *what the traversal sees*
pub mod field;
