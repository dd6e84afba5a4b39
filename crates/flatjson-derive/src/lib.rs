use proc_macro::TokenStream;

mod record;
mod util;

/// Derive `Flatten` and `Record` for a struct with named fields.
///
/// Field options, all under `#[flat(...)]`:
/// - `rename = "Key"`: replace the key segment; `"-"` suppresses the field
/// - `skip`: same as `rename = "-"`
/// - `omit_empty`: drop absent or empty values
/// - `embed`: promote the field's own fields into this record
///
/// Private fields are never flattened.
///
/// Every exported, non-skipped field type must implement `Flatten`. There
/// is no impl for collections such as `Vec` or `HashMap`, so such a field is
/// a compile error until it is marked `skip`.
#[proc_macro_derive(Record, attributes(flat))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}
