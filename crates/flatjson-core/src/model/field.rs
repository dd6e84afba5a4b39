///
/// CONSTANTS
///

/// Rename value that suppresses a field and everything beneath it.
pub const SKIP_NAME: &str = "-";

///
/// FieldDescriptor
/// Declared shape of one record field, in declaration order.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldDescriptor {
    /// Field identifier as declared.
    pub name: &'static str,
    /// Key segment override; `"-"` suppresses the field.
    pub rename: Option<&'static str>,
    /// Children are promoted into the parent namespace.
    pub embedded: bool,
    /// Omit the field when absent or empty.
    pub omit_empty: bool,
    /// Invisible fields are never traversed.
    pub exported: bool,
}

impl FieldDescriptor {
    /// Exported, plain field named `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            rename: None,
            embedded: false,
            omit_empty: false,
            exported: true,
        }
    }

    #[must_use]
    pub const fn rename(mut self, rename: &'static str) -> Self {
        self.rename = Some(rename);
        self
    }

    #[must_use]
    pub const fn skip(self) -> Self {
        self.rename(SKIP_NAME)
    }

    #[must_use]
    pub const fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    #[must_use]
    pub const fn omit_empty(mut self) -> Self {
        self.omit_empty = true;
        self
    }

    #[must_use]
    pub const fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Key segment this field contributes when it is not embedded.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self.rename {
            Some(rename) => rename,
            None => self.name,
        }
    }

    /// Suppression wins over promotion.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.rename == Some(SKIP_NAME)
    }

    /// Whether the traversal looks at this field at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.exported && !self.is_skipped()
    }
}
