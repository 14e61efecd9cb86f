//! Submodule defining the `Column` asset.

use crate::{
    structs::{CaseMode, SchemaAsset},
    traits::{AssetLike, Renamable},
};

/// A table column.
///
/// The data type is kept as an opaque string: no dialect-specific
/// interpretation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Column {
    /// The named asset of the column.
    asset: SchemaAsset,
    /// The data type of the column.
    data_type: String,
    /// Whether the column accepts `NULL` values.
    nullable: bool,
}

impl Column {
    /// Creates a new nullable column with the given name and data type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let column = Column::new("email", "TEXT");
    /// assert_eq!(column.name(), "email");
    /// assert_eq!(column.data_type(), "TEXT");
    /// assert!(column.is_nullable());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self { asset: SchemaAsset::new(name), data_type: data_type.into(), nullable: true }
    }

    /// Marks the column as not accepting `NULL` values.
    #[must_use]
    #[inline]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Returns the data type of the column.
    #[must_use]
    #[inline]
    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    /// Returns whether the column accepts `NULL` values.
    #[must_use]
    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub(crate) fn set_nullable(&mut self, nullable: bool) {
        self.nullable = nullable;
    }
}

impl AssetLike for Column {
    #[inline]
    fn asset(&self) -> &SchemaAsset {
        &self.asset
    }

    #[inline]
    fn replace_case_mode(&mut self, case_mode: CaseMode) {
        self.asset.replace_case_mode(case_mode);
    }
}

impl Renamable for Column {
    fn rename(&mut self, name: String) {
        self.asset.set_name(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_null() {
        let column = Column::new("id", "INT").not_null();
        assert!(!column.is_nullable());
    }

    #[test]
    fn test_data_type_is_not_folded() {
        let mut column = Column::new("Id", "VarChar(20)");
        column.set_case_mode(CaseMode::Upper).unwrap();
        assert_eq!(column.name(), "ID");
        assert_eq!(column.data_type(), "VarChar(20)");
    }

    #[test]
    fn test_rename_keeps_attributes() {
        let mut column = Column::new("mail", "TEXT").not_null();
        column.rename("email".to_owned());
        assert_eq!(column.name(), "email");
        assert_eq!(column.data_type(), "TEXT");
        assert!(!column.is_nullable());
    }
}
