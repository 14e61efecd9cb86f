//! Submodule defining the `Index` asset.

use crate::{
    structs::{CaseMode, SchemaAsset},
    traits::{AssetLike, Renamable},
    utils::identifiers_match,
};

/// An index over an ordered list of columns of a table.
///
/// Column names are stored verbatim and folded according to the case mode of
/// the index when read.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index {
    /// The named asset of the index.
    asset: SchemaAsset,
    /// The indexed columns, in order.
    columns: Vec<String>,
    /// Whether the index enforces uniqueness.
    unique: bool,
    /// Whether the index is the primary key of its table.
    primary: bool,
}

impl Index {
    /// Creates a new, non-unique index over the provided columns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let index = Index::new("users_email_idx", ["email"]);
    /// assert_eq!(index.columns(), vec!["email"]);
    /// assert!(!index.is_unique());
    /// assert!(!index.is_primary());
    /// ```
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            asset: SchemaAsset::new(name),
            columns: columns.into_iter().map(Into::into).collect(),
            unique: false,
            primary: false,
        }
    }

    /// Marks the index as unique.
    #[must_use]
    #[inline]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Marks the index as primary, which implies uniqueness.
    #[must_use]
    #[inline]
    pub fn primary(mut self) -> Self {
        self.unique = true;
        self.primary = true;
        self
    }

    /// Returns the indexed columns, folded according to the case mode.
    #[must_use]
    pub fn columns(&self) -> Vec<String> {
        self.fold_identifiers(&self.columns)
    }

    /// Returns whether the index enforces uniqueness.
    #[must_use]
    #[inline]
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Returns whether the index is a primary key.
    #[must_use]
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Returns whether the index covers exactly the provided columns, in the
    /// same order. Names are compared case-insensitively.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let index = Index::new("idx", ["user_id", "role_id"]);
    /// assert!(index.spans_columns(&["USER_ID", "role_id"]));
    /// assert!(!index.spans_columns(&["role_id", "user_id"]));
    /// assert!(!index.spans_columns(&["user_id"]));
    /// ```
    #[must_use]
    pub fn spans_columns<S: AsRef<str>>(&self, columns: &[S]) -> bool {
        self.columns.len() == columns.len()
            && self
                .columns
                .iter()
                .zip(columns)
                .all(|(own, other)| identifiers_match(own, other.as_ref()))
    }

    /// Returns whether the index covers the provided column.
    #[must_use]
    pub fn has_column(&self, column_name: &str) -> bool {
        self.columns.iter().any(|column| identifiers_match(column, column_name))
    }

    /// Replaces every occurrence of `old` among the indexed columns with
    /// `new`.
    pub(crate) fn rename_column(&mut self, old: &str, new: &str) {
        for column in &mut self.columns {
            if identifiers_match(column, old) {
                new.clone_into(column);
            }
        }
    }
}

impl AssetLike for Index {
    #[inline]
    fn asset(&self) -> &SchemaAsset {
        &self.asset
    }

    #[inline]
    fn replace_case_mode(&mut self, case_mode: CaseMode) {
        self.asset.replace_case_mode(case_mode);
    }
}

impl Renamable for Index {
    fn rename(&mut self, name: String) {
        self.asset.set_name(name);
    }
}
