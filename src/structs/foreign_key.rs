//! Submodule defining the `ForeignKey` asset.

use crate::{
    errors::Error,
    structs::{CaseMode, SchemaAsset},
    traits::{AssetLike, Renamable},
    utils::identifiers_match,
};

/// A foreign key constraint from local columns of a table to columns of a
/// referenced table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForeignKey {
    /// The named asset of the foreign key.
    asset: SchemaAsset,
    /// The columns of the host table, in order.
    local_columns: Vec<String>,
    /// The name of the referenced table.
    foreign_table: String,
    /// The columns of the referenced table, in order.
    foreign_columns: Vec<String>,
}

impl ForeignKey {
    /// Creates a new foreign key.
    ///
    /// # Errors
    ///
    /// * [`Error::ForeignKeyArityMismatch`] if the local and referenced column
    ///   lists differ in length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let foreign_key = ForeignKey::new("posts_user_id_fk", ["user_id"], "users", ["id"]).unwrap();
    /// assert_eq!(foreign_key.local_columns(), vec!["user_id"]);
    /// assert_eq!(foreign_key.foreign_table_name(), "users");
    /// assert_eq!(foreign_key.foreign_columns(), vec!["id"]);
    ///
    /// assert!(ForeignKey::new("broken_fk", ["a", "b"], "users", ["id"]).is_err());
    /// ```
    pub fn new<L, F, S, T>(
        name: impl Into<String>,
        local_columns: L,
        foreign_table: impl Into<String>,
        foreign_columns: F,
    ) -> Result<Self, Error>
    where
        L: IntoIterator<Item = S>,
        F: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let name = name.into();
        let local_columns: Vec<String> = local_columns.into_iter().map(Into::into).collect();
        let foreign_columns: Vec<String> = foreign_columns.into_iter().map(Into::into).collect();
        if local_columns.len() != foreign_columns.len() {
            return Err(Error::ForeignKeyArityMismatch {
                foreign_key_name: name,
                local_columns: local_columns.len(),
                foreign_columns: foreign_columns.len(),
            });
        }
        Ok(Self {
            asset: SchemaAsset::new(name),
            local_columns,
            foreign_table: foreign_table.into(),
            foreign_columns,
        })
    }

    /// Returns the local columns, folded according to the case mode.
    #[must_use]
    pub fn local_columns(&self) -> Vec<String> {
        self.fold_identifiers(&self.local_columns)
    }

    /// Returns the name of the referenced table, folded according to the
    /// case mode.
    #[must_use]
    pub fn foreign_table_name(&self) -> String {
        self.fold_identifier(&self.foreign_table).into_owned()
    }

    /// Returns the referenced columns, folded according to the case mode.
    #[must_use]
    pub fn foreign_columns(&self) -> Vec<String> {
        self.fold_identifiers(&self.foreign_columns)
    }

    /// Returns whether the foreign key points at the provided table.
    #[must_use]
    pub fn references_table(&self, table_name: &str) -> bool {
        identifiers_match(&self.foreign_table, table_name)
    }

    /// Returns whether the provided column is one of the local columns.
    #[must_use]
    pub fn has_local_column(&self, column_name: &str) -> bool {
        self.local_columns.iter().any(|column| identifiers_match(column, column_name))
    }

    /// Returns whether the foreign key references the provided column of the
    /// provided table.
    #[must_use]
    pub fn references_column(&self, table_name: &str, column_name: &str) -> bool {
        self.references_table(table_name)
            && self.foreign_columns.iter().any(|column| identifiers_match(column, column_name))
    }

    pub(crate) fn retarget(&mut self, foreign_table: &str) {
        foreign_table.clone_into(&mut self.foreign_table);
    }

    pub(crate) fn rename_local_column(&mut self, old: &str, new: &str) {
        rename_in(&mut self.local_columns, old, new);
    }

    pub(crate) fn rename_foreign_column(&mut self, old: &str, new: &str) {
        rename_in(&mut self.foreign_columns, old, new);
    }
}

fn rename_in(columns: &mut [String], old: &str, new: &str) {
    for column in columns {
        if identifiers_match(column, old) {
            new.clone_into(column);
        }
    }
}

impl AssetLike for ForeignKey {
    #[inline]
    fn asset(&self) -> &SchemaAsset {
        &self.asset
    }

    #[inline]
    fn replace_case_mode(&mut self, case_mode: CaseMode) {
        self.asset.replace_case_mode(case_mode);
    }
}

impl Renamable for ForeignKey {
    fn rename(&mut self, name: String) {
        self.asset.set_name(name);
    }
}
