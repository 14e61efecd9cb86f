//! Submodule defining the `Table` asset.

use crate::{
    errors::Error,
    structs::{CaseMode, Column, ForeignKey, Index, NamingConfig, SchemaAsset},
    traits::{AssetLike, Renamable},
    utils::identifiers_match,
};

/// Name given to primary key indexes.
pub const PRIMARY_KEY_NAME: &str = "primary";

/// A table owning columns, indexes and foreign keys.
///
/// Child assets are looked up case-insensitively and follow the case mode of
/// the table: setting the case mode of the table propagates it to every
/// column, index and foreign key. Indexes and foreign keys created without an
/// explicit name get one generated from the table and column names, bounded
/// by the [`NamingConfig`] of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// The named asset of the table.
    asset: SchemaAsset,
    /// The naming configuration of the table.
    config: NamingConfig,
    /// The columns of the table, in order.
    columns: Vec<Column>,
    /// The indexes of the table, including the primary key.
    indexes: Vec<Index>,
    /// The foreign keys of the table.
    foreign_keys: Vec<ForeignKey>,
}

impl Table {
    /// Creates a new table with the default naming configuration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, NamingConfig::default())
    }

    /// Creates a new table with the provided naming configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let table = Table::with_config("Users", NamingConfig::default().case_mode(CaseMode::Lower));
    /// assert_eq!(table.name(), "users");
    /// ```
    #[must_use]
    pub fn with_config(name: impl Into<String>, config: NamingConfig) -> Self {
        Self {
            asset: SchemaAsset::with_case_mode(name, config.get_case_mode()),
            config,
            columns: Vec::new(),
            indexes: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    /// Returns the naming configuration of the table.
    ///
    /// Its case mode follows the case mode of the table.
    #[must_use]
    #[inline]
    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    fn table_name(&self) -> String {
        self.asset.stored_name().to_owned()
    }

    /// Adds a column to the table.
    ///
    /// The column adopts the case mode of the table.
    ///
    /// # Errors
    ///
    /// * [`Error::ColumnAlreadyExists`] if a column with the same name exists.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let mut table = Table::new("users");
    /// table.add_column(Column::new("id", "INT")).unwrap();
    /// assert!(table.has_column("ID"));
    /// assert!(table.add_column(Column::new("Id", "BIGINT")).is_err());
    /// ```
    pub fn add_column(&mut self, mut column: Column) -> Result<&mut Column, Error> {
        if self.has_column(column.asset().stored_name()) {
            return Err(Error::ColumnAlreadyExists {
                column_name: column.asset().stored_name().to_owned(),
                table_name: self.table_name(),
            });
        }
        column.replace_case_mode(self.case_mode());
        self.columns.push(column);
        let last = self.columns.len() - 1;
        Ok(&mut self.columns[last])
    }

    /// Returns the column with the provided name, if any.
    #[must_use]
    pub fn column(&self, column_name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| identifiers_match(column.asset().stored_name(), column_name))
    }

    /// Returns whether the table has a column with the provided name.
    #[must_use]
    pub fn has_column(&self, column_name: &str) -> bool {
        self.column(column_name).is_some()
    }

    /// Returns an iterator over the columns of the table, in order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Removes a column from the table.
    ///
    /// # Errors
    ///
    /// * [`Error::UnknownColumn`] if the column does not exist.
    /// * [`Error::ColumnReferenced`] if an index or a foreign key of the table
    ///   still uses the column, either as a local column or as the referenced
    ///   column of a self-referencing foreign key.
    ///
    /// Foreign keys of other tables are not checked: use
    /// [`Schema::drop_column`](crate::structs::Schema::drop_column) to reject
    /// columns they still reference.
    pub fn drop_column(&mut self, column_name: &str) -> Result<Column, Error> {
        let position = self.column_position(column_name)?;
        let table_name = self.asset.stored_name();
        if self.indexes.iter().any(|index| index.has_column(column_name))
            || self.foreign_keys.iter().any(|foreign_key| {
                foreign_key.has_local_column(column_name)
                    || foreign_key.references_column(table_name, column_name)
            })
        {
            return Err(Error::ColumnReferenced {
                column_name: column_name.to_owned(),
                table_name: self.table_name(),
            });
        }
        log::debug!("Dropping column `{column_name}` from table `{}`", self.asset.stored_name());
        Ok(self.columns.remove(position))
    }

    /// Renames a column, updating the indexes and foreign keys of the table
    /// which use it, including the referenced columns of self-referencing
    /// foreign keys.
    ///
    /// Foreign keys of other tables referencing the column are not updated:
    /// use [`Schema::rename_column`](crate::structs::Schema::rename_column)
    /// to keep them consistent.
    ///
    /// # Errors
    ///
    /// * [`Error::UnknownColumn`] if the column does not exist.
    /// * [`Error::ColumnAlreadyExists`] if another column already has the new
    ///   name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let mut table = Table::new("users");
    /// table.add_column(Column::new("mail", "TEXT")).unwrap();
    /// table.add_index(["mail"], None).unwrap();
    /// table.rename_column("mail", "email").unwrap();
    ///
    /// assert!(table.has_column("email"));
    /// assert_eq!(table.index("users_mail_idx").unwrap().columns(), vec!["email"]);
    /// ```
    pub fn rename_column(&mut self, old_name: &str, new_name: &str) -> Result<(), Error> {
        let position = self.column_position(old_name)?;
        let is_self = identifiers_match(old_name, new_name);
        if !is_self && self.has_column(new_name) {
            return Err(Error::ColumnAlreadyExists {
                column_name: new_name.to_owned(),
                table_name: self.table_name(),
            });
        }
        log::debug!(
            "Renaming column `{old_name}` to `{new_name}` in table `{}`",
            self.asset.stored_name()
        );
        self.columns[position].rename(new_name.to_owned());
        for index in &mut self.indexes {
            index.rename_column(old_name, new_name);
        }
        for foreign_key in &mut self.foreign_keys {
            foreign_key.rename_local_column(old_name, new_name);
        }
        let table_name = self.table_name();
        self.rename_foreign_columns(&table_name, old_name, new_name);
        Ok(())
    }

    fn column_position(&self, column_name: &str) -> Result<usize, Error> {
        self.columns
            .iter()
            .position(|column| identifiers_match(column.asset().stored_name(), column_name))
            .ok_or_else(|| Error::UnknownColumn {
                column_name: column_name.to_owned(),
                table_name: self.table_name(),
            })
    }

    fn check_columns<S: AsRef<str>>(&self, columns: &[S]) -> Result<(), Error> {
        for column in columns {
            self.column_position(column.as_ref())?;
        }
        Ok(())
    }

    /// Generates a name from the table name followed by the provided
    /// columns.
    fn generate_name<S: AsRef<str>>(&self, columns: &[S], affix: &str) -> Result<String, Error> {
        let names = std::iter::once(self.asset.stored_name())
            .chain(columns.iter().map(|column| column.as_ref()));
        self.config.generate_identifier_name(names, affix)
    }

    /// Adds a non-unique index over the provided columns.
    ///
    /// When `name` is `None` the index is named after the table and the
    /// columns, with the `idx` postfix.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidIndex`] if no column is provided.
    /// * [`Error::UnknownColumn`] if a column does not exist.
    /// * [`Error::IndexAlreadyExists`] if an index with the same name exists.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let mut table = Table::new("users");
    /// table.add_column(Column::new("email", "TEXT")).unwrap();
    /// let index = table.add_index(["email"], None).unwrap();
    /// assert_eq!(index.name(), "users_email_idx");
    /// ```
    pub fn add_index<I, S>(&mut self, columns: I, name: Option<&str>) -> Result<&Index, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert_index(columns, name, "idx", false)
    }

    /// Adds a unique index over the provided columns.
    ///
    /// When `name` is `None` the index is named after the table and the
    /// columns, with the `uniq` postfix.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidIndex`] if no column is provided.
    /// * [`Error::UnknownColumn`] if a column does not exist.
    /// * [`Error::IndexAlreadyExists`] if an index with the same name exists.
    pub fn add_unique_index<I, S>(
        &mut self,
        columns: I,
        name: Option<&str>,
    ) -> Result<&Index, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert_index(columns, name, "uniq", true)
    }

    fn insert_index<I, S>(
        &mut self,
        columns: I,
        name: Option<&str>,
        postfix: &str,
        unique: bool,
    ) -> Result<&Index, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns: Vec<S> = columns.into_iter().collect();
        let name = match name {
            Some(name) => name.to_owned(),
            None if columns.is_empty() => postfix.to_owned(),
            None => self.generate_name(&columns, postfix)?,
        };
        if columns.is_empty() {
            return Err(Error::InvalidIndex {
                index_name: name,
                reason: "an index must cover at least one column".to_owned(),
            });
        }
        self.check_columns(&columns)?;
        let mut index = Index::new(name, columns.iter().map(|column| column.as_ref().to_owned()));
        if unique {
            index = index.unique();
        }
        self.push_index(index)
    }

    fn push_index(&mut self, mut index: Index) -> Result<&Index, Error> {
        if self.has_index(index.asset().stored_name()) {
            return Err(Error::IndexAlreadyExists {
                index_name: index.asset().stored_name().to_owned(),
                table_name: self.table_name(),
            });
        }
        index.replace_case_mode(self.case_mode());
        self.indexes.push(index);
        let last = self.indexes.len() - 1;
        Ok(&self.indexes[last])
    }

    /// Sets the primary key of the table.
    ///
    /// The primary key is a unique index named [`PRIMARY_KEY_NAME`], and its
    /// columns become non-nullable.
    ///
    /// # Errors
    ///
    /// * [`Error::PrimaryKeyAlreadyExists`] if the table already has one.
    /// * [`Error::InvalidIndex`] if no column is provided.
    /// * [`Error::UnknownColumn`] if a column does not exist.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let mut table = Table::new("users");
    /// table.add_column(Column::new("id", "INT")).unwrap();
    /// table.set_primary_key(["id"]).unwrap();
    ///
    /// assert!(table.primary_key().unwrap().is_primary());
    /// assert!(!table.column("id").unwrap().is_nullable());
    /// ```
    pub fn set_primary_key<I, S>(&mut self, columns: I) -> Result<&Index, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.primary_key().is_some() {
            return Err(Error::PrimaryKeyAlreadyExists { table_name: self.table_name() });
        }
        let columns: Vec<S> = columns.into_iter().collect();
        if columns.is_empty() {
            return Err(Error::InvalidIndex {
                index_name: PRIMARY_KEY_NAME.to_owned(),
                reason: "a primary key must cover at least one column".to_owned(),
            });
        }
        self.check_columns(&columns)?;
        for column in &mut self.columns {
            let stored_name = column.asset().stored_name();
            if columns.iter().any(|name| identifiers_match(stored_name, name.as_ref())) {
                column.set_nullable(false);
            }
        }
        let index =
            Index::new(PRIMARY_KEY_NAME, columns.iter().map(|column| column.as_ref().to_owned()))
                .primary();
        self.push_index(index)
    }

    /// Returns the primary key of the table, if any.
    #[must_use]
    pub fn primary_key(&self) -> Option<&Index> {
        self.indexes.iter().find(|index| index.is_primary())
    }

    /// Returns the index with the provided name, if any.
    #[must_use]
    pub fn index(&self, index_name: &str) -> Option<&Index> {
        self.indexes.iter().find(|index| identifiers_match(index.asset().stored_name(), index_name))
    }

    /// Returns whether the table has an index with the provided name.
    #[must_use]
    pub fn has_index(&self, index_name: &str) -> bool {
        self.index(index_name).is_some()
    }

    /// Returns an iterator over the indexes of the table, primary key
    /// included.
    pub fn indexes(&self) -> impl Iterator<Item = &Index> {
        self.indexes.iter()
    }

    fn index_position(&self, index_name: &str) -> Result<usize, Error> {
        self.indexes
            .iter()
            .position(|index| identifiers_match(index.asset().stored_name(), index_name))
            .ok_or_else(|| Error::IndexNotFound {
                index_name: index_name.to_owned(),
                table_name: self.table_name(),
            })
    }

    /// Removes an index from the table.
    ///
    /// # Errors
    ///
    /// * [`Error::IndexNotFound`] if the index does not exist.
    pub fn drop_index(&mut self, index_name: &str) -> Result<Index, Error> {
        let position = self.index_position(index_name)?;
        log::debug!("Dropping index `{index_name}` from table `{}`", self.asset.stored_name());
        Ok(self.indexes.remove(position))
    }

    /// Renames an index.
    ///
    /// # Errors
    ///
    /// * [`Error::IndexNotFound`] if the index does not exist.
    /// * [`Error::IndexAlreadyExists`] if another index already has the new
    ///   name.
    pub fn rename_index(&mut self, old_name: &str, new_name: &str) -> Result<(), Error> {
        let position = self.index_position(old_name)?;
        if !identifiers_match(old_name, new_name) && self.has_index(new_name) {
            return Err(Error::IndexAlreadyExists {
                index_name: new_name.to_owned(),
                table_name: self.table_name(),
            });
        }
        log::debug!(
            "Renaming index `{old_name}` to `{new_name}` in table `{}`",
            self.asset.stored_name()
        );
        self.indexes[position].rename(new_name.to_owned());
        Ok(())
    }

    /// Adds a foreign key from local columns of this table to columns of the
    /// referenced table.
    ///
    /// When `name` is `None` the foreign key is named after the table and the
    /// local columns, with the `fk` postfix.
    ///
    /// # Errors
    ///
    /// * [`Error::ReferencedColumnNotFoundForForeignKey`] if a referenced
    ///   column does not exist in `foreign_table`.
    /// * [`Error::HostColumnNotFoundForForeignKey`] if a local column does not
    ///   exist.
    /// * [`Error::ForeignKeyArityMismatch`] if the column lists differ in
    ///   length.
    /// * [`Error::ForeignKeyAlreadyExists`] if a foreign key with the same
    ///   name exists.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let mut users = Table::new("users");
    /// users.add_column(Column::new("id", "INT")).unwrap();
    ///
    /// let mut posts = Table::new("posts");
    /// posts.add_column(Column::new("user_id", "INT")).unwrap();
    /// let foreign_key = posts.add_foreign_key(&users, ["user_id"], ["id"], None).unwrap();
    ///
    /// assert_eq!(foreign_key.name(), "posts_user_id_fk");
    /// assert_eq!(foreign_key.foreign_table_name(), "users");
    /// ```
    pub fn add_foreign_key<L, F, S, T>(
        &mut self,
        foreign_table: &Table,
        local_columns: L,
        foreign_columns: F,
        name: Option<&str>,
    ) -> Result<&ForeignKey, Error>
    where
        L: IntoIterator<Item = S>,
        F: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let foreign_columns: Vec<T> = foreign_columns.into_iter().collect();
        for column in &foreign_columns {
            if !foreign_table.has_column(column.as_ref()) {
                return Err(Error::ReferencedColumnNotFoundForForeignKey {
                    referenced_column: column.as_ref().to_owned(),
                    referenced_table: foreign_table.table_name(),
                    host_table: self.table_name(),
                });
            }
        }
        self.insert_foreign_key(
            foreign_table.asset.stored_name(),
            local_columns,
            foreign_columns.iter().map(|column| column.as_ref()),
            name,
        )
    }

    /// Adds a foreign key whose referenced columns were already validated.
    pub(crate) fn insert_foreign_key<L, F, S, T>(
        &mut self,
        foreign_table_name: &str,
        local_columns: L,
        foreign_columns: F,
        name: Option<&str>,
    ) -> Result<&ForeignKey, Error>
    where
        L: IntoIterator<Item = S>,
        F: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let local_columns: Vec<S> = local_columns.into_iter().collect();
        for column in &local_columns {
            if !self.has_column(column.as_ref()) {
                return Err(Error::HostColumnNotFoundForForeignKey {
                    host_column: column.as_ref().to_owned(),
                    host_table: self.table_name(),
                });
            }
        }
        let name = match name {
            Some(name) => name.to_owned(),
            None if local_columns.is_empty() => "fk".to_owned(),
            None => self.generate_name(&local_columns, "fk")?,
        };
        let mut foreign_key = ForeignKey::new(
            name,
            local_columns.iter().map(|column| column.as_ref().to_owned()),
            foreign_table_name,
            foreign_columns.into_iter().map(|column| column.as_ref().to_owned()),
        )?;
        if self.foreign_key(foreign_key.asset().stored_name()).is_some() {
            return Err(Error::ForeignKeyAlreadyExists {
                foreign_key_name: foreign_key.asset().stored_name().to_owned(),
                table_name: self.table_name(),
            });
        }
        foreign_key.replace_case_mode(self.case_mode());
        self.foreign_keys.push(foreign_key);
        let last = self.foreign_keys.len() - 1;
        Ok(&self.foreign_keys[last])
    }

    /// Returns the foreign key with the provided name, if any.
    #[must_use]
    pub fn foreign_key(&self, foreign_key_name: &str) -> Option<&ForeignKey> {
        self.foreign_keys
            .iter()
            .find(|foreign_key| {
                identifiers_match(foreign_key.asset().stored_name(), foreign_key_name)
            })
    }

    /// Returns an iterator over the foreign keys of the table.
    pub fn foreign_keys(&self) -> impl Iterator<Item = &ForeignKey> {
        self.foreign_keys.iter()
    }

    /// Returns whether a foreign key of the table points at the provided
    /// table.
    #[must_use]
    pub fn references_table(&self, table_name: &str) -> bool {
        self.foreign_keys.iter().any(|foreign_key| foreign_key.references_table(table_name))
    }

    /// Points the foreign keys referencing `old_table` at `new_table`.
    pub(crate) fn retarget_foreign_keys(&mut self, old_table: &str, new_table: &str) {
        for foreign_key in &mut self.foreign_keys {
            if foreign_key.references_table(old_table) {
                foreign_key.retarget(new_table);
            }
        }
    }

    /// Renames a referenced column in the foreign keys pointing at
    /// `foreign_table`.
    pub(crate) fn rename_foreign_columns(&mut self, foreign_table: &str, old: &str, new: &str) {
        for foreign_key in &mut self.foreign_keys {
            if foreign_key.references_table(foreign_table) {
                foreign_key.rename_foreign_column(old, new);
            }
        }
    }
}

impl AssetLike for Table {
    #[inline]
    fn asset(&self) -> &SchemaAsset {
        &self.asset
    }

    fn replace_case_mode(&mut self, case_mode: CaseMode) {
        self.asset.replace_case_mode(case_mode);
        self.config = self.config.case_mode(case_mode);
        for column in &mut self.columns {
            column.replace_case_mode(case_mode);
        }
        for index in &mut self.indexes {
            index.replace_case_mode(case_mode);
        }
        for foreign_key in &mut self.foreign_keys {
            foreign_key.replace_case_mode(case_mode);
        }
    }
}

impl Renamable for Table {
    fn rename(&mut self, name: String) {
        self.asset.set_name(name);
    }
}
