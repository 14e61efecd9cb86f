//! Submodule defining the `Schema` asset, the container keeping tables and
//! the references between them consistent.

use crate::{
    errors::Error,
    structs::{CaseMode, Column, ForeignKey, NamingConfig, SchemaAsset, Table},
    traits::{AssetLike, Renamable},
    utils::identifiers_match,
};

/// A database schema holding an ordered collection of tables.
///
/// Renaming a table or a column through the schema keeps every foreign key
/// pointing at it consistent, which is why the name of an asset cannot be
/// changed from outside of the crate.
///
/// # Example
///
/// ```rust
/// use schema_assets::prelude::*;
///
/// let mut schema = Schema::new("public");
/// schema.create_table("users").unwrap().add_column(Column::new("id", "INT")).unwrap();
/// let posts = schema.create_table("posts").unwrap();
/// posts.add_column(Column::new("user_id", "INT")).unwrap();
/// schema.add_foreign_key("posts", "users", ["user_id"], ["id"], None).unwrap();
///
/// schema.rename_table("users", "accounts").unwrap();
/// let foreign_key = schema.table("posts").unwrap().foreign_key("posts_user_id_fk").unwrap();
/// assert_eq!(foreign_key.foreign_table_name(), "accounts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// The named asset of the schema.
    asset: SchemaAsset,
    /// The naming configuration given to the tables of the schema.
    config: NamingConfig,
    /// The tables of the schema, in creation order.
    tables: Vec<Table>,
}

impl Schema {
    /// Creates a new empty schema with the default naming configuration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, NamingConfig::default())
    }

    /// Creates a new empty schema with the provided naming configuration.
    #[must_use]
    pub fn with_config(name: impl Into<String>, config: NamingConfig) -> Self {
        Self {
            asset: SchemaAsset::with_case_mode(name, config.get_case_mode()),
            config,
            tables: Vec::new(),
        }
    }

    /// Returns the naming configuration of the schema.
    #[must_use]
    #[inline]
    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Creates a new table in the schema, using the naming configuration of
    /// the schema and its current case mode.
    ///
    /// # Errors
    ///
    /// * [`Error::TableAlreadyExists`] if a table with the same name exists.
    pub fn create_table(&mut self, table_name: impl Into<String>) -> Result<&mut Table, Error> {
        let table = Table::with_config(table_name, self.config.case_mode(self.case_mode()));
        self.add_table(table)
    }

    /// Adds an existing table to the schema. The table adopts the case mode
    /// of the schema.
    ///
    /// # Errors
    ///
    /// * [`Error::TableAlreadyExists`] if a table with the same name exists.
    pub fn add_table(&mut self, mut table: Table) -> Result<&mut Table, Error> {
        if self.has_table(table.asset().stored_name()) {
            return Err(Error::TableAlreadyExists {
                table_name: table.asset().stored_name().to_owned(),
            });
        }
        table.replace_case_mode(self.case_mode());
        self.tables.push(table);
        let last = self.tables.len() - 1;
        Ok(&mut self.tables[last])
    }

    fn table_position(&self, table_name: &str) -> Option<usize> {
        self.tables
            .iter()
            .position(|table| identifiers_match(table.asset().stored_name(), table_name))
    }

    /// Returns the table with the provided name, if any.
    #[must_use]
    pub fn table(&self, table_name: &str) -> Option<&Table> {
        self.table_position(table_name).map(|position| &self.tables[position])
    }

    /// Returns a mutable reference to the table with the provided name, if
    /// any.
    pub fn table_mut(&mut self, table_name: &str) -> Option<&mut Table> {
        self.table_position(table_name).map(|position| &mut self.tables[position])
    }

    /// Returns whether the schema has a table with the provided name.
    #[must_use]
    pub fn has_table(&self, table_name: &str) -> bool {
        self.table_position(table_name).is_some()
    }

    /// Returns an iterator over the tables of the schema.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    /// Removes a table from the schema.
    ///
    /// # Errors
    ///
    /// * [`Error::DropTableNotFound`] if the table does not exist.
    /// * [`Error::TableReferenced`] if a foreign key of another table still
    ///   references it.
    pub fn drop_table(&mut self, table_name: &str) -> Result<Table, Error> {
        let position = self
            .table_position(table_name)
            .ok_or_else(|| Error::DropTableNotFound { table_name: table_name.to_owned() })?;
        let referenced = self
            .tables
            .iter()
            .enumerate()
            .any(|(other, table)| other != position && table.references_table(table_name));
        if referenced {
            return Err(Error::TableReferenced { table_name: table_name.to_owned() });
        }
        log::debug!("Dropping table `{table_name}` from schema `{}`", self.asset.stored_name());
        Ok(self.tables.remove(position))
    }

    /// Renames a table, pointing every foreign key which referenced the old
    /// name at the new one.
    ///
    /// # Errors
    ///
    /// * [`Error::RenameTableNotFound`] if the table does not exist.
    /// * [`Error::TableAlreadyExists`] if another table already has the new
    ///   name.
    pub fn rename_table(&mut self, old_name: &str, new_name: &str) -> Result<(), Error> {
        let position = self
            .table_position(old_name)
            .ok_or_else(|| Error::RenameTableNotFound { table_name: old_name.to_owned() })?;
        if !identifiers_match(old_name, new_name) && self.has_table(new_name) {
            return Err(Error::TableAlreadyExists { table_name: new_name.to_owned() });
        }
        log::debug!(
            "Renaming table `{old_name}` to `{new_name}` in schema `{}`",
            self.asset.stored_name()
        );
        self.tables[position].rename(new_name.to_owned());
        for table in &mut self.tables {
            table.retarget_foreign_keys(old_name, new_name);
        }
        Ok(())
    }

    /// Renames a column of a table, updating the indexes and foreign keys of
    /// the table as well as the foreign keys of every table referencing it.
    ///
    /// # Errors
    ///
    /// * [`Error::TableNotFound`] if the table does not exist.
    /// * [`Error::UnknownColumn`] if the column does not exist.
    /// * [`Error::ColumnAlreadyExists`] if another column already has the new
    ///   name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let mut schema = Schema::new("public");
    /// schema.create_table("users").unwrap().add_column(Column::new("id", "INT")).unwrap();
    /// schema.create_table("posts").unwrap().add_column(Column::new("user_id", "INT")).unwrap();
    /// schema.add_foreign_key("posts", "users", ["user_id"], ["id"], None).unwrap();
    ///
    /// schema.rename_column("users", "id", "user_key").unwrap();
    /// let foreign_key = schema.table("posts").unwrap().foreign_key("posts_user_id_fk").unwrap();
    /// assert_eq!(foreign_key.foreign_columns(), vec!["user_key"]);
    /// ```
    pub fn rename_column(
        &mut self,
        table_name: &str,
        old_name: &str,
        new_name: &str,
    ) -> Result<(), Error> {
        let position = self
            .table_position(table_name)
            .ok_or_else(|| Error::TableNotFound { table_name: table_name.to_owned() })?;
        self.tables[position].rename_column(old_name, new_name)?;
        for table in &mut self.tables {
            table.rename_foreign_columns(table_name, old_name, new_name);
        }
        Ok(())
    }

    /// Removes a column of a table, rejecting it while a foreign key of any
    /// table of the schema still references it.
    ///
    /// # Errors
    ///
    /// * [`Error::TableNotFound`] if the table does not exist.
    /// * [`Error::ColumnReferenced`] if a foreign key of any table references
    ///   the column.
    /// * Any error of [`Table::drop_column`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::{errors::Error, prelude::*};
    ///
    /// let mut schema = Schema::new("public");
    /// schema.create_table("users").unwrap().add_column(Column::new("id", "INT")).unwrap();
    /// schema.create_table("posts").unwrap().add_column(Column::new("user_id", "INT")).unwrap();
    /// schema.add_foreign_key("posts", "users", ["user_id"], ["id"], None).unwrap();
    ///
    /// assert!(matches!(
    ///     schema.drop_column("users", "id"),
    ///     Err(Error::ColumnReferenced { .. })
    /// ));
    /// ```
    pub fn drop_column(&mut self, table_name: &str, column_name: &str) -> Result<Column, Error> {
        let position = self
            .table_position(table_name)
            .ok_or_else(|| Error::TableNotFound { table_name: table_name.to_owned() })?;
        let stored_name = self.tables[position].asset().stored_name();
        let referenced = self.tables.iter().any(|table| {
            table
                .foreign_keys()
                .any(|foreign_key| foreign_key.references_column(stored_name, column_name))
        });
        if referenced {
            return Err(Error::ColumnReferenced {
                column_name: column_name.to_owned(),
                table_name: stored_name.to_owned(),
            });
        }
        self.tables[position].drop_column(column_name)
    }

    /// Adds a foreign key to the `host` table, referencing columns of the
    /// `referenced` table. Both tables may be the same.
    ///
    /// # Errors
    ///
    /// * [`Error::ReferencedTableNotFoundForForeignKey`] if the referenced
    ///   table does not exist.
    /// * [`Error::TableNotFound`] if the host table does not exist.
    /// * Any error of [`Table::add_foreign_key`].
    pub fn add_foreign_key<L, F, S, T>(
        &mut self,
        host: &str,
        referenced: &str,
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
        let Some(referenced_position) = self.table_position(referenced) else {
            return Err(Error::ReferencedTableNotFoundForForeignKey {
                referenced_table: referenced.to_owned(),
                host_table: host.to_owned(),
            });
        };
        let host_position = self
            .table_position(host)
            .ok_or_else(|| Error::TableNotFound { table_name: host.to_owned() })?;

        let referenced_table = &self.tables[referenced_position];
        let foreign_columns: Vec<T> = foreign_columns.into_iter().collect();
        for column in &foreign_columns {
            if !referenced_table.has_column(column.as_ref()) {
                return Err(Error::ReferencedColumnNotFoundForForeignKey {
                    referenced_column: column.as_ref().to_owned(),
                    referenced_table: referenced_table.asset().stored_name().to_owned(),
                    host_table: host.to_owned(),
                });
            }
        }
        let referenced_name = referenced_table.asset().stored_name().to_owned();

        self.tables[host_position].insert_foreign_key(
            &referenced_name,
            local_columns,
            foreign_columns.iter().map(|column| column.as_ref()),
            name,
        )
    }
}

impl AssetLike for Schema {
    #[inline]
    fn asset(&self) -> &SchemaAsset {
        &self.asset
    }

    fn replace_case_mode(&mut self, case_mode: CaseMode) {
        self.asset.replace_case_mode(case_mode);
        self.config = self.config.case_mode(case_mode);
        for table in &mut self.tables {
            table.replace_case_mode(case_mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog() -> Schema {
        let mut schema = Schema::new("blog");
        let users = schema.create_table("users").unwrap();
        users.add_column(Column::new("id", "INT")).unwrap();
        users.set_primary_key(["id"]).unwrap();
        let posts = schema.create_table("posts").unwrap();
        posts.add_column(Column::new("id", "INT")).unwrap();
        posts.add_column(Column::new("user_id", "INT")).unwrap();
        posts.add_column(Column::new("parent_id", "INT")).unwrap();
        schema.add_foreign_key("posts", "users", ["user_id"], ["id"], None).unwrap();
        schema
            .add_foreign_key("posts", "posts", ["parent_id"], ["id"], Some("posts_parent_fk"))
            .unwrap();
        schema
    }

    #[test]
    fn test_duplicate_tables_are_rejected() {
        let mut schema = blog();
        assert_eq!(
            schema.create_table("USERS").unwrap_err(),
            Error::TableAlreadyExists { table_name: "USERS".to_owned() }
        );
        assert!(schema.add_table(Table::new("Posts")).is_err());
        assert_eq!(schema.tables().count(), 2);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut schema = blog();
        assert!(schema.has_table("POSTS"));
        assert!(schema.table_mut("Users").is_some());
        assert!(schema.table("comments").is_none());
    }

    #[test]
    fn test_foreign_key_errors() {
        let mut schema = blog();
        assert_eq!(
            schema.add_foreign_key("posts", "comments", ["user_id"], ["id"], None).unwrap_err(),
            Error::ReferencedTableNotFoundForForeignKey {
                referenced_table: "comments".to_owned(),
                host_table: "posts".to_owned(),
            }
        );
        assert_eq!(
            schema.add_foreign_key("comments", "users", ["user_id"], ["id"], None).unwrap_err(),
            Error::TableNotFound { table_name: "comments".to_owned() }
        );
        assert!(matches!(
            schema.add_foreign_key("posts", "users", ["user_id"], ["email"], Some("other")),
            Err(Error::ReferencedColumnNotFoundForForeignKey { .. })
        ));
    }

    #[test]
    fn test_self_referencing_foreign_key() {
        let schema = blog();
        let posts = schema.table("posts").unwrap();
        let foreign_key = posts.foreign_key("posts_parent_fk").unwrap();
        assert!(foreign_key.references_table("posts"));
        assert_eq!(foreign_key.local_columns(), vec!["parent_id"]);
    }

    #[test]
    fn test_rename_table_retargets_foreign_keys() {
        let mut schema = blog();
        schema.rename_table("posts", "articles").unwrap();
        assert!(!schema.has_table("posts"));
        let articles = schema.table("articles").unwrap();
        assert_eq!(articles.name(), "articles");
        let parent = articles.foreign_key("posts_parent_fk").unwrap();
        assert_eq!(parent.foreign_table_name(), "articles");
        assert_eq!(articles.foreign_key("posts_user_id_fk").unwrap().foreign_table_name(), "users");
    }

    #[test]
    fn test_rename_table_errors() {
        let mut schema = blog();
        assert_eq!(
            schema.rename_table("comments", "notes").unwrap_err(),
            Error::RenameTableNotFound { table_name: "comments".to_owned() }
        );
        assert_eq!(
            schema.rename_table("posts", "Users").unwrap_err(),
            Error::TableAlreadyExists { table_name: "Users".to_owned() }
        );
        schema.rename_table("posts", "Posts").unwrap();
        assert_eq!(schema.table("posts").unwrap().name(), "Posts");
    }

    #[test]
    fn test_rename_column_updates_referencing_tables() {
        let mut schema = blog();
        schema.rename_column("posts", "id", "post_id").unwrap();
        let posts = schema.table("posts").unwrap();
        let parent = posts.foreign_key("posts_parent_fk").unwrap();
        assert_eq!(parent.foreign_columns(), vec!["post_id"]);
        // Foreign keys referencing other tables' `id` columns are untouched.
        assert_eq!(posts.foreign_key("posts_user_id_fk").unwrap().foreign_columns(), vec!["id"]);
        assert!(matches!(
            schema.rename_column("comments", "id", "x"),
            Err(Error::TableNotFound { .. })
        ));
    }

    #[test]
    fn test_drop_table() {
        let mut schema = blog();
        assert_eq!(
            schema.drop_table("users").unwrap_err(),
            Error::TableReferenced { table_name: "users".to_owned() }
        );
        // Self references do not prevent dropping.
        let posts = schema.drop_table("posts").unwrap();
        assert_eq!(posts.name(), "posts");
        schema.drop_table("users").unwrap();
        assert_eq!(
            schema.drop_table("users").unwrap_err(),
            Error::DropTableNotFound { table_name: "users".to_owned() }
        );
    }

    #[test]
    fn test_drop_column_referenced_from_other_tables() {
        let mut schema = blog();
        schema.table_mut("users").unwrap().add_column(Column::new("handle", "TEXT")).unwrap();
        let mentions = schema.create_table("mentions").unwrap();
        mentions.add_column(Column::new("user_handle", "TEXT")).unwrap();
        schema.add_foreign_key("mentions", "users", ["user_handle"], ["handle"], None).unwrap();

        assert_eq!(
            schema.drop_column("Users", "HANDLE").unwrap_err(),
            Error::ColumnReferenced {
                column_name: "HANDLE".to_owned(),
                table_name: "users".to_owned()
            }
        );
        assert!(matches!(
            schema.drop_column("posts", "id"),
            Err(Error::ColumnReferenced { .. })
        ));
        assert!(matches!(
            schema.drop_column("comments", "id"),
            Err(Error::TableNotFound { .. })
        ));

        schema.drop_table("mentions").unwrap();
        let handle = schema.drop_column("users", "handle").unwrap();
        assert_eq!(handle.name(), "handle");
        assert!(!schema.table("users").unwrap().has_column("handle"));
    }

    #[test]
    fn test_rename_column_through_table_keeps_self_reference() {
        let mut schema = blog();
        schema.table_mut("posts").unwrap().rename_column("id", "post_id").unwrap();
        let posts = schema.table("posts").unwrap();
        let parent = posts.foreign_key("posts_parent_fk").unwrap();
        assert_eq!(parent.foreign_columns(), vec!["post_id"]);
    }

    #[test]
    fn test_config_follows_case_mode() {
        let mut schema = blog();
        schema.set_case_mode(CaseMode::Lower).unwrap();
        assert_eq!(schema.config().get_case_mode(), CaseMode::Lower);
        assert_eq!(schema.table("users").unwrap().config().get_case_mode(), CaseMode::Lower);
    }

    #[test]
    fn test_case_mode_cascades_to_tables() {
        let mut schema = blog();
        schema.set_case_mode("upper").unwrap();
        assert_eq!(schema.name(), "BLOG");
        let posts = schema.table("posts").unwrap();
        assert_eq!(posts.name(), "POSTS");
        assert_eq!(posts.foreign_key("posts_user_id_fk").unwrap().foreign_table_name(), "USERS");

        schema.create_table("comments").unwrap();
        assert_eq!(schema.table("comments").unwrap().name(), "COMMENTS");

        assert!(schema.set_case_mode("title").is_err());
        assert_eq!(schema.case_mode(), CaseMode::Upper);
    }

    #[test]
    fn test_config_is_forwarded_to_tables() {
        let config = NamingConfig::default().max_identifier_length(12);
        let mut schema = Schema::with_config("blog", config);
        let table = schema.create_table("users").unwrap();
        table.add_column(Column::new("email", "TEXT")).unwrap();
        // floor((12 - 3) / 2 - 1) = 3
        let index = table.add_index(["email"], None).unwrap();
        assert_eq!(index.name(), "ers_ail_idx");
        assert_eq!(schema.table("users").unwrap().config().get_max_identifier_length(), 12);
    }
}
