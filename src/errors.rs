//! Error enumeration used in the `schema_assets` crate.

use std::convert::Infallible;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Defines the `Error` enum representing various error types
pub enum Error {
    #[error("Invalid case mode `{case_mode}`: expected one of `upper`, `lower` or `keep`.")]
    /// A case mode outside of the recognized set was provided.
    InvalidCaseMode {
        /// The offending case mode value.
        case_mode: String,
    },
    #[error("Cannot generate an identifier with postfix `{postfix}` from an empty list of column names.")]
    /// Identifier generation was requested without any column name.
    EmptyIdentifierColumns {
        /// The postfix (or prefix) the identifier was requested with.
        postfix: String,
    },
    #[error("Column `{column_name}` already exists in table `{table_name}`.")]
    /// A column with the same (case-insensitive) name already exists.
    ColumnAlreadyExists {
        /// Name of the duplicated column.
        column_name: String,
        /// Name of the table owning the column.
        table_name: String,
    },
    #[error("Unknown column `{column_name}` in table `{table_name}`.")]
    /// An operation referenced a column which does not exist in the table.
    UnknownColumn {
        /// Name of the unknown column.
        column_name: String,
        /// Name of the table the column was looked up in.
        table_name: String,
    },
    #[error("Cannot drop column `{column_name}`: still referenced in table `{table_name}`.")]
    /// Error indicating that a column is still used by an index of its table
    /// or by a foreign key of the schema.
    ColumnReferenced {
        /// Name of the column being dropped.
        column_name: String,
        /// Name of the table owning the column.
        table_name: String,
    },
    #[error("Index `{index_name}` already exists in table `{table_name}`.")]
    /// An index with the same (case-insensitive) name already exists.
    IndexAlreadyExists {
        /// Name of the duplicated index.
        index_name: String,
        /// Name of the table owning the index.
        table_name: String,
    },
    #[error("Index `{index_name}` not found in table `{table_name}`.")]
    /// Error indicating that an index does not exist in the table.
    IndexNotFound {
        /// Name of the index that was not found.
        index_name: String,
        /// Name of the table the index was looked up in.
        table_name: String,
    },
    #[error("Invalid index `{index_name}`: {reason}")]
    /// Error indicating that an index definition is invalid.
    InvalidIndex {
        /// Name of the invalid index.
        index_name: String,
        /// Reason why the index is invalid.
        reason: String,
    },
    #[error("Table `{table_name}` already has a primary key.")]
    /// Error indicating that a second primary key was requested.
    PrimaryKeyAlreadyExists {
        /// Name of the table owning the primary key.
        table_name: String,
    },
    #[error("Foreign key `{foreign_key_name}` already exists in table `{table_name}`.")]
    /// A foreign key with the same (case-insensitive) name already exists.
    ForeignKeyAlreadyExists {
        /// Name of the duplicated foreign key.
        foreign_key_name: String,
        /// Name of the table owning the foreign key.
        table_name: String,
    },
    #[error(
        "Foreign key `{foreign_key_name}` has {local_columns} local columns but {foreign_columns} referenced columns."
    )]
    /// Error indicating that the local and referenced column lists of a
    /// foreign key differ in length.
    ForeignKeyArityMismatch {
        /// Name of the foreign key.
        foreign_key_name: String,
        /// Number of local columns.
        local_columns: usize,
        /// Number of referenced columns.
        foreign_columns: usize,
    },
    #[error(
        "Referenced table `{referenced_table}` not found for foreign key in table `{host_table}`."
    )]
    /// Error indicating that a foreign key references a table that does not
    /// exist.
    ReferencedTableNotFoundForForeignKey {
        /// Name of the referenced table.
        referenced_table: String,
        /// Name of the host table containing the foreign key.
        host_table: String,
    },
    #[error(
        "Referenced column `{referenced_column}` not found in table `{referenced_table}` for foreign key in table `{host_table}`."
    )]
    /// Error indicating that a foreign key references a column that does not
    /// exist.
    ReferencedColumnNotFoundForForeignKey {
        /// Name of the referenced column.
        referenced_column: String,
        /// Name of the referenced table.
        referenced_table: String,
        /// Name of the host table containing the foreign key.
        host_table: String,
    },
    #[error("Host column `{host_column}` not found in table `{host_table}` for foreign key.")]
    /// Error indicating that a foreign key references a host column that does
    /// not exist.
    HostColumnNotFoundForForeignKey {
        /// Name of the host column.
        host_column: String,
        /// Name of the host table containing the foreign key.
        host_table: String,
    },
    #[error("Table `{table_name}` already exists.")]
    /// Error indicating that a table with the same (case-insensitive) name
    /// already exists in the schema.
    TableAlreadyExists {
        /// Name of the table that already exists.
        table_name: String,
    },
    #[error("Table `{table_name}` not found.")]
    /// Error indicating that a table does not exist in the schema.
    TableNotFound {
        /// Name of the table that was not found.
        table_name: String,
    },
    #[error("Table `{table_name}` not found for DROP TABLE statement.")]
    /// Error indicating that a dropped table does not exist.
    DropTableNotFound {
        /// Name of the table that was not found.
        table_name: String,
    },
    #[error("Cannot drop table `{table_name}`: still referenced in the schema.")]
    /// Error indicating that a dropped table is still referenced by foreign
    /// keys from other tables.
    TableReferenced {
        /// Name of the table being dropped.
        table_name: String,
    },
    #[error("Table `{table_name}` not found for RENAME TABLE statement.")]
    /// Error indicating that a renamed table does not exist.
    RenameTableNotFound {
        /// Name of the table that was not found.
        table_name: String,
    },
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
