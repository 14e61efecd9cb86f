//! Submodule converting `sqlparser`'s [`CreateTable`] into a [`Table`].

use sqlparser::ast::CreateTable;

use crate::{
    errors::Error,
    structs::{Column, Table},
    utils::object_name_to_string,
};

impl TryFrom<&CreateTable> for Table {
    type Error = Error;

    fn try_from(create_table: &CreateTable) -> Result<Self, Self::Error> {
        let mut table = Table::new(object_name_to_string(&create_table.name));
        for column_def in &create_table.columns {
            table.add_column(Column::from(column_def))?;
        }
        Ok(table)
    }
}
