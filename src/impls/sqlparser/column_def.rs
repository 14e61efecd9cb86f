//! Submodule converting `sqlparser`'s [`ColumnDef`] into a [`Column`].

use sqlparser::ast::{ColumnDef, ColumnOption};

use crate::structs::Column;

impl From<&ColumnDef> for Column {
    fn from(column_def: &ColumnDef) -> Self {
        let column = Column::new(column_def.name.value.as_str(), column_def.data_type.to_string());
        if column_def.options.iter().any(|opt| matches!(opt.option, ColumnOption::NotNull)) {
            column.not_null()
        } else {
            column
        }
    }
}
