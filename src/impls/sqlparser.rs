//! Submodule providing conversions from the `sqlparser` AST into schema
//! assets.

mod column_def;
mod create_table;
