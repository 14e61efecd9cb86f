//! Submodule providing the structs representing named schema assets.

mod case_mode;
pub use case_mode::CaseMode;
mod quote_style;
pub use quote_style::QuoteStyle;
mod schema_asset;
pub use schema_asset::SchemaAsset;
mod naming_config;
pub use naming_config::{IdentifierStrategy, NamingConfig};
mod column;
pub use column::Column;
mod index;
pub use index::Index;
mod foreign_key;
pub use foreign_key::ForeignKey;
pub mod table;
pub use table::{PRIMARY_KEY_NAME, Table};
mod schema;
pub use schema::Schema;
