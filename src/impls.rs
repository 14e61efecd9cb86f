//! Submodule providing conversions from third-party types into schema
//! assets.

mod sqlparser;
