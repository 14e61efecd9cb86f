//! Submodule providing utilities for naming schema assets.

mod generate_identifier_name;
pub use generate_identifier_name::{DEFAULT_MAX_IDENTIFIER_LENGTH, generate_identifier_name};
mod hashed_identifier_name;
pub use hashed_identifier_name::hashed_identifier_name;
mod identifiers_match;
pub use identifiers_match::identifiers_match;
mod object_name;
pub use object_name::object_name_to_string;
