//! Conversion of `sqlparser` object names into asset names.

use sqlparser::ast::{ObjectName, ObjectNamePart, ObjectNamePartFunction};

/// Returns the parts of the provided `ObjectName` joined by `.`.
///
/// Quoting is not preserved: the value of every part is used verbatim.
///
/// # Arguments
///
/// * `object_name` - The `ObjectName` to convert.
///
/// # Examples
///
/// ```
/// use schema_assets::utils::object_name_to_string;
/// use sqlparser::ast::{Ident, ObjectName, ObjectNamePart};
///
/// let object_name = ObjectName(vec![
///     ObjectNamePart::Identifier(Ident::new("public")),
///     ObjectNamePart::Identifier(Ident::with_quote('"', "Users")),
/// ]);
/// assert_eq!(object_name_to_string(&object_name), "public.Users");
/// ```
#[must_use]
pub fn object_name_to_string(object_name: &ObjectName) -> String {
    object_name
        .0
        .iter()
        .map(|part| match part {
            ObjectNamePart::Identifier(ident) => ident.value.as_str(),
            ObjectNamePart::Function(ObjectNamePartFunction { name, .. }) => name.value.as_str(),
        })
        .collect::<Vec<_>>()
        .join(".")
}
