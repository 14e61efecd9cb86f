//! Case-insensitive comparison of identifiers.

/// Returns whether two identifiers designate the same asset.
///
/// Two names match when they fold to the same identifier under either the
/// lower or the upper case mode, so that a lookup does not depend on the
/// case mode the name is read with.
///
/// # Examples
///
/// ```
/// use schema_assets::utils::identifiers_match;
///
/// assert!(identifiers_match("Users", "USERS"));
/// assert!(identifiers_match("Ärger", "ÄRGER"));
/// assert!(identifiers_match("straße", "STRASSE"));
/// assert!(!identifiers_match("users", "user"));
/// ```
#[must_use]
pub fn identifiers_match(left: &str, right: &str) -> bool {
    left == right
        || left.to_lowercase() == right.to_lowercase()
        || left.to_uppercase() == right.to_uppercase()
}
