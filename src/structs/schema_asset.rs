//! Submodule defining the named asset shared by every schema object.

use crate::{
    structs::CaseMode,
    traits::{AssetLike, Renamable},
};

/// A named schema asset: a canonical name plus the case-folding policy
/// applied whenever the name is read.
///
/// Concrete schema objects embed a `SchemaAsset` and expose it through
/// [`AssetLike`]. The stored name can only be replaced from within the crate,
/// by the rename operations of [`Table`](crate::structs::Table) and
/// [`Schema`](crate::structs::Schema).
///
/// # Example
///
/// ```rust
/// use schema_assets::prelude::*;
///
/// let mut asset = SchemaAsset::new("Users");
/// asset.set_case_mode(CaseMode::Upper).unwrap();
/// assert_eq!(asset.name(), "USERS");
/// asset.set_case_mode(CaseMode::Keep).unwrap();
/// assert_eq!(asset.name(), "Users");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SchemaAsset {
    /// The canonical, unfolded name.
    name: String,
    /// The folding policy applied on read.
    case_mode: CaseMode,
}

impl SchemaAsset {
    /// Creates a new asset with the given name and the `Keep` case mode.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), case_mode: CaseMode::Keep }
    }

    /// Creates a new asset with the given name and case mode.
    #[must_use]
    pub fn with_case_mode(name: impl Into<String>, case_mode: CaseMode) -> Self {
        Self { name: name.into(), case_mode }
    }

    /// Stores the provided name verbatim, without validation or folding.
    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the name exactly as stored.
    #[inline]
    pub(crate) fn stored_name(&self) -> &str {
        &self.name
    }
}

impl AssetLike for SchemaAsset {
    #[inline]
    fn asset(&self) -> &SchemaAsset {
        self
    }

    #[inline]
    fn replace_case_mode(&mut self, case_mode: CaseMode) {
        self.case_mode = case_mode;
    }

    #[inline]
    fn case_mode(&self) -> CaseMode {
        self.case_mode
    }
}

impl Renamable for SchemaAsset {
    fn rename(&mut self, name: String) {
        self.set_name(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_name_is_verbatim() {
        let mut asset = SchemaAsset::with_case_mode("users", CaseMode::Keep);
        asset.set_name("  Mixed_Case Name ");
        assert_eq!(asset.stored_name(), "  Mixed_Case Name ");
        assert_eq!(asset.name(), "  Mixed_Case Name ");
    }

    #[test]
    fn test_set_name_keeps_case_mode() {
        let mut asset = SchemaAsset::with_case_mode("users", CaseMode::Upper);
        asset.rename("accounts".to_owned());
        assert_eq!(asset.name(), "ACCOUNTS");
        assert_eq!(asset.stored_name(), "accounts");
    }

    #[test]
    fn test_case_mode_changes_do_not_touch_stored_name() {
        let mut asset = SchemaAsset::new("Users");
        for mode in CaseMode::ALL {
            asset.set_case_mode(mode).unwrap();
            assert_eq!(asset.stored_name(), "Users");
        }
    }

    #[test]
    fn test_default_asset() {
        let asset = SchemaAsset::default();
        assert_eq!(asset.name(), "");
        assert_eq!(asset.case_mode(), CaseMode::Keep);
    }
}
