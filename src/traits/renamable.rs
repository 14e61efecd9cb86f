//! Submodule providing the crate-private capability to rename assets.
//!
//! Renaming is kept out of the public API so that containers such as
//! [`Schema`](crate::structs::Schema) and [`Table`](crate::structs::Table)
//! can keep their lookups and references consistent with the new name.

use crate::traits::AssetLike;

/// Capability to overwrite the stored name of an asset.
pub(crate) trait Renamable: AssetLike {
    /// Stores `name` verbatim as the new name of the asset.
    fn rename(&mut self, name: String);
}
