//! Submodule providing traits for describing named schema assets.

pub mod asset;
pub use asset::AssetLike;
mod renamable;
pub(crate) use renamable::Renamable;
