//! Submodule defining the case-folding policy applied when names are read.

use std::{borrow::Cow, fmt::Display, str::FromStr};

use crate::errors::Error;

/// Case-folding policy applied to identifiers when they are read back out of
/// a schema asset.
///
/// Folding is never applied on write: the stored name of an asset keeps the
/// exact spelling it was given, and switching the mode retroactively changes
/// every subsequent read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CaseMode {
    /// Identifiers are read in upper case.
    Upper,
    /// Identifiers are read in lower case.
    Lower,
    /// Identifiers are read exactly as stored.
    #[default]
    Keep,
}

impl CaseMode {
    /// All the recognized case modes.
    pub const ALL: [CaseMode; 3] = [CaseMode::Upper, CaseMode::Lower, CaseMode::Keep];

    /// Returns the textual representation of the case mode.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// assert_eq!(CaseMode::Upper.as_str(), "upper");
    /// assert_eq!(CaseMode::Keep.as_str(), "keep");
    /// ```
    #[must_use]
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            CaseMode::Upper => "upper",
            CaseMode::Lower => "lower",
            CaseMode::Keep => "keep",
        }
    }

    /// Folds the provided identifier according to the case mode.
    ///
    /// The transform relies on the Unicode case mappings of the standard
    /// library and therefore does not depend on the host locale.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// assert_eq!(CaseMode::Upper.fold("user_id"), "USER_ID");
    /// assert_eq!(CaseMode::Lower.fold("User_Id"), "user_id");
    /// assert_eq!(CaseMode::Keep.fold("User_Id"), "User_Id");
    /// ```
    #[must_use]
    pub fn fold(self, identifier: &str) -> Cow<'_, str> {
        match self {
            CaseMode::Upper => Cow::Owned(identifier.to_uppercase()),
            CaseMode::Lower => Cow::Owned(identifier.to_lowercase()),
            CaseMode::Keep => Cow::Borrowed(identifier),
        }
    }
}

impl Display for CaseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upper" => Ok(CaseMode::Upper),
            "lower" => Ok(CaseMode::Lower),
            "keep" => Ok(CaseMode::Keep),
            other => Err(Error::InvalidCaseMode { case_mode: other.to_owned() }),
        }
    }
}

impl TryFrom<&str> for CaseMode {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for CaseMode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}
