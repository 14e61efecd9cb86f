//! Submodule defining the configuration of generated names.

use crate::{
    errors::Error,
    structs::CaseMode,
    utils::{DEFAULT_MAX_IDENTIFIER_LENGTH, generate_identifier_name, hashed_identifier_name},
};

/// Strategy used to synthesize the names of indexes and foreign keys which
/// were not explicitly named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum IdentifierStrategy {
    /// Keeps the trailing characters of every column name and joins them with
    /// the postfix, see [`generate_identifier_name`].
    #[default]
    Truncated,
    /// Prefixes an uppercased digest of the column names, see
    /// [`hashed_identifier_name`].
    Hashed,
}

/// Configuration shared by the assets created through a
/// [`Schema`](crate::structs::Schema) or a [`Table`](crate::structs::Table).
///
/// # Example
///
/// ```rust
/// use schema_assets::prelude::*;
///
/// let config = NamingConfig::default()
///     .max_identifier_length(63)
///     .case_mode(CaseMode::Lower)
///     .strategy(IdentifierStrategy::Hashed);
///
/// assert_eq!(config.get_max_identifier_length(), 63);
/// assert_eq!(config.get_case_mode(), CaseMode::Lower);
/// assert_eq!(config.get_strategy(), IdentifierStrategy::Hashed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamingConfig {
    /// Maximal length of generated identifiers.
    max_identifier_length: usize,
    /// Case mode given to newly created assets.
    case_mode: CaseMode,
    /// Strategy used to generate identifiers.
    strategy: IdentifierStrategy,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            max_identifier_length: DEFAULT_MAX_IDENTIFIER_LENGTH,
            case_mode: CaseMode::Keep,
            strategy: IdentifierStrategy::Truncated,
        }
    }
}

impl NamingConfig {
    /// Sets the maximal length of generated identifiers.
    #[must_use]
    #[inline]
    pub fn max_identifier_length(mut self, max_identifier_length: usize) -> Self {
        self.max_identifier_length = max_identifier_length;
        self
    }

    /// Sets the case mode given to newly created assets.
    #[must_use]
    #[inline]
    pub fn case_mode(mut self, case_mode: CaseMode) -> Self {
        self.case_mode = case_mode;
        self
    }

    /// Sets the identifier generation strategy.
    #[must_use]
    #[inline]
    pub fn strategy(mut self, strategy: IdentifierStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the maximal length of generated identifiers.
    #[must_use]
    #[inline]
    pub fn get_max_identifier_length(&self) -> usize {
        self.max_identifier_length
    }

    /// Returns the case mode given to newly created assets.
    #[must_use]
    #[inline]
    pub fn get_case_mode(&self) -> CaseMode {
        self.case_mode
    }

    /// Returns the identifier generation strategy.
    #[must_use]
    #[inline]
    pub fn get_strategy(&self) -> IdentifierStrategy {
        self.strategy
    }

    /// Generates an identifier from the provided column names and affix,
    /// bounded by the configured maximal length.
    ///
    /// The affix is used as a postfix by the truncating strategy and as a
    /// prefix by the hashed one.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyIdentifierColumns`] if no column name is provided.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let config = NamingConfig::default();
    /// let name = config.generate_identifier_name(["users", "email"], "idx").unwrap();
    /// assert_eq!(name, "users_email_idx");
    /// ```
    pub fn generate_identifier_name<I, S>(
        &self,
        column_names: I,
        affix: &str,
    ) -> Result<String, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.strategy {
            IdentifierStrategy::Truncated => {
                generate_identifier_name(column_names, affix, self.max_identifier_length)
            }
            IdentifierStrategy::Hashed => {
                hashed_identifier_name(column_names, affix, self.max_identifier_length)
            }
        }
    }
}
