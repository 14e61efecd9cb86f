//! Submodule defining the quoting styles of SQL identifiers.

/// Delimiters used to render a name as a quoted SQL identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum QuoteStyle {
    /// `"name"`, the ANSI style.
    #[default]
    Double,
    /// `'name'`.
    Single,
    /// `` `name` ``, as used by `MySQL`.
    Backtick,
    /// `[name]`, as used by `SQL Server`.
    Bracket,
}

impl QuoteStyle {
    /// All the supported quoting styles.
    pub const ALL: [QuoteStyle; 4] =
        [QuoteStyle::Double, QuoteStyle::Single, QuoteStyle::Backtick, QuoteStyle::Bracket];

    /// Returns the opening quote character of the style.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// assert_eq!(QuoteStyle::Double.as_char(), '"');
    /// assert_eq!(QuoteStyle::Bracket.as_char(), '[');
    /// ```
    #[must_use]
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
            QuoteStyle::Backtick => '`',
            QuoteStyle::Bracket => '[',
        }
    }
}

impl From<QuoteStyle> for char {
    fn from(style: QuoteStyle) -> Self {
        style.as_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_have_distinct_quotes() {
        let mut quotes: Vec<char> = QuoteStyle::ALL.iter().map(|style| style.as_char()).collect();
        quotes.sort_unstable();
        quotes.dedup();
        assert_eq!(quotes.len(), QuoteStyle::ALL.len());
    }

    #[test]
    fn test_default_is_ansi() {
        assert_eq!(char::from(QuoteStyle::default()), '"');
    }
}
