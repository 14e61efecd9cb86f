//! Submodule providing a trait for describing named schema assets.

use std::{borrow::Cow, fmt::Debug};

use sqlparser::ast::Ident;

use crate::{
    errors::Error,
    structs::{CaseMode, QuoteStyle, SchemaAsset},
};

/// A trait for types that own a [`SchemaAsset`], i.e. any schema object
/// carrying a name: tables, columns, indexes, foreign keys and schemas.
///
/// Every read of the name goes through the case-folding policy of the asset,
/// while the stored name is never altered by folding.
///
/// Mutating the case mode requires a mutable borrow, so callers sharing an
/// asset across threads have to wrap it in a lock of their own.
pub trait AssetLike: Debug {
    /// Returns a reference to the underlying named asset.
    fn asset(&self) -> &SchemaAsset;

    /// Replaces the case mode of the asset.
    ///
    /// Composite assets override this to propagate the mode to the assets
    /// they own.
    fn replace_case_mode(&mut self, case_mode: CaseMode);

    /// Returns the name of the asset, folded according to its case mode.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let mut column = Column::new("UserId", "INT");
    /// assert_eq!(column.name(), "UserId");
    /// column.set_case_mode(CaseMode::Lower).unwrap();
    /// assert_eq!(column.name(), "userid");
    /// ```
    #[inline]
    fn name(&self) -> Cow<'_, str> {
        let asset = self.asset();
        asset.case_mode().fold(asset.stored_name())
    }

    /// Returns the current case mode of the asset.
    #[inline]
    fn case_mode(&self) -> CaseMode {
        self.asset().case_mode()
    }

    /// Sets the case mode of the asset.
    ///
    /// Accepts either a [`CaseMode`] or its textual form (`"upper"`,
    /// `"lower"`, `"keep"`). The stored name is left untouched.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidCaseMode`] if the provided value is not a recognized
    ///   case mode. The current mode is left unchanged in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::{errors::Error, prelude::*};
    ///
    /// let mut table = Table::new("Users");
    /// table.set_case_mode("upper").unwrap();
    /// assert_eq!(table.name(), "USERS");
    ///
    /// let err = table.set_case_mode("mixed").unwrap_err();
    /// assert_eq!(err, Error::InvalidCaseMode { case_mode: "mixed".to_owned() });
    /// assert_eq!(table.case_mode(), CaseMode::Upper);
    /// ```
    fn set_case_mode<M>(&mut self, case_mode: M) -> Result<(), Error>
    where
        M: TryInto<CaseMode>,
        Error: From<M::Error>,
    {
        let case_mode = case_mode.try_into()?;
        self.replace_case_mode(case_mode);
        Ok(())
    }

    /// Folds the provided identifier according to the case mode of the
    /// asset.
    #[inline]
    fn fold_identifier<'a>(&self, identifier: &'a str) -> Cow<'a, str> {
        self.case_mode().fold(identifier)
    }

    /// Folds each of the provided identifiers, preserving their order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let mut asset = SchemaAsset::new("idx");
    /// asset.set_case_mode(CaseMode::Upper).unwrap();
    /// assert_eq!(asset.fold_identifiers(["a", "b", "a"]), vec!["A", "B", "A"]);
    /// ```
    fn fold_identifiers<I, S>(&self, identifiers: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let case_mode = self.case_mode();
        identifiers
            .into_iter()
            .map(|identifier| case_mode.fold(identifier.as_ref()).into_owned())
            .collect()
    }

    /// Returns the namespace part of a qualified name (the part before the
    /// last `.`), if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let table = Table::new("public.users");
    /// assert_eq!(table.namespace_name().as_deref(), Some("public"));
    /// assert_eq!(Table::new("users").namespace_name(), None);
    /// ```
    fn namespace_name(&self) -> Option<Cow<'_, str>> {
        let asset = self.asset();
        let (namespace, _) = asset.stored_name().rsplit_once('.')?;
        Some(asset.case_mode().fold(namespace))
    }

    /// Returns the unqualified part of the name (the part after the last
    /// `.`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let mut table = Table::new("public.users");
    /// table.set_case_mode(CaseMode::Upper).unwrap();
    /// assert_eq!(table.short_name(), "USERS");
    /// ```
    fn short_name(&self) -> Cow<'_, str> {
        let asset = self.asset();
        let stored = asset.stored_name();
        let short = stored.rsplit_once('.').map_or(stored, |(_, short)| short);
        asset.case_mode().fold(short)
    }

    /// Returns the folded name rendered as a quoted SQL identifier.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_assets::prelude::*;
    ///
    /// let column = Column::new("order", "INT");
    /// assert_eq!(column.quoted_name(QuoteStyle::Double), "\"order\"");
    /// assert_eq!(column.quoted_name(QuoteStyle::Backtick), "`order`");
    /// assert_eq!(column.quoted_name(QuoteStyle::Bracket), "[order]");
    /// ```
    #[must_use]
    fn quoted_name(&self, style: QuoteStyle) -> String {
        Ident::with_quote(style.as_char(), self.name().into_owned()).to_string()
    }
}

impl<A: AssetLike> AssetLike for Box<A> {
    fn asset(&self) -> &SchemaAsset {
        (**self).asset()
    }

    fn replace_case_mode(&mut self, case_mode: CaseMode) {
        (**self).replace_case_mode(case_mode);
    }
}
