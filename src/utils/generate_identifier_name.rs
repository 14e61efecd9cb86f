//! Generation of length-bounded identifiers from a list of column names.

use crate::errors::Error;

/// Maximal identifier length used when none is configured.
///
/// Thirty characters is the historical limit of the most restrictive engines,
/// such as Oracle before 12.2.
pub const DEFAULT_MAX_IDENTIFIER_LENGTH: usize = 30;

/// Generates an identifier from a list of column names and a postfix, so
/// that composite names (indexes, foreign keys, ...) stay within `max_size`.
///
/// Every column name keeps only its trailing `floor((max_size - p) / n - 1)`
/// characters, where `n` is the number of column names and `p` the length of
/// the postfix. The truncated names and the postfix are joined with `_`, and
/// leading or trailing `_` are stripped from the result.
///
/// When the computed length is zero the column name is kept whole; when it is
/// negative its leading characters are dropped instead, possibly leaving
/// nothing of it. Lengths are counted in characters, so multi-byte names are
/// never split inside a code point.
///
/// # Arguments
///
/// * `column_names` - The column names, in the order they should appear.
/// * `postfix` - The postfix appended to the identifier, may be empty.
/// * `max_size` - The targeted identifier length.
///
/// # Errors
///
/// * [`Error::EmptyIdentifierColumns`] if `column_names` is empty.
///
/// # Examples
///
/// ```
/// use schema_assets::utils::generate_identifier_name;
///
/// assert_eq!(
///     generate_identifier_name(["user_id", "role_id"], "fk", 30).unwrap(),
///     "user_id_role_id_fk"
/// );
/// assert_eq!(generate_identifier_name(["a"], "", 30).unwrap(), "a");
/// assert_eq!(
///     generate_identifier_name(["customer_orders", "customer_id", "order_id"], "idx", 30).unwrap(),
///     "r_orders_tomer_id_order_id_idx"
/// );
/// ```
pub fn generate_identifier_name<I, S>(
    column_names: I,
    postfix: &str,
    max_size: usize,
) -> Result<String, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let column_names: Vec<S> = column_names.into_iter().collect();
    if column_names.is_empty() {
        return Err(Error::EmptyIdentifierColumns { postfix: postfix.to_owned() });
    }

    let column_count = i128::try_from(column_names.len()).unwrap_or(i128::MAX);
    let postfix_length = i128::try_from(postfix.chars().count()).unwrap_or(i128::MAX);
    let max_size = i128::try_from(max_size).unwrap_or(i128::MAX);
    let part_length = (max_size - postfix_length - column_count).div_euclid(column_count);

    let mut parts: Vec<&str> = column_names
        .iter()
        .map(|column_name| trailing_chars(column_name.as_ref(), part_length))
        .collect();
    parts.push(postfix);

    Ok(parts.join("_").trim_matches('_').to_owned())
}

/// Returns the trailing `length` characters of `name`.
///
/// A zero length keeps the whole name, while a negative length drops the
/// leading `|length|` characters.
fn trailing_chars(name: &str, length: i128) -> &str {
    let char_count = name.chars().count();
    let skip = match length.cmp(&0) {
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => {
            let keep = usize::try_from(length).unwrap_or(usize::MAX);
            char_count.saturating_sub(keep)
        }
        std::cmp::Ordering::Less => usize::try_from(length.unsigned_abs()).unwrap_or(usize::MAX),
    };
    name.char_indices().nth(skip).map_or("", |(offset, _)| &name[offset..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_within_budget_are_unchanged() {
        assert_eq!(
            generate_identifier_name(["user_id", "role_id"], "fk", 30).unwrap(),
            "user_id_role_id_fk"
        );
    }

    #[test]
    fn test_single_column_without_postfix() {
        assert_eq!(generate_identifier_name(["a"], "", 30).unwrap(), "a");
        assert_eq!(generate_identifier_name(vec![String::from("users")], "", 30).unwrap(), "users");
    }

    #[test]
    fn test_long_names_keep_their_tail() {
        let name = generate_identifier_name(
            ["a_very_long_table_name_for_orders", "a_very_long_column_name"],
            "idx",
            30,
        )
        .unwrap();
        // floor((30 - 3) / 2 - 1) = 12
        assert_eq!(name, "e_for_orders__column_name_idx");
        assert!(name.chars().count() <= 30);
    }

    #[test]
    fn test_surrounding_underscores_are_stripped() {
        assert_eq!(generate_identifier_name(["_id_"], "", 30).unwrap(), "id");
        assert_eq!(generate_identifier_name(["__id"], "_pk_", 30).unwrap(), "id__pk");
    }

    #[test]
    fn test_zero_length_keeps_whole_names() {
        // floor((2 - 0) / 2 - 1) = 0
        assert_eq!(generate_identifier_name(["abc", "def"], "", 2).unwrap(), "abc_def");
    }

    #[test]
    fn test_negative_length_drops_leading_characters() {
        // floor((10 - 14) / 1 - 1) = -5
        assert_eq!(
            generate_identifier_name(["abcdef"], "postfix_longer", 10).unwrap(),
            "f_postfix_longer"
        );
        // floor((0 - 0) / 2 - 1) = -1
        assert_eq!(generate_identifier_name(["ab", "cde"], "", 0).unwrap(), "b_de");
    }

    #[test]
    fn test_vanishing_names_leave_only_postfix() {
        // floor((1 - 4) / 1 - 1) = -4
        assert_eq!(generate_identifier_name(["abc"], "uniq", 1).unwrap(), "uniq");
        // floor((0 - 8) / 2 - 1) = -5
        assert_eq!(generate_identifier_name(["ab", "c"], "abcdefgh", 0).unwrap(), "abcdefgh");
    }

    #[test]
    fn test_multibyte_names_are_truncated_by_character() {
        // floor((5 - 0) / 1 - 1) = 4
        assert_eq!(generate_identifier_name(["größe_id"], "", 5).unwrap(), "e_id");
        assert_eq!(generate_identifier_name(["日本語テーブル"], "", 4).unwrap(), "ーブル");
    }

    #[test]
    fn test_order_is_preserved() {
        assert_eq!(generate_identifier_name(["b", "a", "c"], "x", 30).unwrap(), "b_a_c_x");
    }

    #[test]
    fn test_empty_column_list_is_rejected() {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(
            generate_identifier_name(empty, "fk", 30).unwrap_err(),
            Error::EmptyIdentifierColumns { postfix: "fk".to_owned() }
        );
    }

    #[test]
    fn test_huge_max_size_does_not_overflow() {
        assert_eq!(generate_identifier_name(["users"], "idx", usize::MAX).unwrap(), "users_idx");
    }
}
