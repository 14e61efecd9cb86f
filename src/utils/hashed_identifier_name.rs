//! Generation of length-bounded identifiers from a digest of column names.

use sha2::{Digest, Sha256};

use crate::errors::Error;

/// Generates an identifier made of the uppercased prefix followed by the
/// hexadecimal SHA-256 digest of the column names, cut to `max_size`
/// characters.
///
/// Unlike [`generate_identifier_name`](crate::utils::generate_identifier_name)
/// the result does not depend on the length of the column names, so two
/// different column lists never produce the same identifier merely because
/// their tails coincide.
///
/// # Arguments
///
/// * `column_names` - The column names to digest, order matters.
/// * `prefix` - The prefix of the identifier, may be empty.
/// * `max_size` - The maximal identifier length.
///
/// # Errors
///
/// * [`Error::EmptyIdentifierColumns`] if `column_names` is empty.
///
/// # Examples
///
/// ```
/// use schema_assets::utils::hashed_identifier_name;
///
/// let name = hashed_identifier_name(["user_id", "role_id"], "fk", 30).unwrap();
/// assert!(name.starts_with("FK_"));
/// assert_eq!(name.len(), 30);
/// assert_eq!(name, hashed_identifier_name(["user_id", "role_id"], "fk", 30).unwrap());
/// ```
pub fn hashed_identifier_name<I, S>(
    column_names: I,
    prefix: &str,
    max_size: usize,
) -> Result<String, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hasher = Sha256::new();
    let mut column_count = 0_usize;
    for column_name in column_names {
        hasher.update(column_name.as_ref().as_bytes());
        hasher.update(b"\0");
        column_count += 1;
    }
    if column_count == 0 {
        return Err(Error::EmptyIdentifierColumns { postfix: prefix.to_owned() });
    }

    let digest = format!("{:x}", hasher.finalize());
    let identifier: String = format!("{prefix}_{digest}").chars().take(max_size).collect();
    Ok(identifier.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_deterministic() {
        let first = hashed_identifier_name(["users", "email"], "uniq", 30).unwrap();
        let columns = vec!["users".to_owned(), "email".to_owned()];
        let second = hashed_identifier_name(&columns, "uniq", 30).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_depends_on_order_and_boundaries() {
        let forward = hashed_identifier_name(["a", "b"], "idx", 64).unwrap();
        let backward = hashed_identifier_name(["b", "a"], "idx", 64).unwrap();
        let merged = hashed_identifier_name(["ab"], "idx", 64).unwrap();
        assert_ne!(forward, backward);
        assert_ne!(forward, merged);
    }

    #[test]
    fn test_is_bounded_and_uppercased() {
        let name = hashed_identifier_name(["users", "email"], "idx", 18).unwrap();
        assert_eq!(name.chars().count(), 18);
        assert!(name.starts_with("IDX_"));
        assert_eq!(name, name.to_uppercase());
    }

    #[test]
    fn test_short_identifiers_are_not_padded() {
        let name = hashed_identifier_name(["users"], "", 100).unwrap();
        assert!(name.starts_with('_'));
        assert_eq!(name.chars().count(), 65);
    }

    #[test]
    fn test_empty_column_list_is_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(
            hashed_identifier_name(empty, "idx", 30).unwrap_err(),
            Error::EmptyIdentifierColumns { postfix: "idx".to_owned() }
        );
    }
}
