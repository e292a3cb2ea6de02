//! Validation of identifiers taken from request paths and queries.

use crate::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;
use uuid::Uuid;

/// Allowed shape of a user id: 1-64 characters of letters, digits, `_ . @ -`.
pub static USER_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.@-]{1,64}$").unwrap());

/// Maximum length of a book id or title used as a path segment.
pub const MAX_BOOK_KEY_LEN: usize = 256;

/// Validates a book reference (id or title).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the key is blank, too long, or contains
/// control characters.
pub fn validate_book_key(key: &str) -> Result<(), AppError> {
    if key.trim().is_empty() || key.chars().count() > MAX_BOOK_KEY_LEN {
        return Err(AppError::bad_request(
            "Invalid book id length",
            json!({ "min": 1, "max": MAX_BOOK_KEY_LEN }),
        ));
    }

    if key.chars().any(char::is_control) {
        return Err(AppError::bad_request(
            "Invalid characters in book id",
            json!({ "hint": "Control characters are not allowed" }),
        ));
    }

    Ok(())
}

/// Parses a rental id.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the value is not a UUID.
pub fn parse_rental_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| {
        AppError::bad_request(
            "Invalid rental id",
            json!({ "rental_id": raw, "hint": "Expected a UUID" }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_ids() {
        for id in ["alice", "bob_42", "j.doe@example.org", "a-b", "X"] {
            assert!(USER_ID_REGEX.is_match(id), "{id} should be valid");
        }
    }

    #[test]
    fn test_invalid_user_ids() {
        let too_long = "a".repeat(65);
        for id in ["", "has space", "semi;colon", "slash/", too_long.as_str()] {
            assert!(!USER_ID_REGEX.is_match(id), "{id:?} should be invalid");
        }
    }

    #[test]
    fn test_user_id_at_max_length() {
        assert!(USER_ID_REGEX.is_match(&"a".repeat(64)));
    }

    #[test]
    fn test_book_keys() {
        assert!(validate_book_key("Dune").is_ok());
        assert!(validate_book_key("The Left Hand of Darkness").is_ok());
        assert!(validate_book_key("9780441013593").is_ok());

        assert!(validate_book_key("").is_err());
        assert!(validate_book_key("   ").is_err());
        assert!(validate_book_key("bad\nkey").is_err());
        assert!(validate_book_key(&"x".repeat(MAX_BOOK_KEY_LEN + 1)).is_err());
    }

    #[test]
    fn test_parse_rental_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_rental_id(&id.to_string()).unwrap(), id);

        let err = parse_rental_id("not-a-uuid").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
