//! Pure input validation helpers
//!
//! Small predicate functions shared by the DTO layer and the domain services,
//! so every handler validates the same field the same way.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum username length
pub const USERNAME_MIN_LEN: usize = 5;

/// Maximum username length
pub const USERNAME_MAX_LEN: usize = 20;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile"));

/// True when the value is missing or contains only whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Lowercase and trim an identifier (username, email, playlist name) so that
/// storage and lookup always see the same normalized form
pub fn normalize_identifier(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Basic email shape check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Username must be non-blank and within the length bounds after trimming
pub fn is_valid_username(username: &str) -> bool {
    let trimmed = username.trim();
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&trimmed.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("alice"));
    }

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier("  Alice "), "alice");
        assert_eq!(normalize_identifier("ALICE@X.COM"), "alice@x.com");
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("  alice@example.com  "));
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("al ice@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_username_bounds() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("  alice  "));
        assert!(!is_valid_username("bob"));
        assert!(!is_valid_username("a".repeat(21).as_str()));
        assert!(is_valid_username("a".repeat(20).as_str()));
    }
}
