//! Login identifier helpers
//!
//! A login identifier may be a username or an email address; directories
//! match either one case-insensitively. These helpers keep the shape check
//! and the normalization rule in one place.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

/// Returns true when the identifier has the shape of an email address
pub fn is_email(identifier: &str) -> bool {
    EMAIL_RE.is_match(identifier)
}

/// Normalizes an identifier for case-insensitive comparison
pub fn normalize(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_email() {
        assert!(is_email("user@email.com"));
        assert!(is_email("User@Email.COM"));
        assert!(!is_email("username"));
        assert!(!is_email("user@"));
        assert!(!is_email("user name@email.com"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("UserName"), "username");
        assert_eq!(normalize("  User@Email.COM "), "user@email.com");
        assert_eq!(normalize("username"), "username");
    }
}
