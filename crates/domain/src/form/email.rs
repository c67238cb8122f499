//! Email address rule shared by the contact and newsletter forms

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld`: each part is one or more characters that are neither
/// whitespace (byte order mark included) nor `@`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("valid regex")
});

/// Check whether `email` looks like a deliverable address.
///
/// The value is tested as given; callers trim user input first.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("oleg.suvorov@example.co.uk"));
        assert!(is_valid_email("x+tag@sub.domain.io"));
    }

    #[test]
    fn rejects_missing_top_level_domain() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("ab.com"));
    }

    #[test]
    fn rejects_embedded_whitespace() {
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b .com"));
        assert!(!is_valid_email("a@b.c om"));
        assert!(!is_valid_email(" a@b.com"));
        assert!(!is_valid_email("a@b.com\n"));
        // Non-ASCII whitespace counts too
        assert!(!is_valid_email("a\u{00a0}@b.com"));
    }

    #[test]
    fn rejects_byte_order_mark() {
        assert!(!is_valid_email("a\u{feff}@b.com"));
        assert!(!is_valid_email("a@b\u{feff}.com"));
        assert!(!is_valid_email("a@b.c\u{feff}om"));
    }

    #[test]
    fn rejects_second_at_sign() {
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a@b.c@d"));
    }
}
