//! Character variety sections - digit, lowercase and uppercase.
//!
//! Only ASCII ranges count: 'É' or 'ß' satisfy neither letter class and
//! '٣' is not a digit.

use super::SectionResult;
use crate::policy::PasswordPolicy;
use crate::report::Requirement;

/// `true` iff some character is in `'0'..='9'`.
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// `true` iff some character is in `'a'..='z'`.
pub fn has_lower(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// `true` iff some character is in `'A'..='Z'`.
pub fn has_upper(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn digit_section(password: &str, _policy: &PasswordPolicy) -> SectionResult {
    if !has_digit(password) {
        return Some(Requirement::Digit);
    }
    None
}

pub fn lowercase_section(password: &str, _policy: &PasswordPolicy) -> SectionResult {
    if !has_lower(password) {
        return Some(Requirement::Lowercase);
    }
    None
}

pub fn uppercase_section(password: &str, _policy: &PasswordPolicy) -> SectionResult {
    if !has_upper(password) {
        return Some(Requirement::Uppercase);
    }
    None
}
