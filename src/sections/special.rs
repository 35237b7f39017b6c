//! Special character section.

use super::SectionResult;
use crate::policy::PasswordPolicy;
use crate::report::Requirement;

/// Characters accepted as "special". The backtick is included.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()[]{}-_+=~`|:;\"'<>,./?";

/// `true` iff `c` is in [`SPECIAL_CHARACTERS`].
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// `true` iff some character of `password` is in [`SPECIAL_CHARACTERS`].
pub fn has_special(password: &str) -> bool {
    password.chars().any(is_special)
}

/// Checks if the password contains a special character.
pub fn special_section(password: &str, _policy: &PasswordPolicy) -> SectionResult {
    if !has_special(password) {
        return Some(Requirement::Special);
    }
    None
}
