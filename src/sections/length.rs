//! Length section - checks password minimum length.

use super::SectionResult;
use crate::policy::{PasswordPolicy, DEFAULT_MIN_LENGTH};
use crate::report::Requirement;

/// `true` iff `password` has at least 8 characters.
pub fn min_length(password: &str) -> bool {
    meets_min_length(password, DEFAULT_MIN_LENGTH)
}

/// `true` iff `password` has at least `min` characters.
///
/// Length counts `char`s, so "ÉÉÉÉÉÉÉÉ" is 8 long even though it is 16
/// bytes.
pub fn meets_min_length(password: &str, min: usize) -> bool {
    // Byte length bounds char count from above.
    if password.len() < min {
        return false;
    }
    password.chars().take(min).count() == min
}

/// Checks if the password meets the policy's minimum length.
pub fn length_section(password: &str, policy: &PasswordPolicy) -> SectionResult {
    let min = policy.min_length();
    if !meets_min_length(password, min) {
        return Some(Requirement::MinLength(min));
    }
    None
}
