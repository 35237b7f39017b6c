//! Requirement and report types returned by the validator.

use std::fmt;

/// A single password rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// At least `n` characters.
    MinLength(usize),
    /// At least one of `0-9`.
    Digit,
    /// At least one character from [`SPECIAL_CHARACTERS`](crate::SPECIAL_CHARACTERS).
    Special,
    /// At least one of `a-z`.
    Lowercase,
    /// At least one of `A-Z`.
    Uppercase,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::MinLength(n) => write!(f, "Password must be at least {} characters", n),
            Requirement::Digit => write!(f, "Password must contain at least one digit"),
            Requirement::Special => {
                write!(f, "Password must contain at least one special character")
            }
            Requirement::Lowercase => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            Requirement::Uppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
        }
    }
}

/// Outcome of checking a password against a policy.
///
/// `failures` keeps the evaluation order: length, digit, special,
/// lowercase, uppercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordReport {
    pub failures: Vec<Requirement>,
}

impl PasswordReport {
    /// `true` if no requirement failed.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Whether `requirement` is among the failures.
    pub fn failed(&self, requirement: Requirement) -> bool {
        self.failures.contains(&requirement)
    }

    /// Human-readable message for each failed requirement.
    pub fn reasons(&self) -> Vec<String> {
        self.failures.iter().map(|r| r.to_string()).collect()
    }
}

impl fmt::Display for PasswordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "Password meets all requirements");
        }
        write!(
            f,
            "Password does not meet requirements: {}",
            self.reasons().join("; ")
        )
    }
}
