//! Policy configuration
//!
//! Holds the tunable part of the rules (the minimum length) and loads it
//! from the environment.

use thiserror::Error;

use crate::report::PasswordReport;
use crate::sections::{
    digit_section, length_section, lowercase_section, special_section, uppercase_section,
    SectionFn,
};

/// Minimum password length when nothing else is configured.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Environment variable overriding the minimum length.
pub const MIN_LENGTH_ENV: &str = "PWD_MIN_LENGTH";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid minimum length {0:?}: expected a positive integer")]
    InvalidMinLength(String),
    #[error("Minimum length must be greater than zero")]
    ZeroMinLength,
}

/// Password rules: one digit, one special character, one lowercase and one
/// uppercase Latin letter, and `min_length` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl PasswordPolicy {
    /// Builds a policy with a custom minimum length.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::ZeroMinLength`] if `min_length` is 0.
    pub fn with_min_length(min_length: usize) -> Result<Self, PolicyError> {
        if min_length == 0 {
            return Err(PolicyError::ZeroMinLength);
        }
        Ok(Self { min_length })
    }

    /// Loads the policy from the environment.
    ///
    /// `PWD_MIN_LENGTH` overrides the minimum length; when unset the
    /// default of 8 applies.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// unsafe { std::env::set_var("PWD_MIN_LENGTH", "12"); }
    /// let policy = pwd_policy::PasswordPolicy::from_env()?;
    /// assert_eq!(policy.min_length(), 12);
    /// ```
    pub fn from_env() -> Result<Self, PolicyError> {
        let policy = match min_length_from_env()? {
            Some(n) => Self::with_min_length(n)?,
            None => Self::default(),
        };

        #[cfg(feature = "tracing")]
        tracing::info!("Password policy loaded: min_length={}", policy.min_length);

        Ok(policy)
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Runs every section against `password` and collects the failures.
    ///
    /// All sections run, so the report names every unmet requirement.
    pub fn check(&self, password: &str) -> PasswordReport {
        let sections: [(&str, SectionFn); 5] = [
            ("length", length_section),
            ("digit", digit_section),
            ("special", special_section),
            ("lowercase", lowercase_section),
            ("uppercase", uppercase_section),
        ];

        let mut failures = Vec::new();
        for (_section_name, section_fn) in sections {
            if let Some(requirement) = section_fn(password, self) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password section failed: {}", _section_name);
                failures.push(requirement);
            }
        }

        PasswordReport { failures }
    }

    /// `true` iff `password` satisfies every requirement.
    pub fn is_valid(&self, password: &str) -> bool {
        self.check(password).is_valid()
    }
}

/// Reads `PWD_MIN_LENGTH`.
///
/// Returns `Ok(None)` when the variable is unset or blank.
pub fn min_length_from_env() -> Result<Option<usize>, PolicyError> {
    match std::env::var(MIN_LENGTH_ENV) {
        Ok(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<usize>().map(Some).map_err(|_| {
                #[cfg(feature = "tracing")]
                tracing::error!("Password policy FAILED: invalid {}={:?}", MIN_LENGTH_ENV, raw);
                PolicyError::InvalidMinLength(raw.clone())
            })
        }
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(os)) => Err(PolicyError::InvalidMinLength(
            os.to_string_lossy().into_owned(),
        )),
    }
}
