//! Password policy validation library
//!
//! Checks a candidate password against five rules, all of which must hold:
//! a digit, a special character, a lowercase and an uppercase Latin letter,
//! and at least 8 characters.
//!
//! # Features
//!
//! - `async` (default): Enables debounced as-you-type checks with cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_MIN_LENGTH`: Minimum length used by [`PasswordPolicy::from_env`]
//!   (default: 8)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{check_password, is_valid_password, Requirement};
//! use secrecy::SecretString;
//!
//! assert!(is_valid_password("Abcdef1!"));
//! assert!(!is_valid_password("abcdefg1"));
//!
//! let password = SecretString::new("abcdefg1".to_string().into());
//! let report = check_password(&password);
//! assert!(report.failed(Requirement::Uppercase));
//! println!("{}", report);
//! ```

// Internal modules
mod policy;
mod report;
mod sections;
mod validator;

// Public API
pub use policy::{
    min_length_from_env, PasswordPolicy, PolicyError, DEFAULT_MIN_LENGTH, MIN_LENGTH_ENV,
};
pub use report::{PasswordReport, Requirement};
pub use sections::{
    has_digit, has_lower, has_special, has_upper, is_special, meets_min_length, min_length,
    SPECIAL_CHARACTERS,
};
pub use validator::{check_password, is_valid_password, is_valid_password_bytes, ValidationError};

#[cfg(feature = "async")]
pub use validator::{check_password_tx, DEBOUNCE};
