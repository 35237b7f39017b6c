//! Password validator - entry points over the default rules.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::PasswordPolicy;
use crate::report::PasswordReport;
use crate::sections::{has_digit, has_lower, has_special, has_upper, min_length};

/// Delay before an as-you-type check runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password is not valid UTF-8 (first invalid byte at offset {0})")]
    InvalidUtf8(usize),
}

/// Returns `true` iff `password` has a digit, a special character, a
/// lowercase and an uppercase Latin letter, and at least 8 characters.
///
/// Never fails: an empty or short input is simply `false`.
pub fn is_valid_password(password: &str) -> bool {
    min_length(password)
        && has_digit(password)
        && has_special(password)
        && has_lower(password)
        && has_upper(password)
}

/// Byte-oriented variant of [`is_valid_password`].
///
/// # Errors
///
/// Returns [`ValidationError::InvalidUtf8`] if `bytes` is not a character
/// sequence.
pub fn is_valid_password_bytes(bytes: &[u8]) -> Result<bool, ValidationError> {
    let password = std::str::from_utf8(bytes).map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::warn!("Rejected non UTF-8 password input at offset {}", e.valid_up_to());
        ValidationError::InvalidUtf8(e.valid_up_to())
    })?;
    Ok(is_valid_password(password))
}

/// Checks a secret password against the default rules and reports every
/// unmet requirement.
pub fn check_password(password: &SecretString) -> PasswordReport {
    let report = PasswordPolicy::default().check(password.expose_secret());

    #[cfg(feature = "tracing")]
    tracing::debug!("Password check done: {} failed requirement(s)", report.failures.len());

    report
}

/// Debounced check for as-you-type validation.
///
/// Waits [`DEBOUNCE`], then sends the report on `tx`. If `token` is
/// cancelled first, nothing is checked or sent.
#[cfg(feature = "async")]
pub async fn check_password_tx(
    password: &SecretString,
    policy: PasswordPolicy,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password check cancelled before it started");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let report = policy.check(password.expose_secret());

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", _e);
    }
}
