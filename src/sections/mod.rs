//! Password rule sections
//!
//! Each section checks one requirement and reports it when unmet.

mod length;
mod special;
mod variety;

pub use length::{length_section, meets_min_length, min_length};
pub use special::{has_special, is_special, special_section, SPECIAL_CHARACTERS};
pub use variety::{
    digit_section, has_digit, has_lower, has_upper, lowercase_section, uppercase_section,
};

use crate::policy::PasswordPolicy;
use crate::report::Requirement;

/// Result type for section functions.
/// - `Some(requirement)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Requirement>;

/// Signature shared by every section.
pub type SectionFn = fn(&str, &PasswordPolicy) -> SectionResult;
