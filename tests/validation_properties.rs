//! Property-based tests for password validation

use proptest::prelude::*;
use pwd_policy::{
    has_digit, has_lower, has_special, has_upper, is_valid_password, min_length, PasswordPolicy,
    Requirement, SPECIAL_CHARACTERS,
};

/// Mix of ASCII, special characters, whitespace and non-ASCII letters.
fn password_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::char::range('a', 'z'),
            prop::char::range('A', 'Z'),
            prop::char::range('0', '9'),
            prop::sample::select(SPECIAL_CHARACTERS.chars().collect::<Vec<_>>()),
            prop::sample::select(vec![' ', '\\', 'é', 'É', 'ß', '§', '€']),
        ],
        0..20,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_valid_iff_all_predicates(pwd in password_strategy()) {
        let expected = has_digit(&pwd)
            && has_special(&pwd)
            && has_lower(&pwd)
            && has_upper(&pwd)
            && min_length(&pwd);
        prop_assert_eq!(is_valid_password(&pwd), expected);
    }

    #[test]
    fn prop_report_agrees_with_bool(pwd in any::<String>()) {
        let report = PasswordPolicy::default().check(&pwd);
        prop_assert_eq!(report.is_valid(), is_valid_password(&pwd));
        prop_assert_eq!(report.failed(Requirement::Digit), !has_digit(&pwd));
        prop_assert_eq!(report.failed(Requirement::Special), !has_special(&pwd));
        prop_assert_eq!(report.failed(Requirement::Lowercase), !has_lower(&pwd));
        prop_assert_eq!(report.failed(Requirement::Uppercase), !has_upper(&pwd));
        prop_assert_eq!(report.failed(Requirement::MinLength(8)), !min_length(&pwd));
    }

    #[test]
    fn prop_deterministic(pwd in any::<String>()) {
        prop_assert_eq!(is_valid_password(&pwd), is_valid_password(&pwd));
    }

    /// Appending one character of every class to any password of 8+ chars
    /// makes it valid.
    #[test]
    fn prop_completing_classes_makes_valid(pwd in password_strategy()) {
        let mut completed = pwd.clone();
        completed.push_str("aA1!");
        while completed.chars().count() < 8 {
            completed.push('x');
        }
        prop_assert!(is_valid_password(&completed));
    }

    /// Appending characters never turns a valid password invalid.
    #[test]
    fn prop_appending_keeps_valid(pwd in password_strategy(), suffix in any::<String>()) {
        if is_valid_password(&pwd) {
            let extended = format!("{}{}", pwd, suffix);
            prop_assert!(is_valid_password(&extended));
        }
    }

    #[test]
    fn prop_length_counts_chars(pwd in any::<String>()) {
        prop_assert_eq!(min_length(&pwd), pwd.chars().count() >= 8);
    }
}
