//! Character variety section - checks for lowercase, uppercase, digits and special chars.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Feedback;

/// One point per character class present, a hint for each one missing.
///
/// Classes are checked in a fixed order: lowercase, uppercase, digit, special.
/// Anything that is not an ASCII letter or digit counts as special.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let checks = [
        (pwd.chars().any(|c| c.is_ascii_lowercase()), Feedback::AddLowercase),
        (pwd.chars().any(|c| c.is_ascii_uppercase()), Feedback::AddUppercase),
        (pwd.chars().any(|c| c.is_ascii_digit()), Feedback::AddNumbers),
        (pwd.chars().any(|c| !c.is_ascii_alphanumeric()), Feedback::AddSpecial),
    ];

    let mut result = SectionResult::default();
    for (present, missing) in checks {
        if present {
            result.award(1);
        } else {
            result.hint(missing);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pwd: &str) -> SectionResult {
        character_variety_section(&SecretString::new(pwd.into()))
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = run("lowercase123!");
        assert_eq!(result.points, 3);
        assert_eq!(result.feedback, vec![Feedback::AddUppercase]);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let result = run("UPPERCASE123!");
        assert_eq!(result.points, 3);
        assert_eq!(result.feedback, vec![Feedback::AddLowercase]);
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        let result = run("NoNumbers!");
        assert_eq!(result.feedback, vec![Feedback::AddNumbers]);
    }

    #[test]
    fn test_variety_section_missing_special() {
        let result = run("NoSpecial123");
        assert_eq!(result.feedback, vec![Feedback::AddSpecial]);
    }

    #[test]
    fn test_variety_section_all_categories() {
        let result = run("HasAll123!@#");
        assert_eq!(result.points, 4);
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn test_variety_section_feedback_order() {
        let result = run("");
        assert_eq!(result.points, 0);
        assert_eq!(
            result.feedback,
            vec![
                Feedback::AddLowercase,
                Feedback::AddUppercase,
                Feedback::AddNumbers,
                Feedback::AddSpecial,
            ]
        );
    }

    #[test]
    fn test_non_ascii_letters_count_as_special() {
        // 'ß' and 'É' are letters, but not ASCII ones
        let result = run("ßÉ");
        assert_eq!(result.points, 1);
        assert_eq!(
            result.feedback,
            vec![Feedback::AddLowercase, Feedback::AddUppercase, Feedback::AddNumbers]
        );
    }
}
