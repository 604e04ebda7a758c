//! Pattern section - penalizes well-known weak substrings.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Feedback;

const PATTERN_PENALTY: i64 = 2;

/// How a common pattern must appear in the lowercased password.
enum Match {
    Prefix(&'static str),
    Contains(&'static str),
}

const COMMON_PATTERNS: [Match; 6] = [
    Match::Prefix("123"),
    Match::Contains("abc"),
    Match::Contains("qwerty"),
    Match::Contains("password"),
    Match::Contains("admin"),
    Match::Contains("letmein"),
];

/// Returns `true` if the password matches any common pattern, case-insensitively.
fn has_common_pattern(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PATTERNS.iter().any(|pattern| match pattern {
        Match::Prefix(p) => lowered.starts_with(p),
        Match::Contains(p) => lowered.contains(p),
    })
}

/// Subtracts a fixed penalty once, however many patterns match.
pub fn pattern_section(password: &SecretString) -> SectionResult {
    let mut result = SectionResult::default();
    if has_common_pattern(password.expose_secret()) {
        result.award(-PATTERN_PENALTY);
        result.hint(Feedback::AvoidCommonPatterns);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pwd: &str) -> SectionResult {
        pattern_section(&SecretString::new(pwd.into()))
    }

    #[test]
    fn test_pattern_section_prefix_only() {
        assert_eq!(run("123Secure!").points, -2);
        // "123" in the middle is not penalized
        assert_eq!(run("Se123cure!"), SectionResult::default());
    }

    #[test]
    fn test_pattern_section_case_insensitive() {
        for pwd in ["xxABCxx", "QwErTy!", "MyPASSWORD", "SuperAdmin1", "LetMeIn99"] {
            let result = run(pwd);
            assert_eq!(result.points, -2, "expected penalty for {pwd}");
            assert_eq!(result.feedback, vec![Feedback::AvoidCommonPatterns]);
        }
    }

    #[test]
    fn test_pattern_section_applies_once() {
        let result = run("123abcqwertypasswordadminletmein");
        assert_eq!(result.points, -2);
        assert_eq!(result.feedback.len(), 1);
    }

    #[test]
    fn test_pattern_section_leetspeak_not_matched() {
        assert_eq!(run("Passw0rd"), SectionResult::default());
    }

    #[test]
    fn test_pattern_section_strong_password() {
        assert_eq!(run("Tr0ub4dor&3XyZ"), SectionResult::default());
    }
}
