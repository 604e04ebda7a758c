//! Value types produced by the password strength evaluator.

use std::fmt;

/// Points awarded to a password, always within `0..=StrengthScore::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MAX: u8 = 7;

    /// Builds a score from raw points, clamping into `0..=MAX`.
    pub fn new(points: i64) -> Self {
        Self(points.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Meter fill, `min(score / 7 * 100, 100)`.
    pub fn fill_percentage(&self) -> f64 {
        (self.0 as f64 / Self::MAX as f64 * 100.0).min(100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    NoPassword,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Label for a non-empty password. `NoPassword` is never returned here.
    pub fn from_score(score: StrengthScore) -> Self {
        match score.value() {
            0..=2 => StrengthLabel::Weak,
            3..=4 => StrengthLabel::Fair,
            5..=6 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }

    /// Meter tone for this band.
    pub fn tone(&self) -> StrengthTone {
        match self {
            StrengthLabel::NoPassword => StrengthTone::Muted,
            StrengthLabel::Weak => StrengthTone::Destructive,
            StrengthLabel::Fair => StrengthTone::Orange,
            StrengthLabel::Good => StrengthTone::Yellow,
            StrengthLabel::Strong => StrengthTone::Green,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::NoPassword => "No password",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour of the strength meter, one per label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthTone {
    Muted,
    Destructive,
    Orange,
    Yellow,
    Green,
}

impl StrengthTone {
    /// Background utility class used by the meter bar.
    pub fn class(&self) -> &'static str {
        match self {
            StrengthTone::Muted => "bg-muted",
            StrengthTone::Destructive => "bg-destructive",
            StrengthTone::Orange => "bg-orange-500",
            StrengthTone::Yellow => "bg-yellow-500",
            StrengthTone::Green => "bg-green-500",
        }
    }
}

/// Remediation hint attached to an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    TooShort,
    AddLowercase,
    AddUppercase,
    AddNumbers,
    AddSpecial,
    AvoidCommonPatterns,
}

impl Feedback {
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::TooShort => "Use at least 8 characters",
            Feedback::AddLowercase => "Add lowercase letters",
            Feedback::AddUppercase => "Add uppercase letters",
            Feedback::AddNumbers => "Add numbers",
            Feedback::AddSpecial => "Add special characters (!@#$%^&*)",
            Feedback::AvoidCommonPatterns => "Avoid common patterns",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Graded result of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthAssessment {
    pub score: StrengthScore,
    pub label: StrengthLabel,
    /// Ordered: length, lowercase, uppercase, digit, special, common pattern.
    pub feedback: Vec<Feedback>,
}

impl StrengthAssessment {
    /// Assessment for the empty password.
    pub fn no_password() -> Self {
        Self {
            score: StrengthScore::default(),
            label: StrengthLabel::NoPassword,
            feedback: Vec::new(),
        }
    }

    pub fn strength(&self) -> StrengthLabel {
        self.label
    }

    pub fn fill_percentage(&self) -> f64 {
        self.score.fill_percentage()
    }

    pub fn tone(&self) -> StrengthTone {
        self.label.tone()
    }

    /// Feedback as display strings, in order.
    pub fn messages(&self) -> Vec<&'static str> {
        self.feedback.iter().map(Feedback::message).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(StrengthScore::new(-3).value(), 0);
        assert_eq!(StrengthScore::new(4).value(), 4);
        assert_eq!(StrengthScore::new(12).value(), StrengthScore::MAX);
    }

    #[test]
    fn test_label_boundaries() {
        let label = |n| StrengthLabel::from_score(StrengthScore::new(n));
        assert_eq!(label(0), StrengthLabel::Weak);
        assert_eq!(label(2), StrengthLabel::Weak);
        assert_eq!(label(3), StrengthLabel::Fair);
        assert_eq!(label(4), StrengthLabel::Fair);
        assert_eq!(label(5), StrengthLabel::Good);
        assert_eq!(label(6), StrengthLabel::Good);
        assert_eq!(label(7), StrengthLabel::Strong);
    }

    #[test]
    fn test_tone_per_band() {
        let tone = |n| StrengthLabel::from_score(StrengthScore::new(n)).tone();
        assert_eq!(tone(0), StrengthTone::Destructive);
        assert_eq!(tone(2), StrengthTone::Destructive);
        assert_eq!(tone(3), StrengthTone::Orange);
        assert_eq!(tone(4), StrengthTone::Orange);
        assert_eq!(tone(5), StrengthTone::Yellow);
        assert_eq!(tone(6), StrengthTone::Yellow);
        assert_eq!(tone(7), StrengthTone::Green);

        assert_eq!(StrengthLabel::NoPassword.tone().class(), "bg-muted");
        assert_eq!(StrengthLabel::Weak.tone().class(), "bg-destructive");
        assert_eq!(StrengthLabel::Fair.tone().class(), "bg-orange-500");
        assert_eq!(StrengthLabel::Good.tone().class(), "bg-yellow-500");
        assert_eq!(StrengthLabel::Strong.tone().class(), "bg-green-500");
        assert_eq!(StrengthAssessment::no_password().tone(), StrengthTone::Muted);
    }

    #[test]
    fn test_fill_percentage() {
        assert_eq!(StrengthScore::new(0).fill_percentage(), 0.0);
        assert_eq!(StrengthScore::new(7).fill_percentage(), 100.0);
        let half = StrengthScore::new(3).fill_percentage();
        assert!((half - 300.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(StrengthLabel::NoPassword.to_string(), "No password");
        assert_eq!(
            Feedback::AddSpecial.to_string(),
            "Add special characters (!@#$%^&*)"
        );
    }

    #[test]
    fn test_no_password_assessment() {
        let assessment = StrengthAssessment::no_password();
        assert_eq!(assessment.score.value(), 0);
        assert_eq!(assessment.strength(), StrengthLabel::NoPassword);
        assert!(assessment.messages().is_empty());
    }
}
