//! Password evaluation sections
//!
//! Each section scores one aspect of the password and reports what is missing.

mod length;
mod pattern;
mod variety;

pub use length::length_section;
pub use pattern::pattern_section;
pub use variety::character_variety_section;

use crate::types::Feedback;

/// Outcome of a single section.
/// - `points` - signed contribution to the score (penalties are negative)
/// - `feedback` - hints appended in order when a check fails
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionResult {
    pub points: i64,
    pub feedback: Vec<Feedback>,
}

impl SectionResult {
    fn award(&mut self, points: i64) {
        self.points += points;
    }

    fn hint(&mut self, feedback: Feedback) {
        self.feedback.push(feedback);
    }
}
