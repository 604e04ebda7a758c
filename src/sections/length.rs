//! Length section - awards tiered points for password length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Feedback;

const MIN_LENGTH: usize = 8;
const LENGTH_TIERS: [usize; 3] = [MIN_LENGTH, 12, 16];

/// One point per tier reached; a hint when below the minimum length.
///
/// Length is measured in UTF-16 code units, the unit browser password fields
/// report, so a character outside the Basic Multilingual Plane counts as two.
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = password.expose_secret().encode_utf16().count();
    let mut result = SectionResult::default();

    for tier in LENGTH_TIERS {
        if len >= tier {
            result.award(1);
        }
    }

    if len < MIN_LENGTH {
        result.hint(Feedback::TooShort);
    }
    result
}
