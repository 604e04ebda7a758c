//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    SectionResult, character_variety_section, length_section, pattern_section,
};
use crate::types::{StrengthAssessment, StrengthLabel, StrengthScore};

/// Delay before an async evaluation runs, so fast typing only evaluates once.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates password strength and returns a graded assessment.
///
/// Never fails: the empty password yields score 0 labelled "No password",
/// anything else is scored by length, character variety and common patterns.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthAssessment` with score, label and ordered feedback.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthAssessment {
    if password.expose_secret().is_empty() {
        return StrengthAssessment::no_password();
    }

    // Orchestrator: execute sections in sequence. The pattern penalty must
    // run last so the floor at zero applies to the full total.
    let sections: [(&str, fn(&SecretString) -> SectionResult); 3] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("pattern", pattern_section),
    ];

    let mut points = 0;
    let mut feedback = Vec::new();
    for (_section_name, section_fn) in sections {
        let result = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            section = _section_name,
            points = result.points,
            "password section evaluated"
        );

        points += result.points;
        feedback.extend(result.feedback);
    }

    let score = StrengthScore::new(points);
    StrengthAssessment {
        score,
        label: StrengthLabel::from_score(score),
        feedback,
    }
}

/// Convenience wrapper for callers holding a plain string slice.
pub fn evaluate(password: &str) -> StrengthAssessment {
    evaluate_password_strength(&SecretString::new(password.into()))
}

/// Debounced async evaluation that sends the assessment via channel.
///
/// Waits [`DEBOUNCE`] first. If `token` is cancelled by then (a newer
/// keystroke superseded this one) nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthAssessment>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password evaluation superseded before it started");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let assessment = evaluate_password_strength(password);

    if let Err(_e) = tx.send(assessment).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password assessment: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".into());

        evaluate_password_strength_tx(&pwd, token, tx).await;

        let assessment = rx.recv().await.expect("Should receive assessment");
        assert_eq!(assessment, evaluate("TestPass123!"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("SomePassword123!".into());
        evaluate_password_strength_tx(&pwd, token, tx).await;

        // Sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let pwd = SecretString::new("TestPass123!".into());
        // Must not panic when nobody is listening
        evaluate_password_strength_tx(&pwd, CancellationToken::new(), tx).await;
    }
}
