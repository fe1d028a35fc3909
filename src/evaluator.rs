//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::requirements::check_requirements;
use crate::sections::{
    SectionResult, character_variety_section, length_section, pattern_penalty_section,
};
use crate::types::{CrackTime, PasswordScore, PasswordStrengthResult, StrengthLevel};

/// Quiet period before a live evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates password strength.
///
/// Total and side-effect free: every input, including the empty string,
/// yields a well-formed result, and evaluating the same password twice
/// yields equal results.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordStrengthResult` with score, level, feedback, crack-time
/// estimate and requirement checklist. An empty password yields
/// [`PasswordStrengthResult::empty`].
pub fn evaluate_password_strength(password: &SecretString) -> PasswordStrengthResult {
    if password.expose_secret().is_empty() {
        return PasswordStrengthResult::empty();
    }

    // Orchestrator: bonuses first, then penalties
    let sections: [(&str, fn(&SecretString) -> SectionResult); 3] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("penalty", pattern_penalty_section),
    ];

    let mut raw: i64 = 0;
    for (_section_name, section_fn) in sections {
        let delta = section_fn(password);
        #[cfg(feature = "tracing")]
        tracing::trace!(section = _section_name, delta, "password section scored");
        raw += delta;
    }

    let score = PasswordScore::new(raw);
    let level = StrengthLevel::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!(raw, score = score.value(), ?level, "password evaluated");

    PasswordStrengthResult {
        score,
        level,
        feedback: level.feedback(),
        time_to_crack: CrackTime::from_score(score),
        requirements: check_requirements(password),
    }
}

/// Debounced evaluation that sends the result via channel.
///
/// Waits [`DEBOUNCE`] first. If `token` is cancelled at any point before the
/// result has been handed to the channel, nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordStrengthResult>,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password evaluation superseded before it started");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    if token.is_cancelled() {
        return;
    }

    let evaluation = evaluate_password_strength(password);

    // A full channel must not outlive cancellation
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password evaluation superseded while waiting to be delivered");
        }
        sent = tx.send(evaluation) => {
            if sent.is_err() {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send password evaluation result: receiver dropped");
            }
        }
    }
}
