//! Live evaluation for text fields that re-evaluate on every keystroke.

use secrecy::SecretString;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::evaluator::evaluate_password_strength_tx;
use crate::types::PasswordStrengthResult;

/// Debounces a stream of password edits so only the latest one of a burst
/// is evaluated and delivered.
///
/// Must be used from within a tokio runtime.
pub struct LiveEvaluator {
    tx: mpsc::Sender<PasswordStrengthResult>,
    pending: Option<CancellationToken>,
}

impl LiveEvaluator {
    pub fn new(tx: mpsc::Sender<PasswordStrengthResult>) -> Self {
        Self { tx, pending: None }
    }

    /// Supersedes any pending evaluation with one for `password`.
    pub fn update(&mut self, password: SecretString) -> JoinHandle<()> {
        self.cancel();

        let token = CancellationToken::new();
        self.pending = Some(token.clone());
        let tx = self.tx.clone();

        tokio::spawn(async move {
            // Marks the evaluation settled once the task ends, however it ends
            let _settled = token.clone().drop_guard();
            evaluate_password_strength_tx(&password, token, tx).await;
        })
    }

    /// Cancels the pending evaluation, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    /// Whether an evaluation is still waiting out its debounce or waiting
    /// to be delivered. False once it has been delivered or cancelled.
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_cancelled())
    }
}

impl Drop for LiveEvaluator {
    fn drop(&mut self) {
        self.cancel();
    }
}
