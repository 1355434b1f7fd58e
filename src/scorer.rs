//! Password scorer - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::criteria::{
    CriterionCheck, digit_criterion, lowercase_criterion, symbol_criterion, uppercase_criterion,
};
use crate::types::{ScoreEvaluation, StrengthScore};

/// Passwords shorter than this many characters score zero unconditionally;
/// no criterion is evaluated for them.
pub const MIN_SCORED_LENGTH: usize = 6;

/// Time the channel variant waits before scoring, so a fast burst of
/// keystrokes can cancel superseded evaluations.
#[cfg(feature = "async")]
const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(150);

/// Scores a password against the four complexity criteria.
///
/// # Arguments
/// * `password` - The password to score
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `ScoreEvaluation` whose score counts the satisfied criteria. The score
/// is `None` only when the token was cancelled mid-evaluation.
pub fn score_password(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> ScoreEvaluation {
    if password.expose_secret().chars().count() < MIN_SCORED_LENGTH {
        return ScoreEvaluation {
            score: Some(StrengthScore::ZERO),
        };
    }

    // Orchestrator: each criterion contributes at most one point
    let criteria: [CriterionCheck; 4] = [
        digit_criterion,
        lowercase_criterion,
        uppercase_criterion,
        symbol_criterion,
    ];

    let mut points: u8 = 0;
    for criterion in criteria {
        // Check cancellation before each criterion (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("password scoring cancelled");
                    return ScoreEvaluation { score: None };
                }
            }
        }

        if criterion(password) {
            points += 1;
        }
    }

    ScoreEvaluation {
        score: Some(StrengthScore::new(points)),
    }
}

/// Async version that sends the evaluation via channel.
///
/// Waits one debounce interval first; callers cancel the token when a newer
/// keystroke makes this evaluation stale.
#[cfg(feature = "async")]
pub async fn score_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("scoring is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    let evaluation = score_password(password, Some(token));

    if tx.send(evaluation).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("receiver dropped before the score evaluation was delivered");
    }
}
