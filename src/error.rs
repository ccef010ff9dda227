use thiserror::Error;

/// Failures surfaced at the binary edge. Gameplay itself has no error
/// states; collisions and unreachable apples are ordinary outcomes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("failed to encode run summary: {0}")]
    Summary(#[from] serde_json::Error),
}
