//! Error types for the Fleetscale decision engine.

use thiserror::Error;

use fleetscale_state::StateError;

/// Result type alias for decision engine operations.
pub type ScaleResult<T> = Result<T, ScaleError>;

/// Errors that can abort (or be swallowed during) one engine invocation.
///
/// `MetricsUnavailable` and `CacheUnavailable` abort the invocation with no
/// state mutation; the scheduler retries on the next tick. `ScaleApplyFailed`
/// aborts before the cooldown timestamp is recorded, so the next invocation
/// retries the same direction. `NotificationFailed` is produced by alert
/// channel implementations and swallowed (logged) by the alerter gate; it
/// never changes an invocation's outcome.
#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("queue metrics unavailable: {0}")]
    MetricsUnavailable(String),

    #[error("fleet scaling failed: {0}")]
    ScaleApplyFailed(String),

    #[error("cooldown cache unavailable: {0}")]
    CacheUnavailable(#[from] StateError),

    #[error("notification delivery failed: {0}")]
    NotificationFailed(String),
}
