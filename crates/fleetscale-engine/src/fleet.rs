//! Fleet-scaling client seam.

use async_trait::async_trait;

use crate::error::ScaleResult;

/// Reports and applies the worker count on the hosting platform.
///
/// The engine reads the size fresh on every invocation — it is never
/// cached across polls. Failures on either method are reported as
/// [`ScaleError::ScaleApplyFailed`](crate::ScaleError::ScaleApplyFailed)
/// and abort the invocation before any cooldown bookkeeping.
#[async_trait]
pub trait FleetClient: Send + Sync {
    /// Current number of workers in the fleet.
    async fn current_size(&self) -> ScaleResult<u32>;

    /// Set the fleet to exactly `new_size` workers.
    async fn set_size(&self, new_size: u32) -> ScaleResult<()>;
}
