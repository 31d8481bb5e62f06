//! Scaler — the per-poll scaling decision engine.
//!
//! Pulls one queue-time sample and the current fleet size from the
//! collaborators, classifies the load, and performs at most one ±1 fleet
//! change per invocation. The actual I/O (metrics fetch, scale apply,
//! alert delivery) lives behind the collaborator traits.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::{debug, error, info};

use fleetscale_state::{CooldownStore, ScalingConfig};

use crate::alerter::{AlertChannel, Alerter};
use crate::bounds::{self, ScaleDirection};
use crate::cooldown::CooldownClock;
use crate::error::ScaleResult;
use crate::fleet::FleetClient;
use crate::metrics::MetricsProvider;
use crate::threshold::{self, Verdict};

/// Result of one decision-engine invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Fleet grew by one worker.
    ScaledUp,
    /// Fleet shrank by one worker.
    ScaledDown,
    /// Load is between the thresholds, or a downscale was blocked at min.
    HeldSteady,
    /// Upscale needed but the fleet is already at max; alert raised.
    HeldAtLimit,
    /// A scaling move was due but its cooldown window is still active.
    HeldCooldown,
}

/// The decision engine.
///
/// `autoscale()` takes `&mut self`, so a single `Scaler` cannot run
/// overlapping invocations — the read-decide-write sequence over the
/// cooldown timestamp and fleet size is not transactional, and a second
/// concurrent invocation could double-scale inside one cooldown window.
/// Hosts that poll from multiple tasks must route through one `Scaler`
/// (e.g. behind a `tokio::sync::Mutex`).
pub struct Scaler<M, F, A>
where
    M: MetricsProvider,
    F: FleetClient,
    A: AlertChannel,
{
    config: ScalingConfig,
    metrics: M,
    fleet: F,
    clock: CooldownClock,
    alerter: Alerter<A>,
}

impl<M, F, A> Scaler<M, F, A>
where
    M: MetricsProvider,
    F: FleetClient,
    A: AlertChannel,
{
    /// Create a new scaler.
    ///
    /// `alert_channel` is only attached when `config.notify_on_failed_upscale`
    /// is set; otherwise limit-reached events are counted but not delivered.
    pub fn new(
        config: ScalingConfig,
        metrics: M,
        fleet: F,
        store: CooldownStore,
        alert_channel: Option<A>,
    ) -> Self {
        let channel = if config.notify_on_failed_upscale {
            alert_channel
        } else {
            None
        };
        Self {
            config,
            metrics,
            fleet,
            clock: CooldownClock::new(store),
            alerter: Alerter::new(channel),
        }
    }

    /// Run one scaling decision.
    ///
    /// Collaborator failures abort the invocation with no state mutation:
    /// no cooldown timestamp is recorded and the alerter counters are left
    /// untouched, so the next poll retries the same decision.
    pub async fn autoscale(&mut self) -> ScaleResult<Outcome> {
        let sample = self.metrics.fetch_queue_metric().await?;
        let current = self.fleet.current_size().await?;
        let now = epoch_secs();

        match threshold::evaluate(&sample, &self.config) {
            Verdict::Steady => {
                debug!(
                    current,
                    queue_time_ms = sample.average_queue_time_ms,
                    "queue time between thresholds"
                );
                Ok(Outcome::HeldSteady)
            }
            Verdict::NeedsUpscale => {
                // The limit check runs before the cooldown check: an
                // operator must hear about a fleet pinned at max while
                // overloaded on every poll, cooldown or not.
                if !bounds::can_move(ScaleDirection::Up, current, &self.config) {
                    self.alerter
                        .failed_upscale_alert(
                            current,
                            &sample,
                            self.config.upscale_cooldown_secs,
                            self.config.upscale_queue_threshold_ms,
                        )
                        .await;
                    return Ok(Outcome::HeldAtLimit);
                }
                if !self
                    .clock
                    .is_satisfied(ScaleDirection::Up, &self.config, now)?
                {
                    return Ok(Outcome::HeldCooldown);
                }

                self.fleet.set_size(current + 1).await?;
                self.clock.record_scale(now)?;
                self.alerter.restart_event_counters();
                info!(
                    from = current,
                    to = current + 1,
                    queue_time_ms = sample.average_queue_time_ms,
                    "scaled up"
                );
                Ok(Outcome::ScaledUp)
            }
            Verdict::NeedsDownscale => {
                // No alert path here: an idle fleet at min is fine.
                if !bounds::can_move(ScaleDirection::Down, current, &self.config) {
                    debug!(current, "downscale blocked at min workers");
                    return Ok(Outcome::HeldSteady);
                }
                if !self
                    .clock
                    .is_satisfied(ScaleDirection::Down, &self.config, now)?
                {
                    return Ok(Outcome::HeldCooldown);
                }

                self.fleet.set_size(current - 1).await?;
                self.clock.record_scale(now)?;
                self.alerter.restart_event_counters();
                info!(
                    from = current,
                    to = current - 1,
                    queue_time_ms = sample.average_queue_time_ms,
                    "scaled down"
                );
                Ok(Outcome::ScaledDown)
            }
        }
    }

    /// Run the polling loop.
    ///
    /// Tick failures are logged and the loop keeps going; retry is simply
    /// the next tick.
    pub async fn run(
        &mut self,
        interval: Duration,
        mut shutdown: tokio::sync::watch::Receiver<bool>,
    ) {
        info!(interval_secs = interval.as_secs(), "scaler started");

        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {
                    match self.autoscale().await {
                        Ok(outcome) => debug!(?outcome, "scaling tick complete"),
                        Err(e) => error!(error = %e, "scaling tick failed"),
                    }
                }
                _ = shutdown.changed() => {
                    info!("scaler shutting down");
                    break;
                }
            }
        }
    }

    /// Consecutive failed-upscale events since the last successful scale.
    pub fn failed_upscale_events(&self) -> u64 {
        self.alerter.failed_upscale_events()
    }
}

fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
