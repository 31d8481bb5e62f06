//! Alerter gate — failed-upscale notification boundary.
//!
//! The gate keeps a consecutive failed-upscale counter and forwards every
//! qualifying event to the channel; it deliberately adds no suppression of
//! its own. While the fleet stays pinned at max and overloaded, the
//! channel is invoked on every poll (pacing and dedup, if wanted, belong
//! to the channel implementation). Delivery is best-effort: channel errors
//! are logged and swallowed, never surfaced to the decision engine.

use async_trait::async_trait;
use tracing::{debug, warn};

use fleetscale_state::MetricSample;

use crate::error::ScaleResult;

/// Delivery transport for failed-upscale alerts.
///
/// Failures are reported as
/// [`ScaleError::NotificationFailed`](crate::ScaleError::NotificationFailed);
/// the gate swallows them.
#[async_trait]
pub trait AlertChannel: Send + Sync {
    /// Deliver one "at max workers but still overloaded" alert.
    async fn send(
        &self,
        current_workers: u32,
        sample: &MetricSample,
        cooldown_secs: u64,
        threshold_ms: f64,
    ) -> ScaleResult<()>;
}

/// Pass-through gate in front of the alert channel.
///
/// Holds `None` when failed-upscale notification is disabled in config.
pub struct Alerter<A: AlertChannel> {
    channel: Option<A>,
    failed_upscale_events: u64,
}

impl<A: AlertChannel> Alerter<A> {
    pub fn new(channel: Option<A>) -> Self {
        Self {
            channel,
            failed_upscale_events: 0,
        }
    }

    /// Record a failed upscale and forward it to the channel, if any.
    pub async fn failed_upscale_alert(
        &mut self,
        current_workers: u32,
        sample: &MetricSample,
        cooldown_secs: u64,
        threshold_ms: f64,
    ) {
        self.failed_upscale_events += 1;
        debug!(
            current_workers,
            consecutive = self.failed_upscale_events,
            queue_time_ms = sample.average_queue_time_ms,
            "upscale blocked at max workers"
        );

        let Some(channel) = &self.channel else {
            return;
        };
        if let Err(e) = channel
            .send(current_workers, sample, cooldown_secs, threshold_ms)
            .await
        {
            warn!(error = %e, "failed-upscale alert not delivered");
        }
    }

    /// Clear the failure bookkeeping. Called after any successful scale
    /// action, up or down.
    pub fn restart_event_counters(&mut self) {
        self.failed_upscale_events = 0;
    }

    /// Consecutive failed-upscale events since the last successful scale.
    pub fn failed_upscale_events(&self) -> u64 {
        self.failed_upscale_events
    }
}
