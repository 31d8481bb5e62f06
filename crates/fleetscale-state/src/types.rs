//! Domain types shared by the Fleetscale decision engine.
//!
//! `ScalingConfig` is built once at startup and passed by reference into
//! the engine; there are no hidden environment lookups inside decision
//! logic. `MetricSample` is one measurement per poll, parsed at the
//! metrics-provider boundary.

use serde::{Deserialize, Serialize};

/// Autoscaling parameters.
///
/// Immutable after startup. `min_workers <= max_workers` is expected but
/// not enforced; a config with `min == max` simply pins the fleet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScalingConfig {
    /// Lower bound on fleet size. Downscaling never goes below this.
    pub min_workers: u32,
    /// Upper bound on fleet size. Upscaling never goes above this.
    pub max_workers: u32,
    /// Minimum seconds between an upscale and the previous scaling action.
    pub upscale_cooldown_secs: u64,
    /// Minimum seconds between a downscale and the previous scaling action.
    pub downscale_cooldown_secs: u64,
    /// Queue time above which the fleet is considered overloaded (strict `>`).
    pub upscale_queue_threshold_ms: f64,
    /// Queue time below which the fleet is considered idle (strict `<`).
    pub downscale_queue_threshold_ms: f64,
    /// Whether to alert when an upscale is needed but the fleet is at max.
    pub notify_on_failed_upscale: bool,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            min_workers: 1,
            max_workers: 4,
            upscale_cooldown_secs: 30,
            downscale_cooldown_secs: 60,
            upscale_queue_threshold_ms: 100.0,
            downscale_queue_threshold_ms: 30.0,
            notify_on_failed_upscale: false,
        }
    }
}

/// One queue-time measurement, covering a single reporting window.
///
/// Only `average_queue_time_ms` drives scaling decisions; the remaining
/// fields are carried for alert payloads and logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricSample {
    /// Average request queuing delay over the window, in milliseconds.
    pub average_queue_time_ms: f64,
    /// Requests per minute over the window.
    pub calls_per_minute: f64,
    /// Slowest response observed in the window, in milliseconds.
    pub max_response_time_ms: f64,
    /// Fastest response observed in the window, in milliseconds.
    pub min_response_time_ms: f64,
    /// Window start, as reported by the provider (RFC 3339).
    pub window_from: String,
    /// Window end, as reported by the provider (RFC 3339).
    pub window_to: String,
}
