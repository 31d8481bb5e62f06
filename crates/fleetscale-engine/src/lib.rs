//! fleetscale-engine — queue-time-driven fleet scaling.
//!
//! Pulls one queue-time sample per poll from a metrics provider, compares
//! it against the configured thresholds, and moves the fleet up or down by
//! one worker, subject to cooldown windows and min/max bounds. When the
//! fleet is pinned at max while still overloaded, an alert channel is
//! invoked instead.
//!
//! # Scaling Algorithm
//!
//! ```text
//! queue_time = sample.average_queue_time_ms
//!
//! if queue_time > upscale_threshold:
//!     if workers == max:            alert, HeldAtLimit   (before cooldown)
//!     if upscale cooldown active:   HeldCooldown
//!     else:                         workers + 1, ScaledUp
//!
//! if queue_time < downscale_threshold:
//!     if workers == min:            HeldSteady           (silent no-op)
//!     if downscale cooldown active: HeldCooldown
//!     else:                         workers - 1, ScaledDown
//!
//! otherwise:                        HeldSteady
//! ```
//!
//! Both directions share a single persisted last-scale timestamp, so any
//! successful action restarts both cooldown windows. An absent timestamp
//! never blocks the first action.
//!
//! All I/O is delegated to collaborator traits ([`MetricsProvider`],
//! [`FleetClient`], [`AlertChannel`]) plus the embedded
//! [`CooldownStore`](fleetscale_state::CooldownStore); the engine itself
//! only decides.

pub mod alerter;
pub mod bounds;
pub mod cooldown;
pub mod error;
pub mod fleet;
pub mod metrics;
pub mod scaler;
pub mod threshold;

pub use alerter::{AlertChannel, Alerter};
pub use bounds::ScaleDirection;
pub use cooldown::CooldownClock;
pub use error::{ScaleError, ScaleResult};
pub use fleet::FleetClient;
pub use metrics::MetricsProvider;
pub use scaler::{Outcome, Scaler};
pub use threshold::Verdict;
