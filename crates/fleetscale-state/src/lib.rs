//! fleetscale-state — embedded cooldown store for Fleetscale.
//!
//! Backed by [redb](https://docs.rs/redb), persists the timestamp of the
//! last scaling action so that cooldown windows survive process restarts.
//! Also home to the domain types shared by the decision engine:
//! [`ScalingConfig`] and [`MetricSample`].
//!
//! # Architecture
//!
//! A single table keyed by `&str` with JSON-serialized `u64` epoch values.
//! Both scaling directions share one fixed key (`"last-scale"`), so an
//! upscale also restarts the downscale window and vice versa.
//!
//! The `CooldownStore` is `Clone` + `Send` + `Sync` (backed by
//! `Arc<Database>`) and can be shared across async tasks.

pub mod error;
pub mod store;
pub mod tables;
pub mod types;

pub use error::{StateError, StateResult};
pub use store::CooldownStore;
pub use types::*;
