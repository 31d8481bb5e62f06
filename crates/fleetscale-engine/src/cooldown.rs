//! Cooldown clock — answers whether enough time has passed since the last
//! scaling action for a given direction's window.
//!
//! One timestamp is shared by both directions under a single fixed key, so
//! a successful upscale also restarts the downscale window (and vice
//! versa). An absent timestamp never blocks the first action.

use tracing::debug;

use fleetscale_state::{CooldownStore, ScalingConfig, StateResult};

use crate::bounds::ScaleDirection;

/// The fixed cache key under which the last-scale timestamp is stored.
pub const LAST_SCALE_KEY: &str = "last-scale";

/// Cooldown bookkeeping over the persistent store.
#[derive(Clone)]
pub struct CooldownClock {
    store: CooldownStore,
}

impl CooldownClock {
    pub fn new(store: CooldownStore) -> Self {
        Self { store }
    }

    /// Seconds elapsed since the last scaling action, or `None` if no
    /// action has ever been recorded.
    pub fn elapsed(&self, now: u64) -> StateResult<Option<u64>> {
        Ok(self
            .store
            .last_scale_at(LAST_SCALE_KEY)?
            .map(|last| now.saturating_sub(last)))
    }

    /// Whether `direction`'s cooldown window has passed.
    ///
    /// Satisfied unconditionally when no scaling action has ever been
    /// recorded.
    pub fn is_satisfied(
        &self,
        direction: ScaleDirection,
        config: &ScalingConfig,
        now: u64,
    ) -> StateResult<bool> {
        let window = match direction {
            ScaleDirection::Up => config.upscale_cooldown_secs,
            ScaleDirection::Down => config.downscale_cooldown_secs,
        };
        match self.elapsed(now)? {
            None => Ok(true),
            Some(elapsed) => {
                let satisfied = elapsed >= window;
                if !satisfied {
                    debug!(?direction, elapsed, window, "cooldown window active");
                }
                Ok(satisfied)
            }
        }
    }

    /// Persist `now` as the last-scale timestamp, overwriting any previous
    /// value. Called only after a successful fleet-size change, regardless
    /// of direction.
    pub fn record_scale(&self, now: u64) -> StateResult<()> {
        self.store.set_last_scale_at(LAST_SCALE_KEY, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> CooldownClock {
        CooldownClock::new(CooldownStore::open_in_memory().unwrap())
    }

    #[test]
    fn no_recorded_scale_is_always_satisfied() {
        let clock = clock();
        let config = ScalingConfig::default();
        assert!(clock
            .is_satisfied(ScaleDirection::Up, &config, 1000)
            .unwrap());
        assert!(clock
            .is_satisfied(ScaleDirection::Down, &config, 1000)
            .unwrap());
        assert_eq!(clock.elapsed(1000).unwrap(), None);
    }

    #[test]
    fn satisfied_once_window_has_passed() {
        let clock = clock();
        let config = ScalingConfig::default(); // up 30s, down 60s
        clock.record_scale(1000).unwrap();

        assert!(!clock
            .is_satisfied(ScaleDirection::Up, &config, 1020)
            .unwrap());
        assert!(clock
            .is_satisfied(ScaleDirection::Up, &config, 1030)
            .unwrap());
        assert!(clock
            .is_satisfied(ScaleDirection::Up, &config, 1031)
            .unwrap());
    }

    #[test]
    fn directions_use_their_own_windows() {
        let clock = clock();
        let config = ScalingConfig::default();
        clock.record_scale(1000).unwrap();

        // 45s elapsed: past the 30s upscale window, inside the 60s one.
        assert!(clock
            .is_satisfied(ScaleDirection::Up, &config, 1045)
            .unwrap());
        assert!(!clock
            .is_satisfied(ScaleDirection::Down, &config, 1045)
            .unwrap());
    }

    #[test]
    fn record_overwrites_and_restarts_both_windows() {
        let clock = clock();
        let config = ScalingConfig::default();
        clock.record_scale(1000).unwrap();
        clock.record_scale(1040).unwrap();

        assert_eq!(clock.elapsed(1050).unwrap(), Some(10));
        assert!(!clock
            .is_satisfied(ScaleDirection::Up, &config, 1050)
            .unwrap());
    }

    #[test]
    fn elapsed_saturates_on_clock_skew() {
        let clock = clock();
        clock.record_scale(2000).unwrap();
        // Wall clock moved backwards; treat as zero elapsed, not underflow.
        assert_eq!(clock.elapsed(1990).unwrap(), Some(0));
    }
}
