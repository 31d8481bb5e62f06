//! Bounds guard — keeps the fleet inside `[min_workers, max_workers]`.

use fleetscale_state::ScalingConfig;

/// Direction of a proposed scaling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleDirection {
    Up,
    Down,
}

/// Whether a one-worker move in `direction` stays within the configured
/// bounds. A forbidden upscale is the "limit reached while overloaded"
/// condition consumed by the alerter; a forbidden downscale is a silent
/// no-op.
pub fn can_move(direction: ScaleDirection, current: u32, config: &ScalingConfig) -> bool {
    match direction {
        ScaleDirection::Up => current < config.max_workers,
        ScaleDirection::Down => current > config.min_workers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(min: u32, max: u32) -> ScalingConfig {
        ScalingConfig {
            min_workers: min,
            max_workers: max,
            ..ScalingConfig::default()
        }
    }

    #[test]
    fn upscale_allowed_below_max() {
        assert!(can_move(ScaleDirection::Up, 3, &config(1, 4)));
    }

    #[test]
    fn upscale_forbidden_at_max() {
        assert!(!can_move(ScaleDirection::Up, 4, &config(1, 4)));
    }

    #[test]
    fn downscale_allowed_above_min() {
        assert!(can_move(ScaleDirection::Down, 2, &config(1, 4)));
    }

    #[test]
    fn downscale_forbidden_at_min() {
        assert!(!can_move(ScaleDirection::Down, 1, &config(1, 4)));
    }

    #[test]
    fn pinned_fleet_cannot_move_either_way() {
        let config = config(2, 2);
        assert!(!can_move(ScaleDirection::Up, 2, &config));
        assert!(!can_move(ScaleDirection::Down, 2, &config));
    }
}
