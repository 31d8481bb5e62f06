//! Threshold evaluation — classifies one sample against the configured
//! queue-time thresholds.

use fleetscale_state::{MetricSample, ScalingConfig};

/// Classification of the current load relative to the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Queue time is above the upscale threshold.
    NeedsUpscale,
    /// Queue time is below the downscale threshold.
    NeedsDownscale,
    /// Queue time sits between the thresholds (boundaries included).
    Steady,
}

/// Evaluate one sample against the config. Pure function of its inputs.
///
/// The upscale check is strict greater-than and the downscale check is
/// strict less-than, so a sample exactly on either threshold falls through
/// to `Steady`.
pub fn evaluate(sample: &MetricSample, config: &ScalingConfig) -> Verdict {
    if sample.average_queue_time_ms > config.upscale_queue_threshold_ms {
        Verdict::NeedsUpscale
    } else if sample.average_queue_time_ms < config.downscale_queue_threshold_ms {
        Verdict::NeedsDownscale
    } else {
        Verdict::Steady
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(queue_time_ms: f64) -> MetricSample {
        MetricSample {
            average_queue_time_ms: queue_time_ms,
            calls_per_minute: 120.0,
            max_response_time_ms: 900.0,
            min_response_time_ms: 5.0,
            window_from: "2026-08-30T12:00:00Z".to_string(),
            window_to: "2026-08-30T12:01:00Z".to_string(),
        }
    }

    #[test]
    fn above_upscale_threshold_needs_upscale() {
        let config = ScalingConfig::default(); // up 100ms, down 30ms
        assert_eq!(evaluate(&sample(400.0), &config), Verdict::NeedsUpscale);
        assert_eq!(evaluate(&sample(100.1), &config), Verdict::NeedsUpscale);
    }

    #[test]
    fn below_downscale_threshold_needs_downscale() {
        let config = ScalingConfig::default();
        assert_eq!(evaluate(&sample(10.0), &config), Verdict::NeedsDownscale);
        assert_eq!(evaluate(&sample(29.9), &config), Verdict::NeedsDownscale);
    }

    #[test]
    fn between_thresholds_is_steady() {
        let config = ScalingConfig::default();
        assert_eq!(evaluate(&sample(50.0), &config), Verdict::Steady);
    }

    #[test]
    fn exactly_at_upscale_threshold_is_steady() {
        let config = ScalingConfig::default();
        // Strict `>` — equality falls through.
        assert_eq!(evaluate(&sample(100.0), &config), Verdict::Steady);
    }

    #[test]
    fn exactly_at_downscale_threshold_is_steady() {
        let config = ScalingConfig::default();
        // Strict `<` — equality falls through.
        assert_eq!(evaluate(&sample(30.0), &config), Verdict::Steady);
    }
}
