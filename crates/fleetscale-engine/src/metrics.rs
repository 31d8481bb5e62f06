//! Metrics provider seam and boundary parsing.
//!
//! Providers return a nested JSON envelope of the shape
//!
//! ```text
//! { "metrics": [ { "name": "...",
//!                  "timeslices": [ { "from": "...", "to": "...",
//!                                    "values": { "calls_per_minute": ...,
//!                                                "average_response_time": ...,
//!                                                "max_response_time": ...,
//!                                                "min_response_time": ... } } ] } ] }
//! ```
//!
//! `parse_queue_metric` turns the first timeslice of the first metric into
//! a strongly-typed [`MetricSample`], rejecting missing fields and empty
//! arrays as [`ScaleError::MetricsUnavailable`].

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use fleetscale_state::MetricSample;

use crate::error::{ScaleError, ScaleResult};

/// Fetches one queue-time sample per engine invocation.
///
/// Implementations own all transport concerns (HTTP client, auth, retry at
/// their own discretion) and report failures as
/// [`ScaleError::MetricsUnavailable`].
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    async fn fetch_queue_metric(&self) -> ScaleResult<MetricSample>;
}

#[derive(Debug, Deserialize)]
struct MetricEnvelope {
    metrics: Vec<RawMetric>,
}

#[derive(Debug, Deserialize)]
struct RawMetric {
    name: String,
    timeslices: Vec<RawTimeslice>,
}

#[derive(Debug, Deserialize)]
struct RawTimeslice {
    from: String,
    to: String,
    values: RawValues,
}

#[derive(Debug, Deserialize)]
struct RawValues {
    calls_per_minute: f64,
    average_response_time: f64,
    max_response_time: f64,
    min_response_time: f64,
}

/// Parse a provider response body into a [`MetricSample`].
///
/// Uses the first timeslice of the first reported metric; the queuing
/// delay is the timeslice's average response time.
pub fn parse_queue_metric(body: &str) -> ScaleResult<MetricSample> {
    let envelope: MetricEnvelope = serde_json::from_str(body)
        .map_err(|e| ScaleError::MetricsUnavailable(format!("malformed payload: {e}")))?;

    let metric = envelope
        .metrics
        .into_iter()
        .next()
        .ok_or_else(|| ScaleError::MetricsUnavailable("no metrics in payload".to_string()))?;

    let timeslice = metric
        .timeslices
        .into_iter()
        .next()
        .ok_or_else(|| ScaleError::MetricsUnavailable("metric has no timeslices".to_string()))?;

    debug!(
        metric = %metric.name,
        queue_time_ms = timeslice.values.average_response_time,
        "queue metric parsed"
    );

    Ok(MetricSample {
        average_queue_time_ms: timeslice.values.average_response_time,
        calls_per_minute: timeslice.values.calls_per_minute,
        max_response_time_ms: timeslice.values.max_response_time,
        min_response_time_ms: timeslice.values.min_response_time,
        window_from: timeslice.from,
        window_to: timeslice.to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "metrics": [{
            "name": "WebFrontend/QueueTime",
            "timeslices": [{
                "from": "2026-08-30T12:00:00Z",
                "to": "2026-08-30T12:01:00Z",
                "values": {
                    "calls_per_minute": 840.0,
                    "average_response_time": 125.5,
                    "max_response_time": 930.0,
                    "min_response_time": 4.0
                }
            }]
        }]
    }"#;

    #[test]
    fn parses_first_timeslice_of_first_metric() {
        let sample = parse_queue_metric(BODY).unwrap();
        assert_eq!(sample.average_queue_time_ms, 125.5);
        assert_eq!(sample.calls_per_minute, 840.0);
        assert_eq!(sample.max_response_time_ms, 930.0);
        assert_eq!(sample.min_response_time_ms, 4.0);
        assert_eq!(sample.window_from, "2026-08-30T12:00:00Z");
        assert_eq!(sample.window_to, "2026-08-30T12:01:00Z");
    }

    #[test]
    fn malformed_json_is_metrics_unavailable() {
        let err = parse_queue_metric("{not json").unwrap_err();
        assert!(matches!(err, ScaleError::MetricsUnavailable(_)));
    }

    #[test]
    fn missing_value_field_is_metrics_unavailable() {
        let body = BODY.replace("average_response_time", "avg_response_time");
        let err = parse_queue_metric(&body).unwrap_err();
        assert!(matches!(err, ScaleError::MetricsUnavailable(_)));
    }

    #[test]
    fn empty_metrics_array_is_metrics_unavailable() {
        let err = parse_queue_metric(r#"{"metrics": []}"#).unwrap_err();
        assert!(matches!(err, ScaleError::MetricsUnavailable(_)));
    }

    #[test]
    fn empty_timeslices_is_metrics_unavailable() {
        let body = r#"{"metrics": [{"name": "QueueTime", "timeslices": []}]}"#;
        let err = parse_queue_metric(body).unwrap_err();
        assert!(matches!(err, ScaleError::MetricsUnavailable(_)));
    }
}
