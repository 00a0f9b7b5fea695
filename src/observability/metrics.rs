//! Request metrics.
//!
//! # Metrics
//! - `onewallet_requests_total` (counter): logical calls by method, outcome
//! - `onewallet_retries_total` (counter): backoff waits by method
//! - `onewallet_request_duration_seconds` (histogram): call latency incl. retries

use std::time::Duration;

use metrics::{counter, histogram};

use crate::http::request::HttpMethod;

/// Record a finished logical call.
pub fn record_request(method: HttpMethod, outcome: &'static str, elapsed: Duration) {
    counter!(
        "onewallet_requests_total",
        "method" => method.as_str(),
        "outcome" => outcome
    )
    .increment(1);
    histogram!("onewallet_request_duration_seconds", "method" => method.as_str())
        .record(elapsed.as_secs_f64());
}

/// Record one scheduled retry.
pub fn record_retry(method: HttpMethod) {
    counter!("onewallet_retries_total", "method" => method.as_str()).increment(1);
}
