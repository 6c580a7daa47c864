//! Optional `metrics` instrumentation.
//!
//! With the `metrics` feature enabled the crate emits:
//!
//! - `netmodels_bfs_traversals_total` (counter)
//! - `netmodels_metric_duration_seconds` (histogram, labelled by `metric`)
//!
//! Without the feature these hooks compile to nothing.

use std::time::Duration;

#[cfg(feature = "metrics")]
pub(crate) fn record_traversal() {
    metrics::counter!("netmodels_bfs_traversals_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_traversal() {}

#[cfg(feature = "metrics")]
pub(crate) fn record_duration(metric: &'static str, elapsed: Duration) {
    metrics::histogram!("netmodels_metric_duration_seconds", "metric" => metric)
        .record(elapsed.as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_duration(_metric: &'static str, _elapsed: Duration) {}
