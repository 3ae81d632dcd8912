//! Load and render metrics, exported via the Prometheus recorder.

use map_features::BatchReport;
use metrics::{counter, gauge};

/// Record a successful load and the batch it produced.
pub fn record_load(report: &BatchReport, features: usize) {
    counter!("warning_map_loads_total").increment(1);
    counter!("warning_map_rows_total").increment(report.rows as u64);
    counter!("warning_map_rows_skipped_total").increment(report.skipped as u64);
    counter!("warning_map_buffer_failures_total").increment(report.buffer_failures() as u64);
    gauge!("warning_map_features").set(features as f64);
}

pub fn record_load_failure() {
    counter!("warning_map_load_failures_total").increment(1);
}
