//! Prometheus export for request and share metrics.

use metrics::describe_counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

pub const SHARES_CREATED: &str = "polaroid_shares_created_total";
pub const SHARES_REJECTED: &str = "polaroid_share_rejections_total";

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder.
///
/// Must run once at startup, before any metric is recorded. Panics if a
/// recorder is already installed.
pub fn init_metrics() {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }

    describe_counter!(SHARES_CREATED, "Polaroid shares persisted");
    describe_counter!(
        SHARES_REJECTED,
        "Polaroid share submissions rejected by validation"
    );
}

/// Current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}
