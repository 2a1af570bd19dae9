// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize telemetry (logs + metrics).
///
/// `RUST_LOG` wins over `default_filter`. Safe to call more than once; later
/// calls only log a warning.
pub fn init_telemetry(default_filter: &str) {
    // 1. Initialize Tracing (Logs)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    if tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_err()
    {
        tracing::warn!("Tracing subscriber already set. Telemetry re-initialized?");
    }

    // 2. Initialize Metrics (Prometheus)
    if PROM_HANDLE.get().is_none() {
        match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                let _ = PROM_HANDLE.set(handle);
            }
            Err(e) => tracing::warn!("Prometheus recorder not installed: {}", e),
        }
    }

    metrics::describe_counter!("relief_records_admitted_total", "Records accepted by the verification sink");
    metrics::describe_counter!("relief_records_rejected_total", "Submissions refused, labelled by reason");
    metrics::describe_counter!("relief_rollbacks_total", "Admissions rolled back after a sink failure");
    metrics::describe_histogram!("relief_submit_duration_seconds", "Time spent in the admission pipeline");

    metrics::gauge!("relief_node_up", 1.0);
}

/// Get the Prometheus text exposition.
pub fn render_metrics() -> String {
    if let Some(handle) = PROM_HANDLE.get() {
        handle.render()
    } else {
        "# metrics not initialized".to_string()
    }
}
