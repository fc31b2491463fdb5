use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("failed to install Prometheus recorder: {e}"))?;

    // Pre-register so they appear before the first request.
    for surface in ["dashboard", "kpis", "pnl_distribution", "archetypes", "daily_volume", "ws"] {
        counter!("dashboard_recomputations_total", "surface" => surface).absolute(0);
    }
    counter!("selection_rejected_total").absolute(0);

    gauge!("trade_rows_loaded").set(0.0);
    gauge!("cluster_rows_loaded").set(0.0);

    histogram!("dashboard_compute_seconds").record(0.0);

    Ok(handle)
}

/// A handle backed by a recorder that is not installed globally.
/// Used where a process-wide recorder may already exist (tests).
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}
