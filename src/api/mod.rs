pub mod handlers;
pub mod router;
pub mod selection;
pub mod ws_types;

use std::time::Instant;

/// Run one recomputation, recording its latency and which surface asked for it.
pub(crate) fn recompute<T>(surface: &'static str, f: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let out = f();
    metrics::histogram!("dashboard_compute_seconds").record(started.elapsed().as_secs_f64());
    metrics::counter!("dashboard_recomputations_total", "surface" => surface).increment(1);
    out
}
