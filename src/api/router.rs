use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    let ops = Router::new()
        .route("/health", get(handlers::ops::health_check))
        .route("/metrics", get(handlers::ops::render_metrics));

    let api = Router::new()
        // Filter options
        .route("/api/regimes", get(handlers::reference::regimes))
        // Whole page
        .route("/api/dashboard", get(handlers::dashboard::bundle))
        .route("/api/kpis", get(handlers::dashboard::kpis))
        // Charts
        .route("/api/charts/pnl-distribution", get(handlers::charts::pnl_by_regime))
        .route("/api/charts/archetypes", get(handlers::charts::archetypes))
        .route("/api/charts/daily-volume", get(handlers::charts::daily_volume))
        // Cluster table
        .route("/api/clusters", get(handlers::reference::clusters))
        // Live filter updates
        .route("/ws", get(handlers::ws::handler));

    // The front-end is served from elsewhere; the API is read-only.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    ops.merge(api)
        .fallback(handlers::ops::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
