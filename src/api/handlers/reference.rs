use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::analytics::annotate_archetypes;
use crate::models::{Regime, RegimeSelection};
use crate::AppState;

#[derive(Serialize)]
pub struct RegimeOptions {
    pub options: Vec<&'static str>,
    pub default: Vec<&'static str>,
}

/// Sidebar filter options, in display order.
pub async fn regimes() -> Json<RegimeOptions> {
    Json(RegimeOptions {
        options: Regime::ALL.iter().map(|r| r.as_str()).collect(),
        default: RegimeSelection::default().labels(),
    })
}

/// Every cluster row with its archetype label, including unmapped ids.
pub async fn clusters(State(state): State<AppState>) -> Response {
    Json(annotate_archetypes(state.dataset.clusters())).into_response()
}
