use axum::extract::{Query, State};
use axum::Json;

use crate::analytics::{
    archetype_scatter, daily_volume_series, filter_by_regime, pnl_distribution, DailyVolume,
    RegimeDistribution, ScatterPoint,
};
use crate::api::recompute;
use crate::api::selection::SelectionQuery;
use crate::errors::AppError;
use crate::AppState;

/// Box chart data: closed PnL by regime.
pub async fn pnl_by_regime(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<Vec<RegimeDistribution>>, AppError> {
    let selection = query.resolve("pnl_distribution")?;
    let dist = recompute("pnl_distribution", || {
        pnl_distribution(&filter_by_regime(state.dataset.trades(), &selection))
    });
    Ok(Json(dist))
}

/// Archetype map. Not affected by the regime filter.
pub async fn archetypes(State(state): State<AppState>) -> Json<Vec<ScatterPoint>> {
    let clusters = state.dataset.clusters();
    let points = recompute("archetypes", || archetype_scatter(clusters));

    if points.len() < clusters.len() {
        tracing::debug!(
            dropped = clusters.len() - points.len(),
            "Cluster rows without positive activity left off the archetype map"
        );
    }
    let unmapped = points.iter().filter(|p| !p.archetype.is_known()).count();
    if unmapped > 0 {
        tracing::debug!(unmapped, "Cluster ids outside the archetype table plotted as Unknown");
    }
    Json(points)
}

pub async fn daily_volume(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<Vec<DailyVolume>>, AppError> {
    let selection = query.resolve("daily_volume")?;
    let series = recompute("daily_volume", || {
        daily_volume_series(&filter_by_regime(state.dataset.trades(), &selection))
    });
    Ok(Json(series))
}
