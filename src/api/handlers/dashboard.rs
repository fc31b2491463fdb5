use axum::extract::{Query, State};
use axum::Json;

use crate::analytics::{build_dashboard, compute_kpis, filter_by_regime, DashboardBundle, KpiPanel};
use crate::api::recompute;
use crate::api::selection::SelectionQuery;
use crate::errors::AppError;
use crate::AppState;

pub async fn bundle(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<DashboardBundle>, AppError> {
    let selection = query.resolve("dashboard")?;
    let bundle = recompute("dashboard", || build_dashboard(&state.dataset, &selection));

    tracing::debug!(
        regimes = selection.len(),
        active_traders = bundle.kpis.kpis.active_traders,
        "Dashboard recomputed"
    );
    Ok(Json(bundle))
}

pub async fn kpis(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<KpiPanel>, AppError> {
    let selection = query.resolve("kpis")?;
    let panel = recompute("kpis", || {
        let filtered = filter_by_regime(state.dataset.trades(), &selection);
        KpiPanel::from(compute_kpis(&filtered))
    });
    Ok(Json(panel))
}
