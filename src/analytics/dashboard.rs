use serde::Serialize;

use crate::data::Dataset;
use crate::models::RegimeSelection;

use super::{
    archetype_scatter, compute_kpis, daily_volume_series, filter_by_regime, pnl_distribution,
    DailyVolume, KpiPanel, RegimeDistribution, ScatterPoint,
};

/// Everything the page needs for one filter selection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardBundle {
    pub selection: RegimeSelection,
    pub kpis: KpiPanel,
    pub pnl_distribution: Vec<RegimeDistribution>,
    pub archetypes: Vec<ScatterPoint>,
    pub daily_volume: Vec<DailyVolume>,
}

/// Recompute the full dashboard from scratch. The archetype map does not
/// depend on the selection.
pub fn build_dashboard(dataset: &Dataset, selection: &RegimeSelection) -> DashboardBundle {
    let filtered = filter_by_regime(dataset.trades(), selection);

    DashboardBundle {
        selection: *selection,
        kpis: compute_kpis(&filtered).into(),
        pnl_distribution: pnl_distribution(&filtered),
        archetypes: archetype_scatter(dataset.clusters()),
        daily_volume: daily_volume_series(&filtered),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::{cluster, sample_trades};
    use crate::models::Regime;
    use rust_decimal::Decimal;

    fn dataset() -> Dataset {
        Dataset::new(
            sample_trades(),
            vec![cluster("1", 2, 2, 30, 150), cluster("2", 99, 1, -5, 50)],
        )
    }

    #[test]
    fn test_bundle_for_greed() {
        let sel: RegimeSelection = [Regime::Greed].into_iter().collect();
        let bundle = build_dashboard(&dataset(), &sel);

        assert_eq!(bundle.kpis.kpis.total_volume, Decimal::from(300));
        assert_eq!(bundle.kpis.kpis.dominant_sentiment, "Greed");
        assert_eq!(bundle.kpis.cards.len(), 4);
        assert_eq!(bundle.pnl_distribution.len(), 1);
        assert_eq!(bundle.daily_volume.len(), 2);
        assert_eq!(bundle.archetypes.len(), 2);
    }

    #[test]
    fn test_bundle_for_empty_selection() {
        let bundle = build_dashboard(&dataset(), &RegimeSelection::empty());

        assert_eq!(bundle.kpis.kpis.active_traders, 0);
        assert_eq!(bundle.kpis.kpis.dominant_sentiment, "N/A");
        assert!(bundle.pnl_distribution.is_empty());
        assert!(bundle.daily_volume.is_empty());
        // cluster map is selection-independent
        assert_eq!(bundle.archetypes.len(), 2);
    }

    #[test]
    fn test_bundle_json_shape() {
        let json = serde_json::to_value(build_dashboard(&dataset(), &RegimeSelection::all())).unwrap();

        assert_eq!(json["selection"].as_array().unwrap().len(), 5);
        assert_eq!(json["kpis"]["total_volume"], "350");
        assert_eq!(json["kpis"]["active_traders"], 2);
        assert_eq!(json["kpis"]["cards"][0]["value"], "$350");
        assert_eq!(json["daily_volume"][0]["date"], "2024-01-01");
        assert_eq!(json["daily_volume"][0]["volume"], "150");
        assert_eq!(json["archetypes"][1]["archetype"], "Unknown");
    }
}
