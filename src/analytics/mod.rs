//! Pure aggregation over the trade and cluster tables.
//!
//! Every function here is deterministic and side-effect free: it takes the
//! read-only tables plus a `RegimeSelection` and returns a fresh value. The
//! API layer calls them once per request; nothing is cached.

pub mod archetypes;
pub mod dashboard;
pub mod distribution;
pub mod filter;
pub mod kpis;
pub mod series;

pub use archetypes::{annotate_archetypes, archetype_scatter, AnnotatedCluster, ScatterPoint};
pub use dashboard::{build_dashboard, DashboardBundle};
pub use distribution::{pnl_distribution, BoxSummary, RegimeDistribution};
pub use filter::filter_by_regime;
pub use kpis::{
    active_traders, compute_kpis, dominant_sentiment, pnl_efficiency, total_volume, KpiCard,
    KpiPanel, Kpis, NO_SENTIMENT,
};
pub use series::{daily_volume_series, DailyVolume};
