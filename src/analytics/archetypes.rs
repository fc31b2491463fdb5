use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Archetype, ClusterRecord};

/// A cluster row with its archetype label attached.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedCluster<'a> {
    #[serde(flatten)]
    pub record: &'a ClusterRecord,
    pub archetype: Archetype,
}

/// One bubble of the archetype map. `x` is plotted on a log axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub account: String,
    pub x: Decimal,
    pub y: Decimal,
    pub size: Decimal,
    pub archetype: Archetype,
}

/// Attach an archetype to every row. Unmapped cluster ids get
/// `Archetype::Unknown`.
pub fn annotate_archetypes(clusters: &[ClusterRecord]) -> Vec<AnnotatedCluster<'_>> {
    clusters
        .iter()
        .map(|record| AnnotatedCluster {
            record,
            archetype: record.archetype(),
        })
        .collect()
}

/// Scatter data: activity vs total PnL, sized by average notional, colored
/// by archetype. Rows with non-positive activity have no place on a log
/// axis and are dropped.
pub fn archetype_scatter(clusters: &[ClusterRecord]) -> Vec<ScatterPoint> {
    annotate_archetypes(clusters)
        .into_iter()
        .filter(|c| c.record.activity > Decimal::ZERO)
        .map(|c| ScatterPoint {
            account: c.record.account.clone(),
            x: c.record.activity,
            y: c.record.total_pnl,
            size: c.record.avg_size,
            archetype: c.archetype,
        })
        .collect()
}
