use std::fmt;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// One trader's behavioral profile from the cluster table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterRecord {
    pub account: String,
    pub cluster_id: i64,
    pub activity: Decimal,
    pub total_pnl: Decimal,
    pub avg_size: Decimal,
}

impl ClusterRecord {
    pub fn archetype(&self) -> Archetype {
        Archetype::from_cluster_id(self.cluster_id)
    }
}

/// Display label for a cluster id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    HighFrequencyScalpers,
    DisciplinedStrategists,
    InstitutionalWhales,
    HighVarianceRetail,
    /// Cluster id outside the known range.
    Unknown,
}

impl Archetype {
    pub const UNKNOWN_LABEL: &'static str = "Unknown";

    pub fn from_cluster_id(id: i64) -> Self {
        match id {
            0 => Archetype::HighFrequencyScalpers,
            1 => Archetype::DisciplinedStrategists,
            2 => Archetype::InstitutionalWhales,
            3 => Archetype::HighVarianceRetail,
            _ => Archetype::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Archetype::HighFrequencyScalpers => "High-Frequency Scalpers",
            Archetype::DisciplinedStrategists => "Disciplined Strategists",
            Archetype::InstitutionalWhales => "Institutional Whales",
            Archetype::HighVarianceRetail => "High-Variance Retail",
            Archetype::Unknown => Self::UNKNOWN_LABEL,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Archetype::Unknown)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Archetype {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
