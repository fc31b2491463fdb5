pub mod cluster;
pub mod regime;
pub mod trade;

pub use cluster::{Archetype, ClusterRecord};
pub use regime::{Regime, RegimeSelection};
pub use trade::TradeRecord;
