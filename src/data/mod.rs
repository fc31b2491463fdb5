pub mod loader;
pub mod rows;

use crate::config::AppConfig;
use crate::errors::DataError;
use crate::models::{ClusterRecord, TradeRecord};

use rows::{RawClusterRow, RawTradeRow, CLUSTER_COLUMNS, TRADE_COLUMNS};

/// Both tables, loaded once and never mutated afterwards.
/// Shared across requests as `Arc<Dataset>`.
#[derive(Debug, Default)]
pub struct Dataset {
    trades: Vec<TradeRecord>,
    clusters: Vec<ClusterRecord>,
}

impl Dataset {
    pub fn new(trades: Vec<TradeRecord>, clusters: Vec<ClusterRecord>) -> Self {
        Self { trades, clusters }
    }

    pub fn trades(&self) -> &[TradeRecord] {
        &self.trades
    }

    pub fn clusters(&self) -> &[ClusterRecord] {
        &self.clusters
    }
}

/// Load the trade and cluster tables from the configured data directory.
pub fn load_dataset(config: &AppConfig) -> Result<Dataset, DataError> {
    let trades_path = config.trades_path();
    let trades = loader::load_table::<RawTradeRow, TradeRecord>(&trades_path, TRADE_COLUMNS)?;
    tracing::info!(path = %trades_path.display(), rows = trades.len(), "Trade table loaded");

    let clusters_path = config.clusters_path();
    let clusters =
        loader::load_table::<RawClusterRow, ClusterRecord>(&clusters_path, CLUSTER_COLUMNS)?;
    tracing::info!(path = %clusters_path.display(), rows = clusters.len(), "Cluster table loaded");

    metrics::gauge!("trade_rows_loaded").set(trades.len() as f64);
    metrics::gauge!("cluster_rows_loaded").set(clusters.len() as f64);

    Ok(Dataset::new(trades, clusters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    use rust_decimal::Decimal;

    use crate::models::Regime;

    const TRADES_CSV: &str = "\
Account,Coin,Size USD,Closed PnL,date,classification
0xaaa,BTC,100,10,2024-01-01,Greed
0xbbb,ETH,50,-5,2024-01-01 08:30:00,Fear
0xaaa,BTC,200,20,2024-01-02,Greed
";

    const CLUSTERS_CSV: &str = "\
Account,Cluster,Activity,Total_PnL,Avg_Size
0xaaa,2,150,30.5,150
0xbbb,99,1,-5,50
";

    fn config_for(dir: &Path) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            data_dir: dir.to_path_buf(),
            trades_file: "trades.csv".into(),
            clusters_file: "clusters.csv".into(),
            log_format: crate::config::LogFormat::Text,
        }
    }

    #[test]
    fn test_load_dataset_from_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("trades.csv"), TRADES_CSV).unwrap();
        std::fs::write(dir.path().join("clusters.csv"), CLUSTERS_CSV).unwrap();

        let dataset = load_dataset(&config_for(dir.path())).unwrap();

        assert_eq!(dataset.trades().len(), 3);
        assert_eq!(dataset.trades()[1].classification, Regime::Fear);
        assert_eq!(dataset.trades()[1].closed_pnl, Decimal::from(-5));
        assert_eq!(dataset.clusters().len(), 2);
        assert_eq!(dataset.clusters()[0].archetype().label(), "Institutional Whales");
        assert_eq!(dataset.clusters()[1].archetype().label(), "Unknown");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(&config_for(dir.path())).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(err.to_string().contains("trades.csv"));
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let csv = "Account,Size USD,date,classification\n0xaaa,1,2024-01-01,Fear\n";
        let err = loader::read_table::<_, RawTradeRow, TradeRecord>(
            &PathBuf::from("trades.csv"),
            csv.as_bytes(),
            TRADE_COLUMNS,
        )
        .unwrap_err();

        match err {
            DataError::MalformedRow { line, reason, .. } => {
                assert_eq!(line, 1);
                assert!(reason.contains("Closed PnL"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let csv = "\
Account,Size USD,Closed PnL,date,classification
0xaaa,1,0,2024-01-01,Fear
0xbbb,lots,0,2024-01-01,Fear
";
        let err = loader::read_table::<_, RawTradeRow, TradeRecord>(
            &PathBuf::from("trades.csv"),
            csv.as_bytes(),
            TRADE_COLUMNS,
        )
        .unwrap_err();

        match err {
            DataError::MalformedRow { line, reason, .. } => {
                assert_eq!(line, 3);
                assert!(reason.contains("Size USD"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_only_file_is_empty_table() {
        let csv = "Account,Cluster,Activity,Total_PnL,Avg_Size\n";
        let clusters = loader::read_table::<_, RawClusterRow, ClusterRecord>(
            &PathBuf::from("clusters.csv"),
            csv.as_bytes(),
            CLUSTER_COLUMNS,
        )
        .unwrap();
        assert!(clusters.is_empty());
    }
}
