use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use hyperdash::api::router::create_router;
use hyperdash::config::{AppConfig, LogFormat};
use hyperdash::data::Dataset;
use hyperdash::models::{ClusterRecord, Regime, TradeRecord};
use hyperdash::AppState;

#[allow(dead_code)]
pub fn trade(account: &str, size: i64, pnl: i64, date: &str, cls: Regime) -> TradeRecord {
    TradeRecord {
        account: account.into(),
        size_usd: Decimal::from(size),
        closed_pnl: Decimal::from(pnl),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid test date"),
        classification: cls,
    }
}

#[allow(dead_code)]
pub fn cluster(account: &str, id: i64, activity: i64, pnl: i64, avg: i64) -> ClusterRecord {
    ClusterRecord {
        account: account.into(),
        cluster_id: id,
        activity: Decimal::from(activity),
        total_pnl: Decimal::from(pnl),
        avg_size: Decimal::from(avg),
    }
}

/// Two Greed trades for account 1 and one Fear trade for account 2,
/// plus one mapped and one unmapped cluster row.
#[allow(dead_code)]
pub fn seed_dataset() -> Dataset {
    Dataset::new(
        vec![
            trade("1", 100, 10, "2024-01-01", Regime::Greed),
            trade("2", 50, -5, "2024-01-01", Regime::Fear),
            trade("1", 200, 20, "2024-01-02", Regime::Greed),
        ],
        vec![cluster("1", 2, 2, 30, 150), cluster("2", 99, 1, -5, 50)],
    )
}

#[allow(dead_code)]
pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        data_dir: "scripts".into(),
        trades_file: "dashboard_data.csv".into(),
        clusters_file: "trader_clusters.csv".into(),
        log_format: LogFormat::Text,
    }
}

#[allow(dead_code)]
pub fn build_test_app(dataset: Dataset) -> axum::Router {
    let state = AppState {
        dataset: Arc::new(dataset),
        config: test_config(),
        metrics_handle: hyperdash::metrics::detached_handle(),
    };
    create_router(state)
}
