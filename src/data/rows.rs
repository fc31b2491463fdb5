use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{ClusterRecord, Regime, TradeRecord};

pub const TRADE_COLUMNS: &[&str] = &["Account", "Size USD", "Closed PnL", "date", "classification"];
pub const CLUSTER_COLUMNS: &[&str] = &["Account", "Cluster", "Activity", "Total_PnL", "Avg_Size"];

/// Row of `dashboard_data.csv` as written by the preprocessing notebook.
/// Extra columns are ignored.
#[derive(Debug, Deserialize)]
pub struct RawTradeRow {
    #[serde(rename = "Account")]
    pub account: String,
    #[serde(rename = "Size USD")]
    pub size_usd: String,
    #[serde(rename = "Closed PnL")]
    pub closed_pnl: String,
    pub date: String,
    pub classification: String,
}

/// Row of `trader_clusters.csv`.
#[derive(Debug, Deserialize)]
pub struct RawClusterRow {
    #[serde(rename = "Account")]
    pub account: String,
    #[serde(rename = "Cluster")]
    pub cluster: String,
    #[serde(rename = "Activity")]
    pub activity: String,
    #[serde(rename = "Total_PnL")]
    pub total_pnl: String,
    #[serde(rename = "Avg_Size")]
    pub avg_size: String,
}

impl TryFrom<RawTradeRow> for TradeRecord {
    type Error = String;

    fn try_from(raw: RawTradeRow) -> Result<Self, Self::Error> {
        let account = parse_account(&raw.account)?;
        let size_usd = parse_decimal("Size USD", &raw.size_usd)?;
        if size_usd.is_sign_negative() && !size_usd.is_zero() {
            return Err(format!("Size USD must be non-negative, got {size_usd}"));
        }

        Ok(TradeRecord {
            account,
            size_usd,
            closed_pnl: parse_decimal("Closed PnL", &raw.closed_pnl)?,
            date: parse_date(&raw.date)?,
            classification: Regime::from_label(&raw.classification)
                .ok_or_else(|| format!("unknown classification {:?}", raw.classification))?,
        })
    }
}

impl TryFrom<RawClusterRow> for ClusterRecord {
    type Error = String;

    fn try_from(raw: RawClusterRow) -> Result<Self, Self::Error> {
        Ok(ClusterRecord {
            account: parse_account(&raw.account)?,
            cluster_id: parse_cluster_id(&raw.cluster)?,
            activity: parse_decimal("Activity", &raw.activity)?,
            total_pnl: parse_decimal("Total_PnL", &raw.total_pnl)?,
            avg_size: parse_decimal("Avg_Size", &raw.avg_size)?,
        })
    }
}

fn parse_account(raw: &str) -> Result<String, String> {
    let account = raw.trim();
    if account.is_empty() {
        return Err("Account is empty".into());
    }
    Ok(account.to_string())
}

/// Plain decimal or scientific notation (`1.5e-05`), as pandas writes floats.
pub fn parse_decimal(column: &str, raw: &str) -> Result<Decimal, String> {
    let s = raw.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| format!("{column} is not a number: {raw:?}"))
}

/// Integer cluster id; pandas may write it as `2.0`.
fn parse_cluster_id(raw: &str) -> Result<i64, String> {
    let s = raw.trim();
    if let Ok(id) = s.parse::<i64>() {
        return Ok(id);
    }
    let value = parse_decimal("Cluster", s)?;
    if !value.fract().is_zero() {
        return Err(format!("Cluster is not an integer: {raw:?}"));
    }
    value
        .to_i64()
        .ok_or_else(|| format!("Cluster out of range: {raw:?}"))
}

/// `YYYY-MM-DD`, optionally followed by a time component. Only the date is kept.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let s = raw.trim();
    let day = s.split(|c: char| c == ' ' || c == 'T').next().unwrap_or(s);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| format!("invalid date {raw:?}"))
}
