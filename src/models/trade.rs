use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::Regime;

/// One executed trade from the trade table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeRecord {
    pub account: String,
    pub size_usd: Decimal,
    pub closed_pnl: Decimal,
    pub date: NaiveDate,
    pub classification: Regime,
}
