use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::TradeRecord;

/// One point of the daily volume area chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyVolume {
    pub date: NaiveDate,
    pub volume: Decimal,
}

/// Sum of `size_usd` per calendar date (saturating), ascending. Dates with no trades are
/// absent; callers wanting a continuous axis fill the gaps themselves.
pub fn daily_volume_series(trades: &[&TradeRecord]) -> Vec<DailyVolume> {
    let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for trade in trades {
        let day = by_day.entry(trade.date).or_insert(Decimal::ZERO);
        *day = day.saturating_add(trade.size_usd);
    }

    by_day
        .into_iter()
        .map(|(date, volume)| DailyVolume { date, volume })
        .collect()
}
