use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Regime, TradeRecord};

/// Dominant sentiment of an empty selection.
pub const NO_SENTIMENT: &str = "N/A";

/// The four headline numbers of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub total_volume: Decimal,
    pub pnl_efficiency: Decimal,
    pub active_traders: usize,
    pub dominant_sentiment: &'static str,
}

/// A KPI as displayed: label, formatted value, caption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
    pub caption: &'static str,
}

/// Raw KPIs plus their display cards, as served to the front-end.
#[derive(Debug, Clone, Serialize)]
pub struct KpiPanel {
    #[serde(flatten)]
    pub kpis: Kpis,
    pub cards: Vec<KpiCard>,
}

impl From<Kpis> for KpiPanel {
    fn from(kpis: Kpis) -> Self {
        let cards = kpis.cards();
        Self { kpis, cards }
    }
}

pub fn compute_kpis(trades: &[&TradeRecord]) -> Kpis {
    Kpis {
        total_volume: total_volume(trades),
        pnl_efficiency: pnl_efficiency(trades),
        active_traders: active_traders(trades),
        dominant_sentiment: dominant_sentiment(trades),
    }
}

/// Aggregate notional traded. Saturates at `Decimal::MAX`.
pub fn total_volume(trades: &[&TradeRecord]) -> Decimal {
    trades
        .iter()
        .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.size_usd))
}

/// PnL per $1k traded: `sum(pnl) / (sum(size) / 1000)`.
/// Exactly zero when there is no volume, whatever the PnL. Also zero when
/// the ratio is not representable (volume so small that `volume / 1000`
/// underflows, or a quotient past `Decimal::MAX`).
pub fn pnl_efficiency(trades: &[&TradeRecord]) -> Decimal {
    let volume = checked_sum(trades.iter().map(|t| t.size_usd));
    let pnl = checked_sum(trades.iter().map(|t| t.closed_pnl));

    volume
        .filter(|v| *v > Decimal::ZERO)
        .and_then(|v| v.checked_div(Decimal::ONE_THOUSAND))
        .filter(|k| !k.is_zero())
        .zip(pnl)
        .and_then(|(k, pnl)| pnl.checked_div(k))
        .unwrap_or(Decimal::ZERO)
}

fn checked_sum(values: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    values.fold(Some(Decimal::ZERO), |acc, v| acc?.checked_add(v))
}

/// Number of distinct accounts.
pub fn active_traders(trades: &[&TradeRecord]) -> usize {
    trades
        .iter()
        .map(|t| t.account.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Most frequent regime. Ties go to the regime seen first in row order;
/// `"N/A"` when there are no rows.
pub fn dominant_sentiment(trades: &[&TradeRecord]) -> &'static str {
    // (regime, count) in first-seen order
    let mut counts: Vec<(Regime, usize)> = Vec::with_capacity(Regime::ALL.len());
    for trade in trades {
        match counts.iter_mut().find(|(r, _)| *r == trade.classification) {
            Some((_, n)) => *n += 1,
            None => counts.push((trade.classification, 1)),
        }
    }

    let mut best: Option<(Regime, usize)> = None;
    for (regime, n) in counts {
        if best.map_or(true, |(_, top)| n > top) {
            best = Some((regime, n));
        }
    }

    best.map(|(r, _)| r.as_str()).unwrap_or(NO_SENTIMENT)
}

impl Kpis {
    pub fn cards(&self) -> Vec<KpiCard> {
        vec![
            KpiCard {
                label: "Total Trading Volume",
                value: format!("${}", group_thousands(self.total_volume)),
                caption: "Aggregate notional traded",
            },
            KpiCard {
                label: "PnL Efficiency",
                value: format!("${:.2}", self.pnl_efficiency.round_dp(2)),
                caption: "PnL per $1k traded",
            },
            KpiCard {
                label: "Active Traders",
                value: self.active_traders.to_string(),
                caption: "Unique market participants",
            },
            KpiCard {
                label: "Dominant Sentiment",
                value: self.dominant_sentiment.to_string(),
                caption: "Most frequent regime",
            },
        ]
    }
}

/// Round to whole units and insert `,` every three digits.
fn group_thousands(value: Decimal) -> String {
    let rounded = value.round_dp(0);
    let digits = rounded.abs().trunc().normalize().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
