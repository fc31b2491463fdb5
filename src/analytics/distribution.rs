use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Regime, TradeRecord};

/// Five-number summary used to draw one box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub min: Decimal,
    pub q1: Decimal,
    pub median: Decimal,
    pub q3: Decimal,
    pub max: Decimal,
}

/// Closed PnL of every filtered trade in one regime.
#[derive(Debug, Clone, Serialize)]
pub struct RegimeDistribution {
    pub regime: Regime,
    pub count: usize,
    pub values: Vec<Decimal>,
    pub summary: BoxSummary,
}

/// Closed PnL grouped by regime, in fixed regime order. Regimes with no
/// rows are left out.
pub fn pnl_distribution(trades: &[&TradeRecord]) -> Vec<RegimeDistribution> {
    Regime::ALL
        .into_iter()
        .filter_map(|regime| {
            let values: Vec<Decimal> = trades
                .iter()
                .filter(|t| t.classification == regime)
                .map(|t| t.closed_pnl)
                .collect();
            let summary = box_summary(&values)?;
            Some(RegimeDistribution {
                regime,
                count: values.len(),
                values,
                summary,
            })
        })
        .collect()
}

/// `None` for an empty sample.
pub fn box_summary(values: &[Decimal]) -> Option<BoxSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort();

    Some(BoxSummary {
        min: sorted[0],
        q1: quantile(&sorted, Decimal::new(25, 2)),
        median: quantile(&sorted, Decimal::new(5, 1)),
        q3: quantile(&sorted, Decimal::new(75, 2)),
        max: sorted[sorted.len() - 1],
    })
}

/// Linear interpolation between closest ranks on an ascending, non-empty sample.
fn quantile(sorted: &[Decimal], q: Decimal) -> Decimal {
    let last = sorted.len() - 1;
    let pos = q * Decimal::from(last);
    let lo = pos.floor().to_usize().unwrap_or(0).min(last);
    let hi = (lo + 1).min(last);
    let frac = pos - pos.floor();

    sorted[hi]
        .checked_sub(sorted[lo])
        .and_then(|span| span.checked_mul(frac))
        .and_then(|step| sorted[lo].checked_add(step))
        .unwrap_or(sorted[lo])
}
