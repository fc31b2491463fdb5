use crate::models::{RegimeSelection, TradeRecord};

/// Rows whose classification is in `selection`, in their original order.
/// An empty selection yields an empty view.
pub fn filter_by_regime<'a>(
    trades: &'a [TradeRecord],
    selection: &RegimeSelection,
) -> Vec<&'a TradeRecord> {
    if selection.is_empty() {
        return Vec::new();
    }

    trades
        .iter()
        .filter(|t| selection.contains(t.classification))
        .collect()
}
