use serde::Deserialize;

use crate::errors::{AppError, SelectionError};
use crate::models::RegimeSelection;

/// `?regimes=Fear,Greed`. Absent means every regime; present but empty
/// means none.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    pub regimes: Option<String>,
}

impl SelectionQuery {
    pub fn selection(&self) -> Result<RegimeSelection, SelectionError> {
        match &self.regimes {
            None => Ok(RegimeSelection::all()),
            Some(raw) => RegimeSelection::parse_list(raw),
        }
    }

    /// `selection`, recording a rejection and mapping it to a 400.
    pub fn resolve(&self, surface: &'static str) -> Result<RegimeSelection, AppError> {
        self.selection().map_err(|e| {
            record_rejection(surface, &e);
            AppError::from(e)
        })
    }
}

/// Count and log a selection that could not be parsed.
pub fn record_rejection(surface: &'static str, error: &SelectionError) {
    metrics::counter!("selection_rejected_total").increment(1);
    tracing::warn!(surface, error = %error, "Rejected regime selection");
}

/// A WebSocket frame: either a JSON array of labels or the comma-separated form.
pub fn parse_frame(text: &str) -> Result<RegimeSelection, SelectionError> {
    let text = text.trim();
    if text.starts_with('[') {
        let labels: Vec<String> = serde_json::from_str(text)
            .map_err(|e| SelectionError::InvalidPayload(e.to_string()))?;
        RegimeSelection::from_labels(labels)
    } else {
        RegimeSelection::parse_list(text)
    }
}
