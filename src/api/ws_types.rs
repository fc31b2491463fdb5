use serde::Serialize;

use crate::analytics::DashboardBundle;

/// Reply frames sent to a dashboard WebSocket client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum WsMessage {
    #[serde(rename = "dashboard")]
    Dashboard(Box<DashboardBundle>),

    #[serde(rename = "error")]
    Error(String),
}
