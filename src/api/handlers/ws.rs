use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;

use crate::analytics::build_dashboard;
use crate::api::recompute;
use crate::api::selection::{parse_frame, record_rejection};
use crate::api::ws_types::WsMessage;
use crate::AppState;

pub async fn handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Each text frame is a regime selection; each one gets exactly one reply.
async fn handle_socket(mut socket: WebSocket, state: AppState) {
    tracing::info!("Dashboard WebSocket client connected");

    while let Some(client_msg) = socket.recv().await {
        let reply = match client_msg {
            Ok(Message::Text(text)) => selection_reply(&state, &text),
            Ok(Message::Ping(data)) => {
                if socket.send(Message::Pong(data)).await.is_err() {
                    break;
                }
                continue;
            }
            Ok(Message::Close(_)) | Err(_) => break,
            Ok(_) => continue, // binary / pong
        };

        match serde_json::to_string(&reply) {
            Ok(json) => {
                if socket.send(Message::Text(json)).await.is_err() {
                    break;
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize WsMessage");
            }
        }
    }

    tracing::info!("Dashboard WebSocket client disconnected");
}

fn selection_reply(state: &AppState, text: &str) -> WsMessage {
    match parse_frame(text) {
        Ok(selection) => {
            let bundle = recompute("ws", || build_dashboard(&state.dataset, &selection));
            WsMessage::Dashboard(Box::new(bundle))
        }
        Err(e) => {
            record_rejection("ws", &e);
            WsMessage::Error(e.to_string())
        }
    }
}
