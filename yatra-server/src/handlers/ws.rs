//! The push-channel WebSocket endpoint.

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tracing::debug;

use crate::auth::{bearer_from_headers, token_matches};
use crate::errors::AppError;
use crate::push::{self, messages};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WsQuery {
    /// Handshake credential for clients that cannot set headers (browser
    /// WebSocket API).
    token: Option<String>,
}

/// Handle WebSocket upgrade request.
///
/// The handshake requires the same credential as the write endpoints,
/// presented either as a bearer header or a `token` query parameter.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
    headers: HeaderMap,
    State(state): State<AppState>,
) -> Response {
    let presented = bearer_from_headers(&headers).or(query.token);
    match presented {
        Some(token) if token_matches(&state.config.auth, &token) => {}
        _ => return AppError::unauthorized("missing or invalid API token").into_response(),
    }

    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Drive one viewer connection until it closes.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sink, mut stream) = socket.split();

    let (viewer, mut events) = push::attach_viewer(&state);
    let viewer_id = viewer.id;
    debug!(viewer = %viewer_id, viewers = state.viewers.len(), "viewer connected");

    // Writer: drain the viewer queue into the socket.
    let send_task = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            let Ok(frame) = messages::event_to_websocket(&event) else {
                break;
            };
            if sink.send(frame).await.is_err() {
                break;
            }
        }
    });

    // Reader: no client-to-server protocol beyond the handshake; drain
    // frames until the peer closes or errors out.
    while let Some(message) = stream.next().await {
        match message {
            Ok(Message::Close(_)) | Err(_) => break,
            Ok(_) => {}
        }
    }

    state.viewers.remove(viewer_id);
    send_task.abort();
    debug!(viewer = %viewer_id, viewers = state.viewers.len(), "viewer disconnected");
}
