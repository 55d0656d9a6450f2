use anyhow::Result;
use axum::extract::ws::{Message, Utf8Bytes};

use yatra_model::PushEvent;

/// Convert a push event to a WebSocket text frame.
pub fn event_to_websocket(event: &PushEvent) -> Result<Message> {
    let json = serde_json::to_string(event)?;
    Ok(Message::Text(Utf8Bytes::from(json)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_tagged_text_frames() {
        let message =
            event_to_websocket(&PushEvent::TouristsUpdate { tourists: vec![] }).unwrap();
        match message {
            Message::Text(text) => {
                assert!(text.as_str().contains("\"type\":\"tourists_update\""));
            }
            other => panic!("expected text frame, got {other:?}"),
        }
    }
}
