//! Wire codec for the channel: JSON text frames of the form
//! `{"event": <name>, "data": <object>}`.
//!
//! Lifecycle events (`connect`, `disconnect`, `connect_error`) never appear
//! on the wire; the transport synthesizes them. Unknown inbound event names
//! and malformed frames are dropped by the caller (logged at debug).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::event::{ChannelEvent, ClientEvent, ResponseKind};

/// Text shown when a `bot_response` frame carries no usable `text` field.
pub const NO_RESPONSE_TEXT: &str = "[No response text]";

/// One frame on the wire: event name plus a JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

impl Frame {
    pub fn new(event: impl Into<String>, data: Value) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }
}

/// Encode an outbound event as a JSON frame string.
pub fn encode_client_event(event: &ClientEvent) -> String {
    let frame = match event {
        ClientEvent::Topic { text } => Frame::new("topic", serde_json::json!({ "text": text })),
        ClientEvent::VoiceAnswer { audio } => {
            Frame::new("voice_answer", serde_json::json!({ "audio": audio }))
        }
    };
    // Frame holds only a string and a Value; serialization cannot fail.
    serde_json::to_string(&frame).unwrap_or_default()
}

/// Decode an inbound frame string into a channel event.
///
/// Returns `None` for malformed JSON and for event names this client does
/// not consume.
pub fn decode_frame(raw: &str) -> Option<ChannelEvent> {
    let frame: Frame = serde_json::from_str(raw).ok()?;
    match frame.event.as_str() {
        "bot_response" => {
            let text = frame
                .data
                .get("text")
                .and_then(Value::as_str)
                .filter(|t| !t.is_empty())
                .unwrap_or(NO_RESPONSE_TEXT)
                .to_string();
            let kind = ResponseKind::from_type_field(frame.data.get("type").and_then(Value::as_str));
            Some(ChannelEvent::BotResponse { text, kind })
        }
        "error" => {
            let message = frame
                .data
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown server error")
                .to_string();
            Some(ChannelEvent::ServerError { message })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_topic() {
        let raw = encode_client_event(&ClientEvent::topic("photosynthesis"));
        let frame: Frame = serde_json::from_str(&raw).unwrap();
        assert_eq!(frame.event, "topic");
        assert_eq!(frame.data["text"], "photosynthesis");
    }

    #[test]
    fn encode_voice_answer() {
        let raw = encode_client_event(&ClientEvent::voice_answer("what is gravity"));
        let frame: Frame = serde_json::from_str(&raw).unwrap();
        assert_eq!(frame.event, "voice_answer");
        assert_eq!(frame.data["audio"], "what is gravity");
    }

    #[test]
    fn decode_bot_response_bot_kind() {
        let event =
            decode_frame(r#"{"event":"bot_response","data":{"text":"Hello!","type":"bot"}}"#)
                .unwrap();
        assert_eq!(
            event,
            ChannelEvent::bot_response("Hello!", ResponseKind::Bot)
        );
    }

    #[test]
    fn decode_bot_response_system_kind() {
        let event = decode_frame(
            r#"{"event":"bot_response","data":{"text":"Here is a summary","type":"system"}}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            ChannelEvent::bot_response("Here is a summary", ResponseKind::System)
        );
    }

    #[test]
    fn decode_bot_response_absent_type_is_bot() {
        let event =
            decode_frame(r#"{"event":"bot_response","data":{"text":"plain"}}"#).unwrap();
        assert!(matches!(
            event,
            ChannelEvent::BotResponse {
                kind: ResponseKind::Bot,
                ..
            }
        ));
    }

    #[test]
    fn decode_bot_response_missing_text() {
        let event = decode_frame(r#"{"event":"bot_response","data":{}}"#).unwrap();
        assert_eq!(
            event,
            ChannelEvent::bot_response(NO_RESPONSE_TEXT, ResponseKind::Bot)
        );
    }

    #[test]
    fn decode_bot_response_empty_text() {
        let event = decode_frame(r#"{"event":"bot_response","data":{"text":""}}"#).unwrap();
        assert!(matches!(
            event,
            ChannelEvent::BotResponse { text, .. } if text == NO_RESPONSE_TEXT
        ));
    }

    #[test]
    fn decode_server_error() {
        let event =
            decode_frame(r#"{"event":"error","data":{"message":"Topic handling failed"}}"#)
                .unwrap();
        assert_eq!(event, ChannelEvent::server_error("Topic handling failed"));
    }

    #[test]
    fn decode_unknown_event_ignored() {
        assert!(decode_frame(r#"{"event":"typing","data":{}}"#).is_none());
    }

    #[test]
    fn decode_malformed_ignored() {
        assert!(decode_frame("not json").is_none());
        assert!(decode_frame(r#"{"data":{}}"#).is_none());
    }

    #[test]
    fn decode_missing_data_defaults() {
        // Frame without a data object still parses; payload fields fall back.
        let event = decode_frame(r#"{"event":"bot_response"}"#).unwrap();
        assert!(matches!(
            event,
            ChannelEvent::BotResponse { text, .. } if text == NO_RESPONSE_TEXT
        ));
    }
}
