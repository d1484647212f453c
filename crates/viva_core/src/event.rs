use serde::{Deserialize, Serialize};

/// Classification of an inbound `bot_response` payload. The server tags
/// summaries and prompts as `"system"`; anything else (including an absent
/// tag) is regular bot content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    System,
    Bot,
}

impl ResponseKind {
    /// Map the wire `type` field: `"system"` → System, anything else → Bot.
    pub fn from_type_field(value: Option<&str>) -> Self {
        match value {
            Some("system") => ResponseKind::System,
            _ => ResponseKind::Bot,
        }
    }

    pub fn is_system(self) -> bool {
        matches!(self, ResponseKind::System)
    }
}

/// Inbound event surfaced by the channel. `Connected`, `Disconnected` and
/// `ConnectError` are synthesized from the transport lifecycle; the rest
/// are decoded from server frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChannelEvent {
    Connected,

    Disconnected,

    ConnectError { message: String },

    BotResponse { text: String, kind: ResponseKind },

    ServerError { message: String },
}

impl ChannelEvent {
    pub fn connected() -> Self {
        ChannelEvent::Connected
    }

    pub fn disconnected() -> Self {
        ChannelEvent::Disconnected
    }

    pub fn connect_error(message: impl Into<String>) -> Self {
        ChannelEvent::ConnectError {
            message: message.into(),
        }
    }

    pub fn bot_response(text: impl Into<String>, kind: ResponseKind) -> Self {
        ChannelEvent::BotResponse {
            text: text.into(),
            kind,
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        ChannelEvent::ServerError {
            message: message.into(),
        }
    }
}

/// Outbound event emitted by a user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Topic submission from the input line.
    Topic { text: String },

    /// Recognized speech forwarded as an answer. The wire field stays
    /// `audio` even though it carries a transcript string.
    VoiceAnswer { audio: String },
}

impl ClientEvent {
    pub fn topic(text: impl Into<String>) -> Self {
        ClientEvent::Topic { text: text.into() }
    }

    pub fn voice_answer(audio: impl Into<String>) -> Self {
        ClientEvent::VoiceAnswer {
            audio: audio.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connected() {
        let json = serde_json::to_string(&ChannelEvent::connected()).unwrap();
        assert_eq!(json, r#"{"type":"connected"}"#);
    }

    #[test]
    fn test_connect_error() {
        let event = ChannelEvent::connect_error("refused");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"connect_error"#));
        assert!(json.contains("refused"));
    }

    #[test]
    fn test_bot_response() {
        let event = ChannelEvent::bot_response("Hello!", ResponseKind::Bot);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"bot_response"#));
        assert!(json.contains("Hello!"));
        assert!(json.contains(r#""kind":"bot"#));
    }

    #[test]
    fn test_server_error() {
        let event = ChannelEvent::server_error("Topic handling failed");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"server_error"#));
        assert!(json.contains("Topic handling failed"));
    }

    #[test]
    fn test_event_roundtrip() {
        let event = ChannelEvent::bot_response("gravity pulls", ResponseKind::System);
        let json = serde_json::to_string(&event).unwrap();
        let decoded: ChannelEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_all_event_types_serializable() {
        let events = vec![
            ChannelEvent::connected(),
            ChannelEvent::disconnected(),
            ChannelEvent::connect_error("err"),
            ChannelEvent::bot_response("text", ResponseKind::Bot),
            ChannelEvent::server_error("err"),
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let decoded: ChannelEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, event);
        }
    }

    #[test]
    fn response_kind_system_tag() {
        assert_eq!(
            ResponseKind::from_type_field(Some("system")),
            ResponseKind::System
        );
    }

    #[test]
    fn response_kind_other_tags_are_bot() {
        assert_eq!(ResponseKind::from_type_field(Some("bot")), ResponseKind::Bot);
        assert_eq!(
            ResponseKind::from_type_field(Some("text")),
            ResponseKind::Bot
        );
        assert_eq!(ResponseKind::from_type_field(None), ResponseKind::Bot);
    }

    #[test]
    fn client_event_topic() {
        let event = ClientEvent::topic("photosynthesis");
        assert_eq!(
            event,
            ClientEvent::Topic {
                text: "photosynthesis".to_string()
            }
        );
    }

    #[test]
    fn client_event_voice_answer() {
        let event = ClientEvent::voice_answer("what is gravity");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""audio":"what is gravity"#));
    }
}
