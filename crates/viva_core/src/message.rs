//! Transcript message model: text plus a display role.

use serde::{Deserialize, Serialize};

/// Who a transcript entry belongs to. The role decides how the entry is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Connection/lifecycle/error status, not user or bot content.
    System,
    User,
    Bot,
}

/// One transcript entry. Created on every inbound channel event or outbound
/// user action; appended to the log and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub role: Role,
    /// Optional short display timestamp (e.g. "10:32").
    pub timestamp: Option<String>,
}

impl Message {
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
            timestamp: None,
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(text, Role::System)
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Role::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Role::Bot)
    }

    /// Same message stamped with the local wall-clock time.
    pub fn stamped_now(mut self) -> Self {
        self.timestamp = Some(chrono::Local::now().format("%H:%M").to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_determines_constructor() {
        assert_eq!(Message::system("up").role, Role::System);
        assert_eq!(Message::user("hi").role, Role::User);
        assert_eq!(Message::bot("hello").role, Role::Bot);
    }

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&Role::System).unwrap();
        assert_eq!(json, r#""system""#);
        let json = serde_json::to_string(&Role::Bot).unwrap();
        assert_eq!(json, r#""bot""#);
    }

    #[test]
    fn stamped_now_sets_timestamp() {
        let msg = Message::user("hi").stamped_now();
        let ts = msg.timestamp.expect("timestamp set");
        assert_eq!(ts.len(), 5); // "HH:MM"
        assert!(ts.contains(':'));
    }

    #[test]
    fn new_message_has_no_timestamp() {
        assert!(Message::bot("hello").timestamp.is_none());
    }
}
