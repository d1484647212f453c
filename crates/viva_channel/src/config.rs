//! Channel configuration: where the tutor server lives.

/// Default server URL when nothing is configured.
pub const DEFAULT_SERVER_URL: &str = "ws://127.0.0.1:5000/chat";

/// Configuration for the channel connection.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// WebSocket URL of the tutor server.
    pub url: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl ChannelConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Build from the environment: `VIVA_SERVER_URL`, falling back to
    /// [DEFAULT_SERVER_URL].
    pub fn from_env() -> Self {
        let url = std::env::var("VIVA_SERVER_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        Self { url }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        let config = ChannelConfig::default();
        assert_eq!(config.url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn with_url_overrides() {
        let config = ChannelConfig::default().with_url("ws://example.org/chat");
        assert_eq!(config.url, "ws://example.org/chat");
    }
}
