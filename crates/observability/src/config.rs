//! Configuration for tracing setup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Sink for formatted log lines (e.g. the TUI runtime-logs screen). Called
/// from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Observability configuration.
#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Service name, used as the default fmt target prefix.
    pub service_name: String,

    /// Enable console/log output.
    pub enable_console: bool,

    /// Log level filter (e.g. "info", "debug", "info,viva=debug").
    /// Falls back to the `RUST_LOG` env filter, then "info".
    pub log_level: Option<String>,

    /// Optional sink for each formatted log line. Not serialized.
    pub log_sink: Option<LogSink>,
}

// Serde cannot derive through Arc<dyn Fn>, so log_sink is skipped by hand.
impl Serialize for ObservabilityConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("ObservabilityConfig", 3)?;
        s.serialize_field("service_name", &self.service_name)?;
        s.serialize_field("enable_console", &self.enable_console)?;
        s.serialize_field("log_level", &self.log_level)?;
        s.end()
    }
}

impl<'de> Deserialize<'de> for ObservabilityConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ObservabilityConfigDe {
            #[serde(default = "default_service_name")]
            service_name: String,
            #[serde(default)]
            enable_console: bool,
            log_level: Option<String>,
        }
        fn default_service_name() -> String {
            "viva".to_string()
        }
        let de = ObservabilityConfigDe::deserialize(deserializer)?;
        Ok(ObservabilityConfig {
            service_name: de.service_name,
            enable_console: de.enable_console,
            log_level: de.log_level,
            log_sink: None,
        })
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "viva".to_string(),
            enable_console: true,
            log_level: None,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("enable_console", &self.enable_console)
            .field("log_level", &self.log_level)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable console output. Disable when the TUI owns the
    /// terminal and logs go to the sink instead.
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Sink for formatted log lines (e.g. TUI runtime logs). Must not block.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Build from environment variables: `VIVA_LOG` or `RUST_LOG` → log_level.
    pub fn from_env() -> Self {
        let log_level = std::env::var("VIVA_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();
        Self {
            log_level,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain() {
        let config = ObservabilityConfig::new("viva-test")
            .with_console(false)
            .with_log_level("debug");
        assert_eq!(config.service_name, "viva-test");
        assert!(!config.enable_console);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn serde_skips_sink() {
        let config = ObservabilityConfig::new("viva")
            .with_log_sink(Arc::new(|_line| {}));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("log_sink"));
        let back: ObservabilityConfig = serde_json::from_str(&json).unwrap();
        assert!(back.log_sink.is_none());
        assert_eq!(back.service_name, "viva");
    }
}
