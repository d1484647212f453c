//! Subscriber composition and installation.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::tui_log_layer;

/// Install the global tracing subscriber for the given configuration.
///
/// Layers: env filter → optional console fmt → TUI log sink. Composed once
/// (no mutation, avoids layer type mismatch) and installed with `try_init`
/// so a second call reports an error instead of panicking.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = config
        .log_level
        .as_ref()
        .map(|level| tracing_subscriber::EnvFilter::new(level.as_str()))
        .unwrap_or_else(|| {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        });

    let fmt_layer = config
        .enable_console
        .then_some(tracing_subscriber::fmt::layer());

    let sink_layer = tui_log_layer::tui_log_layer(config.log_sink.clone());

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(sink_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(service.name = %config.service_name, "tracing initialized");
    Ok(())
}

/// Initialize with configuration from environment variables.
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}
