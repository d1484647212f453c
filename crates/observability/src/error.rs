//! Error types for observability setup.

use thiserror::Error;

/// Errors raised while installing the tracing subscriber.
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber is already installed, or layer setup failed.
    #[error("failed to initialize observability: {0}")]
    InitFailed(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
