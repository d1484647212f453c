//! viva-observability — tracing setup for the viva.chat client.
//!
//! Composes a `tracing-subscriber` registry from three layers: an env
//! filter, an optional console fmt layer, and a log-sink layer that
//! forwards each formatted line into the TUI's runtime-logs screen.
//!
//! # Quick Start
//!
//! ```no_run
//! use viva_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("viva").with_log_level("info");
//! init(config)?;
//!
//! tracing::info!("client started");
//! # Ok::<(), viva_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `VIVA_LOG` or `RUST_LOG` — log level filter

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tui_log_layer;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
