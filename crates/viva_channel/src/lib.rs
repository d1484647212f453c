//! viva-channel — WebSocket channel client for viva.chat.
//!
//! [connect] opens the socket in a background task and returns a
//! [ChannelHandle]: an event receiver and an outbound sender that get
//! injected into the UI loop. Lifecycle events (connected, disconnected,
//! connection error) are synthesized here; payload events are decoded with
//! [viva_core::wire].

pub mod client;
pub mod config;

pub use client::{connect, ChannelHandle};
pub use config::ChannelConfig;
