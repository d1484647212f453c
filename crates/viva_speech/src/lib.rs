//! viva-speech — speech-to-text facility for viva.chat.
//!
//! Mirrors the capability-object contract the client needs: a language tag,
//! interim-results and max-alternatives settings, and one-shot recognition
//! (one start, then one final transcript or one error). [CommandRecognizer]
//! backs the contract with an external transcriber process; when no command
//! is configured the facility reports itself unsupported and the UI disables
//! its record control.

pub mod command;
pub mod config;
pub mod recognizer;

pub use command::CommandRecognizer;
pub use config::RecognizerConfig;
pub use recognizer::{SpeechError, SpeechEvent, SpeechRecognizer};
