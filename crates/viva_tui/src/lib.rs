//! viva-tui — terminal UI for viva.chat.
//!
//! Theming in `theme`; layout in `layouts`; per-role messages in `messages`;
//! state and view in [state] and [view]. Run with [run::run_tui].

pub mod animation;
pub mod channel_events;
pub mod layouts;
pub mod messages;
pub mod run;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use run::{run_tui, SpeechPorts};
pub use state::{RecordState, Screen, TuiState};
pub use view::draw as draw_view;
