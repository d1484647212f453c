//! Map channel and speech events to [TuiState] updates, and turn UI actions
//! into outbound emissions.
//!
//! This is the whole handler table of the client: five inbound channel
//! events append to the transcript, two UI actions (topic submit, speech
//! result) produce outbound events. Everything here is plain state
//! manipulation so it is testable without a terminal or a socket.

use std::time::Instant;

use viva_core::{ChannelEvent, ClientEvent};
use viva_speech::SpeechEvent;

use crate::state::{RecordState, TuiState};

/// System message shown once at load when no recognizer backend exists.
pub const SPEECH_UNSUPPORTED_TEXT: &str = "❗ Speech Recognition not supported";

/// Apply an inbound channel event to the transcript.
pub fn apply_channel_event(state: &mut TuiState, event: ChannelEvent) {
    state.needs_redraw = true;
    match event {
        ChannelEvent::Connected => {
            state.push_system("🟢 Connected to server".to_string());
            state.set_status_permanent("Connected");
        }
        ChannelEvent::Disconnected => {
            state.push_system("🔴 Disconnected from server".to_string());
            state.set_status_permanent("Disconnected");
        }
        ChannelEvent::ConnectError { message } => {
            state.push_system(format!("❗ Connection error: {}", message));
            state.set_status_permanent("Connection error");
        }
        ChannelEvent::BotResponse { text, kind } => {
            if kind.is_system() {
                state.push_system(text);
            } else {
                state.push_bot(text);
            }
        }
        ChannelEvent::ServerError { message } => {
            state.push_system(format!("❗ {}", message));
        }
    }
}

/// Handle the submit action: trim the input, ignore when empty, otherwise
/// append the user entry, engage the 500 ms lock, and return the emission.
///
/// Empty input is left in place (nothing to clear); while the lock runs the
/// action is ignored entirely.
pub fn submit_topic(state: &mut TuiState, now: Instant) -> Option<ClientEvent> {
    if state.submit_locked(now) {
        return None;
    }
    let trimmed = state.input_buffer.trim();
    if trimmed.is_empty() {
        return None;
    }
    let topic = trimmed.to_string();
    state.input_take();
    state.push_user(format!("📚 Topic: {}", topic));
    state.lock_submit(now);
    Some(ClientEvent::topic(topic))
}

/// Handle the record action. Returns true when a recognition attempt should
/// start; ignored while listening or when unsupported.
pub fn begin_listening(state: &mut TuiState) -> bool {
    if state.record != RecordState::Idle {
        return false;
    }
    state.record = RecordState::Listening;
    state.needs_redraw = true;
    true
}

/// Apply the outcome of a recognition attempt. A transcript becomes a user
/// entry plus a `voice_answer` emission; an error becomes a system entry.
/// Either way the record control returns to ready state.
pub fn apply_speech_event(state: &mut TuiState, event: SpeechEvent) -> Option<ClientEvent> {
    if state.record == RecordState::Listening {
        state.record = RecordState::Idle;
    }
    state.listen_shimmer = None;
    state.needs_redraw = true;
    match event {
        SpeechEvent::Result { transcript } => {
            state.push_user(transcript.clone());
            Some(ClientEvent::voice_answer(transcript))
        }
        SpeechEvent::Error { message } => {
            state.push_system(format!("❗ Voice error: {}", message));
            None
        }
    }
}

/// Disable the record control for the session and show the one-time notice.
pub fn mark_speech_unsupported(state: &mut TuiState) {
    state.record = RecordState::Unsupported;
    state.push_system(SPEECH_UNSUPPORTED_TEXT.to_string());
}
