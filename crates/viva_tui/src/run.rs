//! TUI run loop: terminal setup, event handling, draw.
//!
//! Key events are read in a dedicated thread so the main loop never blocks
//! on terminal input; channel, speech, and log receivers are drained
//! non-blockingly each iteration and applied in arrival order.

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc as tokio_mpsc;

use viva_core::{ChannelEvent, ClientEvent};
use viva_speech::SpeechEvent;

use crate::channel_events::{
    apply_channel_event, apply_speech_event, begin_listening, mark_speech_unsupported,
    submit_topic,
};
use crate::state::{RecordState, Screen, TuiState};
use crate::view;

/// Endpoints of the speech facility: a start signal sender and the attempt
/// outcome receiver. Absent when recognition is unsupported.
pub struct SpeechPorts {
    pub start: tokio_mpsc::Sender<()>,
    pub events: tokio_mpsc::Receiver<SpeechEvent>,
}

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Run the TUI against a connected channel.
///
/// `channel_rx`/`outbound_tx` are the endpoints of the channel client;
/// `speech` carries the recognizer endpoints (None disables the record
/// control and shows the unsupported notice once at load); `log_rx`
/// receives tracing lines for the runtime-logs screen (Ctrl+D).
pub fn run_tui(
    mut channel_rx: tokio_mpsc::Receiver<ChannelEvent>,
    outbound_tx: tokio_mpsc::Sender<ClientEvent>,
    speech: Option<SpeechPorts>,
    log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = TuiState::new();
    if speech.is_none() {
        mark_speech_unsupported(&mut state);
    }
    let result = run_loop(&mut terminal, &mut state, &mut channel_rx, &outbound_tx, speech, log_rx);

    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    channel_rx: &mut tokio_mpsc::Receiver<ChannelEvent>,
    outbound_tx: &tokio_mpsc::Sender<ClientEvent>,
    mut speech: Option<SpeechPorts>,
    mut log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || loop {
        if event::poll(Duration::from_millis(50)).unwrap_or(false) {
            if let Ok(ev) = event::read() {
                let _ = key_tx.send(ev);
            }
        }
    });

    loop {
        // Drain tracing lines into the runtime-logs buffer.
        if let Some(ref mut rx) = log_rx {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_trace_line(l.to_string());
                }
            }
        }
        // Drain channel events in arrival order.
        while let Ok(event) = channel_rx.try_recv() {
            apply_channel_event(state, event);
        }
        // Drain recognition outcomes; results become emissions.
        if let Some(ref mut ports) = speech {
            while let Ok(event) = ports.events.try_recv() {
                if let Some(emission) = apply_speech_event(state, event) {
                    let _ = outbound_tx.try_send(emission);
                }
            }
        }
        if state.auto_scroll {
            state.scroll = 0;
        }

        let now = Instant::now();
        state.release_submit_lock(now);

        // Clear transient status after the timeout.
        if !state.status_permanent {
            if let Some(set_at) = state.status_set_at {
                if set_at.elapsed() > STATUS_TIMEOUT {
                    state.status.clear();
                    state.status_set_at = None;
                    state.needs_redraw = true;
                }
            }
        }

        // Keep drawing while the listening indicator animates.
        let should_draw = state.needs_redraw || state.record == RecordState::Listening;
        if should_draw {
            state.frame_count = state.frame_count.wrapping_add(1);
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        if let Ok(ev) = key_rx.try_recv() {
            match ev {
                Event::Key(e) => {
                    if e.kind != KeyEventKind::Press {
                        continue;
                    }
                    match e.code {
                        KeyCode::Char('c') if e.modifiers.contains(KeyModifiers::CONTROL) => break,
                        KeyCode::Char('d') if e.modifiers.contains(KeyModifiers::CONTROL) => {
                            state.screen = match state.screen {
                                Screen::Main => Screen::RuntimeLogs,
                                Screen::RuntimeLogs => Screen::Main,
                            };
                            state.needs_redraw = true;
                        }
                        KeyCode::Char('q') if state.input_buffer.is_empty() => break,
                        KeyCode::Esc if state.screen == Screen::RuntimeLogs => {
                            state.screen = Screen::Main;
                            state.needs_redraw = true;
                        }
                        KeyCode::Up if state.screen == Screen::RuntimeLogs => {
                            state.trace_scroll_up(1)
                        }
                        KeyCode::Down if state.screen == Screen::RuntimeLogs => {
                            state.trace_scroll_down(1)
                        }
                        KeyCode::PageUp if state.screen == Screen::RuntimeLogs => {
                            state.trace_scroll_up(10)
                        }
                        KeyCode::PageDown if state.screen == Screen::RuntimeLogs => {
                            state.trace_scroll_down(10)
                        }
                        KeyCode::Up if state.screen == Screen::Main => state.scroll_up(1),
                        KeyCode::Down if state.screen == Screen::Main => state.scroll_down(1),
                        KeyCode::PageUp if state.screen == Screen::Main => state.scroll_up(5),
                        KeyCode::PageDown if state.screen == Screen::Main => state.scroll_down(5),
                        KeyCode::Enter if state.screen == Screen::Main => {
                            if let Some(emission) = submit_topic(state, Instant::now()) {
                                let _ = outbound_tx.try_send(emission);
                            }
                        }
                        KeyCode::Char('r')
                            if e.modifiers.contains(KeyModifiers::CONTROL)
                                && state.screen == Screen::Main =>
                        {
                            if let Some(ref ports) = speech {
                                if begin_listening(state) {
                                    let _ = ports.start.try_send(());
                                }
                            }
                        }
                        KeyCode::Char('u')
                            if e.modifiers.contains(KeyModifiers::CONTROL)
                                && state.screen == Screen::Main =>
                        {
                            state.input_clear_line()
                        }
                        KeyCode::Char('k')
                            if e.modifiers.contains(KeyModifiers::CONTROL)
                                && state.screen == Screen::Main =>
                        {
                            state.input_kill_to_end()
                        }
                        KeyCode::Char('y')
                            if e.modifiers.contains(KeyModifiers::CONTROL)
                                && state.input_buffer.is_empty()
                                && state.screen == Screen::Main =>
                        {
                            copy_last_answer_to_clipboard(state);
                        }
                        KeyCode::Backspace if state.screen == Screen::Main => {
                            state.input_backspace()
                        }
                        KeyCode::Char(c) if state.screen == Screen::Main => state.input_insert(c),
                        KeyCode::Left if state.screen == Screen::Main => state.input_cursor_left(),
                        KeyCode::Right if state.screen == Screen::Main => {
                            state.input_cursor_right()
                        }
                        KeyCode::Home if state.screen == Screen::Main => state.input_cursor_home(),
                        KeyCode::End if state.screen == Screen::Main => state.input_cursor_end(),
                        KeyCode::Delete if state.screen == Screen::Main => state.input_delete(),
                        _ => {}
                    }
                }
                Event::Resize(_, _) => {
                    state.cache_dirty = true;
                    state.needs_redraw = true;
                }
                Event::Mouse(me) => match me.kind {
                    MouseEventKind::ScrollUp => {
                        if state.screen == Screen::RuntimeLogs {
                            state.trace_scroll_up(3);
                        } else {
                            state.scroll_up(3);
                        }
                    }
                    MouseEventKind::ScrollDown => {
                        if state.screen == Screen::RuntimeLogs {
                            state.trace_scroll_down(3);
                        } else {
                            state.scroll_down(3);
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        } else {
            std::thread::sleep(Duration::from_millis(50));
        }
    }
    Ok(())
}

/// Copy the last bot answer to the system clipboard (Ctrl+Y, input empty).
fn copy_last_answer_to_clipboard(state: &mut TuiState) {
    let text = match state.last_bot_text() {
        Some(text) => text,
        None => return,
    };
    if cli_clipboard::set_contents(text).is_ok() {
        state.set_status("Copied answer to clipboard");
    }
}
