//! TUI state: transcript, input buffer, scroll, submit lock, record state.
//!
//! [TuiState] holds everything the view needs to render. The transcript is
//! a single ordered list of [Message]s; the role on each entry picks its
//! renderer in [crate::messages]. The transcript grows without bound in
//! append order; only the runtime-log buffer is capped.

use std::time::{Duration, Instant};

use viva_core::{Message, Role};

use crate::theme::{Appearance, VivaPalette};

/// Which screen is currently shown (main chat vs runtime logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    RuntimeLogs,
}

/// State of the record control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// Ready: a record action starts a recognition attempt.
    Idle,
    /// A recognition attempt is running; further record actions are ignored.
    Listening,
    /// No recognizer backend; the record control is disabled for the session.
    Unsupported,
}

/// How long the submit action stays locked after a valid submit.
pub const SUBMIT_LOCK: Duration = Duration::from_millis(500);

/// Max runtime-log lines to keep (older lines dropped).
const MAX_TRACE_LINES: usize = 2000;

/// TUI application state.
#[derive(Debug)]
pub struct TuiState {
    /// Ordered transcript to display.
    pub transcript: Vec<Message>,
    /// Current input line (footer).
    pub input_buffer: String,
    /// Cursor position within input_buffer (0..=len, byte index).
    pub input_cursor: usize,
    /// Vertical scroll offset (lines scrolled up from the bottom).
    pub scroll: usize,
    /// When true, keep scroll at bottom on new content.
    pub auto_scroll: bool,
    /// Theme palette (dark/light).
    pub palette: VivaPalette,
    /// Status text for the header right side.
    pub status: String,
    /// When set, status is transient and auto-clears after a timeout.
    pub status_set_at: Option<Instant>,
    /// Never auto-clear status (e.g. "Disconnected").
    pub status_permanent: bool,
    /// Set on a valid submit; cleared once [SUBMIT_LOCK] has elapsed.
    pub submit_locked_at: Option<Instant>,
    /// Record control state.
    pub record: RecordState,
    /// Incremented each run-loop iteration for animations.
    pub frame_count: u64,
    /// When true, next draw should run; cleared after draw.
    pub needs_redraw: bool,
    /// Cached transcript lines; invalidated by push_* / resize.
    pub cached_lines: Vec<ratatui::text::Line<'static>>,
    /// True when cached_lines is stale.
    pub cache_dirty: bool,
    /// Last content height from the previous draw (for scroll clamp).
    pub last_content_height: usize,
    /// Last viewport height from the previous draw (for scroll clamp).
    pub last_viewport_height: usize,
    /// Shimmer for the listening indicator (ticked while listening).
    pub listen_shimmer: Option<crate::animation::Shimmer>,
    /// Current screen (main chat or runtime logs).
    pub screen: Screen,
    /// Runtime log lines (tracing output). Newest at end, capped.
    pub trace_lines: Vec<String>,
    /// Scroll offset for the runtime-log view.
    pub trace_scroll: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            transcript: Vec::new(),
            input_buffer: String::new(),
            input_cursor: 0,
            scroll: 0,
            auto_scroll: true,
            palette: VivaPalette::viva_dark(),
            status: String::new(),
            status_set_at: None,
            status_permanent: false,
            submit_locked_at: None,
            record: RecordState::Idle,
            frame_count: 0,
            needs_redraw: true,
            cached_lines: Vec::new(),
            cache_dirty: true,
            last_content_height: 0,
            last_viewport_height: 0,
            listen_shimmer: None,
            screen: Screen::Main,
            trace_lines: Vec::new(),
            trace_scroll: 0,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appearance(appearance: Appearance) -> Self {
        Self {
            palette: VivaPalette::for_appearance(appearance),
            ..Self::default()
        }
    }

    fn after_push(&mut self) {
        self.cache_dirty = true;
        self.needs_redraw = true;
        if self.auto_scroll {
            self.scroll = 0;
        }
    }

    /// Append a system entry (connection/lifecycle/error status).
    pub fn push_system(&mut self, text: String) {
        self.transcript.push(Message::system(text));
        self.after_push();
    }

    /// Append a user entry, stamped with the local time.
    pub fn push_user(&mut self, text: String) {
        self.transcript.push(Message::user(text).stamped_now());
        self.after_push();
    }

    /// Append a bot entry, stamped with the local time.
    pub fn push_bot(&mut self, text: String) {
        self.transcript.push(Message::bot(text).stamped_now());
        self.after_push();
    }

    /// Text of the most recent bot entry, if any.
    pub fn last_bot_text(&self) -> Option<String> {
        self.transcript
            .iter()
            .rev()
            .find(|m| m.role == Role::Bot)
            .map(|m| m.text.clone())
    }

    // --- Submit lock -------------------------------------------------------

    /// Engage the submit lock as of `now`.
    pub fn lock_submit(&mut self, now: Instant) {
        self.submit_locked_at = Some(now);
        self.needs_redraw = true;
    }

    /// True while the lock window is still running at `now`.
    pub fn submit_locked(&self, now: Instant) -> bool {
        match self.submit_locked_at {
            Some(at) => now.saturating_duration_since(at) < SUBMIT_LOCK,
            None => false,
        }
    }

    /// Drop the lock once its window has elapsed. Returns true when the lock
    /// was released this call (so the caller can redraw the hint line).
    pub fn release_submit_lock(&mut self, now: Instant) -> bool {
        if self.submit_locked_at.is_some() && !self.submit_locked(now) {
            self.submit_locked_at = None;
            self.needs_redraw = true;
            return true;
        }
        false
    }

    // --- Status ------------------------------------------------------------

    /// Set a transient status (auto-clears after the run loop's timeout).
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
        self.status_set_at = Some(Instant::now());
        self.status_permanent = false;
        self.needs_redraw = true;
    }

    /// Set a status that stays until replaced.
    pub fn set_status_permanent(&mut self, text: impl Into<String>) {
        self.status = text.into();
        self.status_set_at = None;
        self.status_permanent = true;
        self.needs_redraw = true;
    }

    // --- Input buffer ------------------------------------------------------

    /// Insert a character at the cursor.
    pub fn input_insert(&mut self, c: char) {
        self.input_buffer.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
        self.needs_redraw = true;
    }

    /// Delete the character before the cursor (UTF-8 safe).
    pub fn input_backspace(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let mut start = self.input_cursor - 1;
        while start > 0 && (self.input_buffer.as_bytes()[start] & 0xC0) == 0x80 {
            start -= 1;
        }
        self.input_buffer.drain(start..self.input_cursor);
        self.input_cursor = start;
        self.needs_redraw = true;
    }

    /// Delete the character at the cursor (forward delete, UTF-8 safe).
    pub fn input_delete(&mut self) {
        if self.input_cursor >= self.input_buffer.len() {
            return;
        }
        let mut end = self.input_cursor + 1;
        while end < self.input_buffer.len() && (self.input_buffer.as_bytes()[end] & 0xC0) == 0x80 {
            end += 1;
        }
        self.input_buffer.drain(self.input_cursor..end);
        self.needs_redraw = true;
    }

    /// Move the cursor left one character (UTF-8 safe).
    pub fn input_cursor_left(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let mut start = self.input_cursor - 1;
        while start > 0 && (self.input_buffer.as_bytes()[start] & 0xC0) == 0x80 {
            start -= 1;
        }
        self.input_cursor = start;
        self.needs_redraw = true;
    }

    /// Move the cursor right one character (UTF-8 safe).
    pub fn input_cursor_right(&mut self) {
        if self.input_cursor >= self.input_buffer.len() {
            return;
        }
        let mut end = self.input_cursor + 1;
        while end < self.input_buffer.len() && (self.input_buffer.as_bytes()[end] & 0xC0) == 0x80 {
            end += 1;
        }
        self.input_cursor = end;
        self.needs_redraw = true;
    }

    /// Cursor to start of input.
    pub fn input_cursor_home(&mut self) {
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Cursor to end of input; if empty, re-enable auto scroll.
    pub fn input_cursor_end(&mut self) {
        self.input_cursor = self.input_buffer.len();
        if self.input_buffer.is_empty() {
            self.auto_scroll = true;
            self.scroll = 0;
        }
        self.needs_redraw = true;
    }

    /// Clear the entire input buffer (Ctrl+U).
    pub fn input_clear_line(&mut self) {
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Delete from cursor to end of line (Ctrl+K).
    pub fn input_kill_to_end(&mut self) {
        self.input_buffer.truncate(self.input_cursor);
        self.needs_redraw = true;
    }

    /// Clear and return the current line (for submit).
    pub fn input_take(&mut self) -> String {
        let line = std::mem::take(&mut self.input_buffer);
        self.input_cursor = 0;
        self.needs_redraw = true;
        line
    }

    // --- Scroll ------------------------------------------------------------

    /// Scroll up (increase offset); disables auto scroll.
    pub fn scroll_up(&mut self, delta: usize) {
        self.auto_scroll = false;
        self.scroll = self.scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    /// Scroll down (decrease offset); re-enables auto scroll at the bottom.
    pub fn scroll_down(&mut self, delta: usize) {
        self.scroll = self.scroll.saturating_sub(delta);
        if self.scroll == 0 {
            self.auto_scroll = true;
        }
        self.needs_redraw = true;
    }

    // --- Runtime logs ------------------------------------------------------

    /// Append a line to the runtime-log buffer (Ctrl+D screen). Drops the
    /// oldest lines over capacity.
    pub fn push_trace_line(&mut self, line: String) {
        self.trace_lines.push(line);
        if self.trace_lines.len() > MAX_TRACE_LINES {
            let excess = self.trace_lines.len() - MAX_TRACE_LINES;
            self.trace_lines.drain(0..excess);
        }
        self.needs_redraw = true;
    }

    pub fn trace_scroll_up(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    pub fn trace_scroll_down(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_sub(delta);
        self.needs_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_insert_ascii() {
        let mut s = TuiState::new();
        s.input_insert('a');
        s.input_insert('b');
        assert_eq!(s.input_buffer, "ab");
        assert_eq!(s.input_cursor, 2);
    }

    #[test]
    fn input_insert_utf8_emoji() {
        let mut s = TuiState::new();
        s.input_insert('é');
        s.input_insert('📚');
        assert_eq!(s.input_buffer, "é📚");
        assert_eq!(s.input_cursor, "é📚".len());
    }

    #[test]
    fn input_backspace_at_end() {
        let mut s = TuiState::new();
        s.input_buffer = "hi".to_string();
        s.input_cursor = 2;
        s.input_backspace();
        assert_eq!(s.input_buffer, "h");
        assert_eq!(s.input_cursor, 1);
    }

    #[test]
    fn input_backspace_at_zero_no_op() {
        let mut s = TuiState::new();
        s.input_buffer = "x".to_string();
        s.input_cursor = 0;
        s.input_backspace();
        assert_eq!(s.input_buffer, "x");
    }

    #[test]
    fn input_take_returns_and_resets() {
        let mut s = TuiState::new();
        s.input_buffer = "photosynthesis".to_string();
        s.input_cursor = 5;
        let line = s.input_take();
        assert_eq!(line, "photosynthesis");
        assert!(s.input_buffer.is_empty());
        assert_eq!(s.input_cursor, 0);
    }

    #[test]
    fn input_cursor_multibyte() {
        let mut s = TuiState::new();
        s.input_insert('你');
        s.input_insert('好');
        s.input_cursor_left();
        assert_eq!(s.input_cursor, "你".len());
        s.input_cursor_left();
        assert_eq!(s.input_cursor, 0);
        s.input_cursor_right();
        assert_eq!(s.input_cursor, "你".len());
    }

    #[test]
    fn input_delete_forward() {
        let mut s = TuiState::new();
        s.input_buffer = "abc".to_string();
        s.input_cursor = 1;
        s.input_delete();
        assert_eq!(s.input_buffer, "ac");
        assert_eq!(s.input_cursor, 1);
    }

    #[test]
    fn input_clear_and_kill() {
        let mut s = TuiState::new();
        s.input_buffer = "hello world".to_string();
        s.input_cursor = 5;
        s.input_kill_to_end();
        assert_eq!(s.input_buffer, "hello");
        s.input_clear_line();
        assert!(s.input_buffer.is_empty());
        assert_eq!(s.input_cursor, 0);
    }

    #[test]
    fn push_entries_by_role() {
        let mut s = TuiState::new();
        s.push_system("🟢 Connected to server".to_string());
        s.push_user("📚 Topic: photosynthesis".to_string());
        s.push_bot("Photosynthesis is…".to_string());
        assert_eq!(s.transcript.len(), 3);
        assert_eq!(s.transcript[0].role, Role::System);
        assert!(s.transcript[0].text.contains("Connected"));
        assert_eq!(s.transcript[1].role, Role::User);
        assert_eq!(s.transcript[2].role, Role::Bot);
    }

    #[test]
    fn user_and_bot_entries_are_stamped_system_is_not() {
        let mut s = TuiState::new();
        s.push_user("hi".to_string());
        s.push_bot("hello".to_string());
        s.push_system("🔴 Disconnected from server".to_string());
        assert!(s.transcript[0].timestamp.is_some());
        assert!(s.transcript[1].timestamp.is_some());
        assert!(s.transcript[2].timestamp.is_none());
    }

    #[test]
    fn last_bot_text_skips_other_roles() {
        let mut s = TuiState::new();
        s.push_bot("first answer".to_string());
        s.push_user("follow-up".to_string());
        s.push_system("🔴 Disconnected from server".to_string());
        assert_eq!(s.last_bot_text().as_deref(), Some("first answer"));
    }

    #[test]
    fn last_bot_text_empty_transcript() {
        assert!(TuiState::new().last_bot_text().is_none());
    }

    #[test]
    fn submit_lock_engages_immediately() {
        let mut s = TuiState::new();
        let t0 = Instant::now();
        assert!(!s.submit_locked(t0));
        s.lock_submit(t0);
        assert!(s.submit_locked(t0));
    }

    #[test]
    fn submit_lock_holds_under_500ms() {
        let mut s = TuiState::new();
        let t0 = Instant::now();
        s.lock_submit(t0);
        assert!(s.submit_locked(t0 + Duration::from_millis(499)));
    }

    #[test]
    fn submit_lock_releases_at_500ms() {
        let mut s = TuiState::new();
        let t0 = Instant::now();
        s.lock_submit(t0);
        assert!(!s.submit_locked(t0 + SUBMIT_LOCK));
        assert!(!s.submit_locked(t0 + Duration::from_millis(750)));
    }

    #[test]
    fn release_submit_lock_clears_once_elapsed() {
        let mut s = TuiState::new();
        let t0 = Instant::now();
        s.lock_submit(t0);
        assert!(!s.release_submit_lock(t0 + Duration::from_millis(100)));
        assert!(s.submit_locked_at.is_some());
        assert!(s.release_submit_lock(t0 + SUBMIT_LOCK));
        assert!(s.submit_locked_at.is_none());
        // Second call is a no-op.
        assert!(!s.release_submit_lock(t0 + SUBMIT_LOCK));
    }

    #[test]
    fn scroll_up_disables_auto_scroll() {
        let mut s = TuiState::new();
        s.scroll_up(3);
        assert!(!s.auto_scroll);
        assert_eq!(s.scroll, 3);
    }

    #[test]
    fn scroll_down_to_zero_enables_auto_scroll() {
        let mut s = TuiState::new();
        s.auto_scroll = false;
        s.scroll = 1;
        s.scroll_down(1);
        assert_eq!(s.scroll, 0);
        assert!(s.auto_scroll);
    }

    #[test]
    fn auto_scroll_off_preserves_scroll() {
        let mut s = TuiState::new();
        s.auto_scroll = false;
        s.scroll = 10;
        s.push_user("hi".to_string());
        assert_eq!(s.scroll, 10);
    }

    #[test]
    fn cache_dirty_on_push() {
        let mut s = TuiState::new();
        s.cache_dirty = false;
        s.push_bot("test".to_string());
        assert!(s.cache_dirty);
    }

    #[test]
    fn trace_lines_capped() {
        let mut s = TuiState::new();
        for i in 0..2500 {
            s.push_trace_line(format!("line {}", i));
        }
        assert!(s.trace_lines.len() <= 2000);
        assert_eq!(s.trace_lines.last().unwrap(), "line 2499");
    }
}
