//! TUI view: header (fixed top), scrollable transcript, input + shortcut
//! (fixed bottom). A secondary screen shows runtime logs.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::layouts::{
    background_style, block_for_input, border_style, main_splits, render_header,
    shortcut_inner_rect, shortcut_line, text_muted_style, text_style, vertical_split, LogLayout,
    HEADER_STATUS_READY, HEADER_TITLE, INPUT_ICON,
};
use crate::messages::{bot, system, user};
use crate::state::{RecordState, Screen, TuiState};
use crate::utils::clamp_scroll;
use viva_core::Role;

/// Label for the listening indicator (shimmer-animated while recording).
const LISTENING_LABEL: &str = "🎙 Listening…";

/// Draw the full TUI for the current screen.
pub fn draw(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    match state.screen {
        Screen::RuntimeLogs => draw_runtime_logs(frame, state, area),
        Screen::Main => draw_main(frame, state, area),
    }
}

/// Runtime-logs screen: scrollable tracing output. Ctrl+D to close.
fn draw_runtime_logs(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    use ratatui::widgets::{Block, Borders};

    let palette = &state.palette;
    let block = Block::default()
        .title(" Runtime logs (Ctrl+D to close) ")
        .borders(Borders::ALL)
        .border_style(border_style(palette.border))
        .style(background_style(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let viewport_height = inner.height as usize;
    state.trace_scroll = clamp_scroll(state.trace_scroll, state.trace_lines.len(), viewport_height);

    let lines: Vec<Line> = state
        .trace_lines
        .iter()
        .skip(state.trace_scroll)
        .take(viewport_height)
        .map(|s| Line::from(Span::styled(s.clone(), text_muted_style(palette.text_muted))))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Main screen: header, transcript, listening indicator, input, shortcuts.
fn draw_main(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let splits = main_splits(area);
    let palette = state.palette.clone();

    // ---- Header ----
    let status = if state.status.is_empty() {
        HEADER_STATUS_READY
    } else {
        state.status.as_str()
    };
    let has_error = state.status.to_lowercase().contains("error")
        || state.status.to_lowercase().contains("disconnected");
    let listening = state.record == RecordState::Listening;
    render_header(
        frame,
        splits.header,
        &palette,
        HEADER_TITLE,
        status,
        listening,
        has_error,
    );

    // ---- Body: scrollable transcript ----
    let log = LogLayout::new(splits.body);
    let width = log.inner.width as usize;
    let viewport_height = log.inner.height as usize;
    let spacer = Line::from("");

    let mut all_lines: Vec<Line> = if state.cache_dirty {
        let mut lines = Vec::new();
        for msg in &state.transcript {
            if !lines.is_empty() {
                lines.push(spacer.clone());
            }
            match msg.role {
                Role::System => lines.extend(system::system_message_lines(msg, &palette, width)),
                Role::User => lines.extend(user::user_message_lines(msg, &palette, width)),
                Role::Bot => lines.extend(bot::bot_message_lines(msg, &palette, width)),
            }
        }
        state.cached_lines = lines.clone();
        state.cache_dirty = false;
        lines
    } else {
        state.cached_lines.clone()
    };

    // Listening indicator below the transcript while a recognition runs.
    if listening {
        if !all_lines.is_empty() {
            all_lines.push(spacer.clone());
        }
        let shimmer = state
            .listen_shimmer
            .get_or_insert_with(crate::animation::Shimmer::new);
        shimmer.tick();
        all_lines.push(Line::from(shimmer.styled_spans(LISTENING_LABEL, &palette)));
    }

    let content_height = all_lines.len();
    let max_scroll = content_height.saturating_sub(viewport_height);
    state.scroll = state.scroll.min(max_scroll);
    state.last_content_height = content_height;
    state.last_viewport_height = viewport_height;

    // scroll=0 → show last lines; scroll=max → show first lines.
    let offset_from_top = max_scroll.saturating_sub(state.scroll);
    let visible: Vec<Line> = all_lines
        .into_iter()
        .skip(offset_from_top)
        .take(viewport_height)
        .collect();

    if state.transcript.is_empty() && !listening {
        // Empty state: welcome text.
        let title_line = Line::from(Span::styled(
            HEADER_TITLE.to_string(),
            text_style(palette.text),
        ));
        let sub = if state.record == RecordState::Unsupported {
            "Submit a topic to begin."
        } else {
            "Submit a topic to begin, or press Ctrl+R to ask by voice."
        };
        let sub_line = Line::from(Span::styled(
            sub.to_string(),
            text_muted_style(palette.text_muted),
        ));
        let para = Paragraph::new(vec![Line::from(""), title_line, Line::from(""), sub_line])
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(para, log.inner);
    } else {
        frame.render_widget(
            Paragraph::new(visible).wrap(Wrap { trim: false }),
            log.inner,
        );
    }

    // Scrollbar when content exceeds the viewport.
    if content_height > viewport_height && !state.transcript.is_empty() {
        draw_scrollbar(
            frame,
            log.inner,
            &palette,
            content_height,
            viewport_height,
            offset_from_top,
            max_scroll,
        );
    }

    // ---- Footer: input block + shortcut ----
    let (input_rect, shortcut_rect) = vertical_split(splits.footer, 3);

    let block = block_for_input(&palette, true);
    let inner = block.inner(input_rect);
    frame.render_widget(block, input_rect);

    let placeholder = "Enter a topic…";
    let (icon_style, content_style) = if state.input_buffer.is_empty() {
        (
            text_style(palette.accent),
            text_style(palette.text_placeholder),
        )
    } else {
        (text_style(palette.success), text_style(palette.text))
    };
    let input_line = Line::from(vec![
        Span::styled(INPUT_ICON.to_string(), icon_style),
        Span::styled(
            if state.input_buffer.is_empty() {
                placeholder.to_string()
            } else {
                state.input_buffer.clone()
            },
            content_style,
        ),
    ]);
    frame.render_widget(Paragraph::new(input_line), inner);

    // Cursor position by display width.
    let icon_width = INPUT_ICON.width();
    let before_cursor = &state.input_buffer[..state.input_cursor.min(state.input_buffer.len())];
    let cursor_col = (inner.x + icon_width as u16 + before_cursor.width() as u16)
        .min(inner.x + inner.width);
    frame.set_cursor_position((cursor_col, inner.y));

    let now = std::time::Instant::now();
    frame.render_widget(
        Paragraph::new(shortcut_line(
            &palette,
            listening,
            state.record != RecordState::Unsupported,
            !state.input_buffer.is_empty(),
            state.submit_locked(now),
        )),
        shortcut_inner_rect(shortcut_rect),
    );
}

#[allow(clippy::too_many_arguments)]
fn draw_scrollbar(
    frame: &mut Frame,
    inner: Rect,
    palette: &crate::theme::VivaPalette,
    content_height: usize,
    viewport_height: usize,
    offset_from_top: usize,
    max_scroll: usize,
) {
    let thumb_height = (((viewport_height as f64) * (viewport_height as f64)
        / (content_height as f64).max(1.0))
        .ceil() as u16)
        .max(1);
    let scroll_ratio = if max_scroll == 0 {
        1.0
    } else {
        offset_from_top as f64 / max_scroll as f64
    };
    let thumb_y = (scroll_ratio * (viewport_height as f64 - thumb_height as f64)).round() as u16;
    let track_rect = Rect {
        x: inner.x + inner.width.saturating_sub(1),
        y: inner.y,
        width: 1,
        height: inner.height,
    };
    frame.render_widget(
        ratatui::widgets::Block::default().style(background_style(palette.scrollbar_track)),
        track_rect,
    );
    let thumb_rect = Rect {
        x: track_rect.x,
        y: track_rect.y + thumb_y,
        width: 1,
        height: thumb_height.min(track_rect.height),
    };
    frame.render_widget(
        ratatui::widgets::Block::default().style(background_style(palette.scrollbar_thumb)),
        thumb_rect,
    );
}
