//! Bot message rendering: tutor content pushed by the server.
//!
//! Layout: muted left border + info-colored indicator, wrapped body text.

use ratatui::text::{Line, Span};
use viva_core::Message;

use crate::layouts::{info_style, text_muted_style, text_style};
use crate::theme::VivaPalette;
use crate::utils::{wrap_lines, LEFT_PADDING};

/// Indicator shown before a bot entry (info color).
pub const BOT_INDICATOR: &str = "▸";

/// Left border (2-char) for bot entries (muted).
const BOT_LEFT_BORDER: &str = "│ ";

/// Build lines for a bot entry: border + indicator + optional timestamp +
/// text start; continuation lines with border + 2-space indent.
pub fn bot_message_lines(
    msg: &Message,
    palette: &VivaPalette,
    width: usize,
) -> Vec<Line<'static>> {
    let border_span = Span::styled(
        BOT_LEFT_BORDER.to_string(),
        text_muted_style(palette.text_muted),
    );
    let indent_len = LEFT_PADDING.len() + BOT_LEFT_BORDER.chars().count();
    let wrap_width = width.saturating_sub(indent_len).max(1);
    let wrapped = wrap_lines(msg.text.trim(), wrap_width);

    let mut first_line = vec![
        border_span.clone(),
        Span::styled(BOT_INDICATOR.to_string(), info_style(palette.info)),
        Span::raw(" "),
    ];
    if let Some(t) = &msg.timestamp {
        first_line.push(Span::styled(
            format!("{} ", t),
            text_muted_style(palette.text_muted),
        ));
    }
    if wrapped.is_empty() {
        return vec![Line::from(first_line)];
    }

    let mut lines = Vec::with_capacity(wrapped.len());
    first_line.push(Span::styled(wrapped[0].clone(), text_style(palette.text)));
    lines.push(Line::from(first_line));

    for seg in wrapped.iter().skip(1) {
        lines.push(Line::from(vec![
            border_span.clone(),
            Span::raw(LEFT_PADDING),
            Span::styled(seg.clone(), text_style(palette.text)),
        ]));
    }
    lines
}
