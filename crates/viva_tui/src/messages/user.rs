//! User message rendering.
//!
//! Layout:
//! - First line: accent indicator (`»`) + optional timestamp + text start
//! - Continuation: 2-space indent, wrapped text

use ratatui::text::{Line, Span};
use viva_core::Message;

use crate::layouts::{text_muted_style, text_style};
use crate::theme::VivaPalette;
use crate::utils::{wrap_lines, LEFT_PADDING};

/// Indicator shown before a user entry (accent color).
pub const USER_INDICATOR: &str = "»";

/// Build lines for a user entry: indicator + optional timestamp + text,
/// continuation lines indented.
pub fn user_message_lines(
    msg: &Message,
    palette: &VivaPalette,
    width: usize,
) -> Vec<Line<'static>> {
    let indent_len = LEFT_PADDING.len() + USER_INDICATOR.chars().count() + 1;
    let wrap_width = width.saturating_sub(indent_len).max(1);
    let wrapped = wrap_lines(msg.text.trim(), wrap_width);

    let mut first_line = vec![
        Span::styled(USER_INDICATOR.to_string(), text_style(palette.accent)),
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
            Span::raw(LEFT_PADDING),
            Span::styled(seg.clone(), text_style(palette.text)),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_has_indicator() {
        let msg = Message::user("📚 Topic: photosynthesis");
        let palette = VivaPalette::viva_dark();
        let lines = user_message_lines(&msg, &palette, 40);
        assert!(!lines.is_empty());
        assert!(lines[0]
            .spans
            .iter()
            .any(|s| s.content.as_ref() == USER_INDICATOR));
    }

    #[test]
    fn wraps_long_text() {
        let msg = Message::user("one two three four five six seven");
        let palette = VivaPalette::viva_dark();
        let lines = user_message_lines(&msg, &palette, 12);
        assert!(lines.len() > 1);
    }

    #[test]
    fn empty_text_still_renders() {
        let msg = Message::user("");
        let palette = VivaPalette::viva_dark();
        assert!(!user_message_lines(&msg, &palette, 40).is_empty());
    }

    #[test]
    fn timestamp_shown() {
        let mut msg = Message::user("hi");
        msg.timestamp = Some("09:15".into());
        let palette = VivaPalette::viva_dark();
        let lines = user_message_lines(&msg, &palette, 40);
        assert!(lines[0].spans.iter().any(|s| s.content.contains("09:15")));
    }
}
