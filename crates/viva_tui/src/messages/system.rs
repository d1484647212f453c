//! System message rendering: connection/lifecycle/error status entries.
//!
//! Muted italic, no indicator; the text itself carries its marker
//! (🟢 / 🔴 / ❗ / …).

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use viva_core::Message;

use crate::layouts::text_muted_style;
use crate::theme::VivaPalette;
use crate::utils::{wrap_lines, LEFT_PADDING};

/// Build lines for a system entry: muted italic text, wrapped; continuation
/// lines indented.
pub fn system_message_lines(
    msg: &Message,
    palette: &VivaPalette,
    width: usize,
) -> Vec<Line<'static>> {
    let style = text_muted_style(palette.text_muted).add_modifier(Modifier::ITALIC);
    let wrap_width = width.saturating_sub(LEFT_PADDING.len()).max(1);
    let wrapped = wrap_lines(msg.text.trim(), wrap_width);

    if wrapped.is_empty() {
        return vec![Line::from(Span::styled(String::new(), style))];
    }

    let mut lines = Vec::with_capacity(wrapped.len());
    let mut first_line = Vec::new();
    if let Some(t) = &msg.timestamp {
        first_line.push(Span::styled(format!("{} ", t), style));
    }
    first_line.push(Span::styled(wrapped[0].clone(), style));
    lines.push(Line::from(first_line));

    for seg in wrapped.iter().skip(1) {
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(seg.clone(), style),
        ]));
    }
    lines
}
