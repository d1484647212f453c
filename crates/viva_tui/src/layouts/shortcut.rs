//! Shortcut hint line: fixed strip below the input, context-aware.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use super::input::INPUT_PADDING_H;
use super::style::text_muted_style;
use crate::theme::VivaPalette;

/// Horizontal inset so the hint aligns with the input content above
/// (input border + input padding).
const SHORTCUT_INSET_H: u16 = 1 + INPUT_PADDING_H;

/// Rect for the hint line, inset to align with the input content.
pub fn shortcut_inner_rect(area: Rect) -> Rect {
    let w = area.width.saturating_sub(SHORTCUT_INSET_H.saturating_mul(2));
    Rect {
        x: area.x.saturating_add(SHORTCUT_INSET_H),
        y: area.y,
        width: w,
        height: area.height,
    }
}

/// Build the hint line for the footer. Dynamic based on state:
/// - While the submit lock runs: "Sending topic…"
/// - While listening: "🎙 Listening…"
/// - When the input has text: submit hints
/// - When idle: scroll/record/quit hints; the record hint disappears when
///   speech is unsupported (the disabled record control).
pub fn shortcut_line(
    palette: &VivaPalette,
    listening: bool,
    speech_supported: bool,
    input_has_text: bool,
    submit_locked: bool,
) -> Line<'static> {
    let hint = if submit_locked {
        "Sending topic…  ·  Ctrl+C: quit".to_string()
    } else if listening {
        "🎙 Listening…  ·  Ctrl+C: quit".to_string()
    } else if input_has_text {
        "Enter: send topic  ·  Ctrl+U: clear  ·  Ctrl+C: quit".to_string()
    } else if speech_supported {
        "↑↓: scroll  ·  Ctrl+R: 🎤 speak a question  ·  Ctrl+Y: copy answer  ·  q: quit"
            .to_string()
    } else {
        "↑↓: scroll  ·  Ctrl+Y: copy answer  ·  q: quit".to_string()
    };
    Line::from(vec![Span::styled(
        hint,
        text_muted_style(palette.text_muted),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_inner_rect_zero_width() {
        let inner = shortcut_inner_rect(Rect::new(0, 0, 0, 1));
        assert_eq!(inner.width, 0);
    }

    #[test]
    fn shortcut_line_locked() {
        let palette = VivaPalette::viva_dark();
        let line = shortcut_line(&palette, false, true, false, true);
        assert!(line.spans.iter().any(|s| s.content.contains("Sending")));
    }

    #[test]
    fn shortcut_line_listening() {
        let palette = VivaPalette::viva_dark();
        let line = shortcut_line(&palette, true, true, false, false);
        assert!(line.spans.iter().any(|s| s.content.contains("Listening")));
    }

    #[test]
    fn shortcut_line_typing() {
        let palette = VivaPalette::viva_dark();
        let line = shortcut_line(&palette, false, true, true, false);
        assert!(line.spans.iter().any(|s| s.content.contains("Enter")));
    }

    #[test]
    fn shortcut_line_idle_offers_record() {
        let palette = VivaPalette::viva_dark();
        let line = shortcut_line(&palette, false, true, false, false);
        assert!(line.spans.iter().any(|s| s.content.contains("Ctrl+R")));
    }

    #[test]
    fn shortcut_line_unsupported_hides_record() {
        let palette = VivaPalette::viva_dark();
        let line = shortcut_line(&palette, false, false, false, false);
        assert!(!line.spans.iter().any(|s| s.content.contains("Ctrl+R")));
    }
}
