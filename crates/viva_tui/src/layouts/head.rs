//! Header strip: title on the left, right-aligned status with a colored dot.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::style::{
    background_style, border_style, danger_style, success_style, text_muted_style, text_style,
    warning_style,
};
use crate::theme::VivaPalette;
use crate::utils::horizontal_padding;

/// Title shown in the header.
pub const HEADER_TITLE: &str = "viva.chat";

/// Status when none is set.
pub const HEADER_STATUS_READY: &str = "Ready";

/// Layout for the header: outer area and padded inner rect for content.
#[derive(Debug, Clone)]
pub struct HeadLayout {
    pub area: Rect,
    pub inner: Rect,
}

impl HeadLayout {
    pub fn new(area: Rect) -> Self {
        let inner = horizontal_padding(area);
        Self { area, inner }
    }
}

/// Build the header line: bold title left, right-aligned status with dot.
/// listening: amber dot; has_error: red dot; else green dot.
pub fn header_line(
    title: &str,
    status: &str,
    listening: bool,
    has_error: bool,
    palette: &VivaPalette,
    width: u16,
) -> Line<'static> {
    let title_style = text_style(palette.text).add_modifier(Modifier::BOLD);
    let dot_style = if has_error {
        danger_style(palette.danger)
    } else if listening {
        warning_style(palette.warning)
    } else {
        success_style(palette.success)
    };
    let left_len = title.chars().count() + 1;
    let right_len = 2 + status.chars().count(); // "● " + status
    let gap = (width as usize).saturating_sub(left_len + right_len);
    Line::from(vec![
        Span::styled(title.to_string(), title_style),
        Span::raw(" ".repeat(gap)),
        Span::styled("● ".to_string(), dot_style),
        Span::styled(status.to_string(), text_muted_style(palette.text_muted)),
    ])
}

/// Draw the header: title line over a bottom border, surface background.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    palette: &VivaPalette,
    title: &str,
    status: &str,
    listening: bool,
    has_error: bool,
) {
    let layout = HeadLayout::new(area);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(palette.border))
        .style(background_style(palette.surface_background));
    let line = header_line(
        title,
        status,
        listening,
        has_error,
        palette,
        layout.inner.width,
    );
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(line).style(background_style(palette.surface_background)),
        layout.inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_contains_title_and_status() {
        let palette = VivaPalette::viva_dark();
        let line = header_line(HEADER_TITLE, "Connected", false, false, &palette, 60);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with(HEADER_TITLE));
        assert!(text.ends_with("Connected"));
        assert!(text.contains('●'));
    }

    #[test]
    fn header_line_narrow_width_no_panic() {
        let palette = VivaPalette::viva_dark();
        let line = header_line(HEADER_TITLE, "a very long status text", false, true, &palette, 4);
        assert!(!line.spans.is_empty());
    }
}
