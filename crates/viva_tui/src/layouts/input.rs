//! Input bar layout: bordered bottom strip for the topic line.

use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use super::style::{background_style, border_focused_style, border_style};
use crate::theme::VivaPalette;
use crate::utils::{horizontal_padding, padding, HORIZONTAL_PADDING};

/// Horizontal padding inside the input block (each side).
pub const INPUT_PADDING_H: u16 = 2;

/// Prompt icon at the start of the input line.
pub const INPUT_ICON: &str = "▸ ";

/// Layout for the input bar: outer area and inner rect for cursor/content.
#[derive(Debug, Clone)]
pub struct InputLayout {
    pub area: Rect,
    pub inner: Rect,
}

impl InputLayout {
    pub fn new(area: Rect) -> Self {
        let inner = horizontal_padding(area);
        Self { area, inner }
    }

    /// With optional vertical padding (when the bar is taller than 1 line).
    pub fn with_vertical_padding(area: Rect, v_pad: u16) -> Self {
        let inner = padding(area, HORIZONTAL_PADDING, v_pad);
        Self { area, inner }
    }
}

/// Rounded, bordered block for the input area. When `focused` the border
/// uses the accent glow; focused is typically always true while the input
/// is active.
pub fn block_for_input(palette: &VivaPalette, focused: bool) -> Block<'static> {
    let border = if focused {
        border_focused_style(palette.border_focused)
    } else {
        border_style(palette.border)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(background_style(palette.surface_background))
        .padding(Padding::new(INPUT_PADDING_H, INPUT_PADDING_H, 0, 0))
}
