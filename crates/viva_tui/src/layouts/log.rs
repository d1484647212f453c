//! Transcript body layout: the scrollable middle region.

use ratatui::layout::Rect;

use crate::utils::{horizontal_padding, MESSAGE_SPACING_LINES};

/// Layout for the transcript body: outer area and padded inner rect.
#[derive(Debug, Clone)]
pub struct LogLayout {
    pub area: Rect,
    pub inner: Rect,
}

impl LogLayout {
    pub fn new(area: Rect) -> Self {
        let inner = horizontal_padding(area);
        Self { area, inner }
    }
}

/// Blank lines between transcript entries.
pub const LOG_MESSAGE_SPACING: usize = MESSAGE_SPACING_LINES;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_layout_inner_has_padding() {
        let area = Rect::new(0, 0, 80, 20);
        let layout = LogLayout::new(area);
        assert!(layout.inner.width < area.width);
        assert_eq!(layout.inner.height, area.height);
    }

    #[test]
    fn log_layout_zero_size() {
        let area = Rect::new(0, 0, 0, 0);
        let layout = LogLayout::new(area);
        assert_eq!(layout.inner.width, 0);
        assert_eq!(layout.inner.height, 0);
    }
}
