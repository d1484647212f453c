//! Layout helpers for Rects and scroll offsets.

use ratatui::layout::Rect;

use crate::utils::constants::HORIZONTAL_PADDING;

/// Apply the default horizontal padding to a Rect (symmetric left/right).
#[inline]
pub fn horizontal_padding(area: Rect) -> Rect {
    horizontal_padding_with(area, HORIZONTAL_PADDING)
}

/// Apply horizontal padding with a custom amount.
#[inline]
pub fn horizontal_padding_with(area: Rect, pad: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(pad),
        y: area.y,
        width: area.width.saturating_sub(pad.saturating_mul(2)),
        height: area.height,
    }
}

/// Apply padding on all four sides.
#[inline]
pub fn padding(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(horizontal),
        y: area.y.saturating_add(vertical),
        width: area.width.saturating_sub(horizontal.saturating_mul(2)),
        height: area.height.saturating_sub(vertical.saturating_mul(2)),
    }
}

/// Clamp a scroll offset so the viewport never runs past the content.
pub fn clamp_scroll(offset: usize, content_height: usize, viewport_height: usize) -> usize {
    offset.min(content_height.saturating_sub(viewport_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_padding_shrinks_width() {
        let area = Rect::new(0, 0, 80, 20);
        let inner = horizontal_padding(area);
        assert_eq!(inner.x, HORIZONTAL_PADDING);
        assert_eq!(inner.width, 80 - 2 * HORIZONTAL_PADDING);
        assert_eq!(inner.height, 20);
    }

    #[test]
    fn horizontal_padding_zero_width() {
        let area = Rect::new(0, 0, 2, 20);
        let inner = horizontal_padding(area);
        assert_eq!(inner.width, 0);
    }

    #[test]
    fn padding_all_sides() {
        let area = Rect::new(0, 0, 20, 10);
        let inner = padding(area, 2, 1);
        assert_eq!(inner, Rect::new(2, 1, 16, 8));
    }

    #[test]
    fn clamp_scroll_fits_viewport() {
        assert_eq!(clamp_scroll(5, 10, 20), 0);
    }

    #[test]
    fn clamp_scroll_limits_offset() {
        assert_eq!(clamp_scroll(100, 50, 20), 30);
    }
}
