//! Split the terminal area into header, body, and footer regions.

use ratatui::layout::Rect;

use crate::utils::horizontal_padding;

/// Fixed height for the header (title line + border line).
pub const HEADER_HEIGHT: u16 = 2;

/// Fixed height for the footer: bordered input (3 lines) + shortcut line.
pub const FOOTER_HEIGHT: u16 = 4;

/// Regions of the main layout: header, scrollable body, footer.
#[derive(Debug, Clone)]
pub struct MainSplits {
    /// Top strip (title + status).
    pub header: Rect,
    /// Middle area (transcript). May have zero height when the terminal is
    /// too small; body is already horizontally padded.
    pub body: Rect,
    /// Bottom strip (input + shortcut hint).
    pub footer: Rect,
}

/// Split `area` into header (fixed top), body (middle, padded), footer
/// (fixed bottom) using [HEADER_HEIGHT] and [FOOTER_HEIGHT].
pub fn main_splits(area: Rect) -> MainSplits {
    let body_h = area.height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT);
    let header = Rect {
        height: HEADER_HEIGHT,
        ..area
    };
    let body = Rect {
        y: area.y.saturating_add(HEADER_HEIGHT),
        height: body_h,
        ..area
    };
    let footer = Rect {
        y: area.y.saturating_add(HEADER_HEIGHT + body_h),
        height: FOOTER_HEIGHT,
        ..area
    };
    MainSplits {
        header,
        body: horizontal_padding(body),
        footer,
    }
}

/// Split a vertical strip into top and bottom with a given top height.
pub fn vertical_split(area: Rect, top_height: u16) -> (Rect, Rect) {
    let top_h = top_height.min(area.height);
    let top = Rect {
        height: top_h,
        ..area
    };
    let bottom = Rect {
        y: area.y.saturating_add(top_h),
        height: area.height.saturating_sub(top_h),
        ..area
    };
    (top, bottom)
}
