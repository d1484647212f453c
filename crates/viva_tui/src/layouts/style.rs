//! Map theme palette to ratatui styles for layout chrome.
//!
//! All colors come from [crate::theme::VivaPalette]; use these helpers so
//! borders, backgrounds, and text stay consistent with the theme.

use ratatui::style::{Color, Style};

use crate::theme::Rgb;

/// Convert theme [Rgb] to ratatui [Color].
#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.tuple();
    Color::Rgb(r, g, b)
}

/// Style for borders (border color, no fill).
pub fn border_style(border_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(border_rgb))
}

/// Style for a focused border (accent glow).
pub fn border_focused_style(border_focused_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(border_focused_rgb))
}

/// Style for a background fill.
pub fn background_style(bg_rgb: Rgb) -> Style {
    Style::default().bg(rgb_to_color(bg_rgb))
}

/// Style for primary text.
pub fn text_style(text_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_rgb))
}

/// Style for muted/secondary text.
pub fn text_muted_style(text_muted_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_muted_rgb))
}

/// Style for success state (e.g. connected dot).
pub fn success_style(success_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(success_rgb))
}

/// Style for error/danger state (e.g. connection error).
pub fn danger_style(danger_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(danger_rgb))
}

/// Style for warning state (e.g. listening indicator).
pub fn warning_style(warning_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(warning_rgb))
}

/// Style for info (e.g. bot message indicator).
pub fn info_style(info_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(info_rgb))
}
