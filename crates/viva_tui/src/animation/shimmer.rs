//! Shimmer animation: a moving highlight (left-to-right) over text.
//!
//! Used for the listening indicator while a recognition attempt runs.
//! Colors come from the theme: dim → bright sweep.

use std::time::Instant;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::theme::VivaPalette;

/// Width of the highlight as a fraction of the text length (0.0..=1.0).
const HIGHLIGHT_WIDTH: f64 = 0.35;

/// How far the highlight advances per second (0.0..=1.0 per second).
const SWEEP_SPEED: f64 = 0.4;

/// Shimmer state: position and timing for a left-to-right sweep.
#[derive(Debug, Clone)]
pub struct Shimmer {
    /// Current position of the highlight center (0.0 = left, 1.0 = right).
    position: f64,
    /// Last time the position advanced.
    last_tick: Instant,
}

impl Default for Shimmer {
    fn default() -> Self {
        Self {
            position: 0.0,
            last_tick: Instant::now(),
        }
    }
}

impl Shimmer {
    /// New shimmer starting at the left edge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by elapsed time. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        let delta = (elapsed.as_secs_f64() * SWEEP_SPEED).min(0.1);
        self.position += delta;
        if self.position > 1.0 + HIGHLIGHT_WIDTH {
            self.position -= 1.0 + HIGHLIGHT_WIDTH;
        }
    }

    /// Styled spans for `text` with the current sweep applied: each character
    /// is blended between `text_muted` and `text` by distance from the
    /// highlight center.
    pub fn styled_spans(&self, text: &str, palette: &VivaPalette) -> Vec<Span<'static>> {
        let dim = rgb_to_color(palette.text_muted);
        let bright = rgb_to_color(palette.text);
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return vec![];
        }
        let n = chars.len() as f64;
        let half_width = HIGHLIGHT_WIDTH / 2.0;
        let center = self.position * (1.0 + 2.0 * half_width) - half_width;

        chars
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                let char_pos = (i as f64 + 0.5) / n;
                let distance = (char_pos - center).abs();
                let intensity = if distance <= half_width {
                    let t = distance / half_width;
                    1.0 - (t * t)
                } else {
                    0.0
                };
                Span::styled(c.to_string(), blend_style(intensity, dim, bright))
            })
            .collect()
    }
}

fn blend_style(intensity: f64, dim: Color, bright: Color) -> Style {
    let t = intensity.clamp(0.0, 1.0);
    let (r0, g0, b0) = color_to_rgb(dim);
    let (r1, g1, b1) = color_to_rgb(bright);
    let color = Color::Rgb(
        lerp(r0, r1, t),
        lerp(g0, g1, t),
        lerp(b0, b1, t),
    );
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t) as u8
}

fn color_to_rgb(c: Color) -> (u8, u8, u8) {
    match c {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (226, 219, 240),
    }
}

fn rgb_to_color(rgb: crate::theme::Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_spans_one_per_char() {
        let s = Shimmer::new();
        let palette = VivaPalette::viva_dark();
        let spans = s.styled_spans("Listening…", &palette);
        assert_eq!(spans.len(), "Listening…".chars().count());
    }

    #[test]
    fn empty_text_no_spans() {
        let s = Shimmer::new();
        let palette = VivaPalette::viva_dark();
        assert!(s.styled_spans("", &palette).is_empty());
    }
}
