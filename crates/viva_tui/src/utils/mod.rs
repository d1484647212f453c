//! Shared utilities for the viva TUI.
//!
//! - **[constants]** — Spacing and padding constants.
//! - **[layout]** — Rect padding and scroll clamping.
//! - **[format]** — Word wrap and truncation for transcript text.

mod constants;
mod format;
mod layout;

pub use constants::*;
pub use format::{truncate_ellipsis, truncate_with_suffix, wrap_lines};
pub use layout::{clamp_scroll, horizontal_padding, horizontal_padding_with, padding};
