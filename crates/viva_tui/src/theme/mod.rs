//! Viva theme: semantic color palette for the chat TUI.
//!
//! The palette carries only the roles the client actually renders:
//! surfaces, borders, text levels, semantic states, and scrollbar chrome.
//!
//! # Example
//!
//! ```ignore
//! use viva_tui::theme::{Appearance, VivaPalette};
//!
//! let palette = VivaPalette::viva_dark();
//! let text = palette.text.tuple(); // (r, g, b) for ratatui
//!
//! let palette = VivaPalette::for_appearance(Appearance::Light);
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::VivaPalette;
pub use rgb::Rgb;
