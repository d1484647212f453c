//! Viva palette: semantic color roles for the chat TUI.
//!
//! Roles: surfaces, borders, text levels, semantic states (accent, danger,
//! success, warning, info), and scrollbar chrome. Only roles the client
//! renders are carried.

use super::rgb::Rgb;
use super::Appearance;

/// One full palette for an appearance (dark or light). All colors are
/// semantic roles.
#[derive(Clone, Debug, PartialEq)]
pub struct VivaPalette {
    // --- Surfaces
    /// App / window background.
    pub background: Rgb,
    /// Header and input bar background.
    pub surface_background: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_focused: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_placeholder: Rgb,
    pub text_disabled: Rgb,

    // --- Semantic
    pub accent: Rgb,
    pub danger: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub info: Rgb,

    // --- Scrollbar chrome
    pub scrollbar_thumb: Rgb,
    pub scrollbar_track: Rgb,
}

impl VivaPalette {
    /// Default Viva dark palette: deep plum surfaces, violet accent.
    pub fn viva_dark() -> Self {
        Self {
            background: Rgb(14, 11, 20),
            surface_background: Rgb(22, 18, 31),
            border: Rgb(38, 32, 54),
            border_focused: Rgb(178, 132, 255),
            text: Rgb(226, 219, 240),
            text_muted: Rgb(118, 106, 148),
            text_placeholder: Rgb(98, 88, 126),
            text_disabled: Rgb(72, 64, 96),
            accent: Rgb(178, 132, 255),
            danger: Rgb(244, 104, 124),
            success: Rgb(118, 214, 142),
            warning: Rgb(238, 186, 98),
            info: Rgb(112, 196, 250),
            scrollbar_thumb: Rgb(94, 84, 124),
            scrollbar_track: Rgb(24, 20, 34),
        }
    }

    /// Default Viva light palette.
    pub fn viva_light() -> Self {
        Self {
            background: Rgb(252, 251, 255),
            surface_background: Rgb(245, 242, 250),
            border: Rgb(222, 216, 234),
            border_focused: Rgb(124, 77, 214),
            text: Rgb(36, 30, 52),
            text_muted: Rgb(122, 112, 148),
            text_placeholder: Rgb(150, 140, 174),
            text_disabled: Rgb(186, 178, 204),
            accent: Rgb(124, 77, 214),
            danger: Rgb(203, 52, 75),
            success: Rgb(42, 140, 78),
            warning: Rgb(178, 120, 24),
            info: Rgb(24, 112, 178),
            scrollbar_thumb: Rgb(196, 188, 216),
            scrollbar_track: Rgb(240, 237, 247),
        }
    }

    /// Palette for the given appearance.
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::viva_dark(),
            Appearance::Light => Self::viva_light(),
        }
    }
}
