//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]** — Split the screen into header, body, footer.
//! - **[style]** — Map palette [crate::theme::Rgb] to ratatui styles.
//! - **[head]** — Header strip with title and status dot.
//! - **[log]** — Transcript body layout.
//! - **[input]** — Input bar layout and block.
//! - **[shortcut]** — Shortcut hint line (below input).

mod head;
mod input;
mod log;
mod shortcut;
mod split;
mod style;

pub use head::{header_line, render_header, HeadLayout, HEADER_STATUS_READY, HEADER_TITLE};
pub use input::{block_for_input, InputLayout, INPUT_ICON, INPUT_PADDING_H};
pub use log::LogLayout;
pub use shortcut::{shortcut_inner_rect, shortcut_line};
pub use split::{main_splits, vertical_split, MainSplits, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use style::{
    background_style, border_focused_style, border_style, danger_style, info_style, rgb_to_color,
    success_style, text_muted_style, text_style, warning_style,
};
