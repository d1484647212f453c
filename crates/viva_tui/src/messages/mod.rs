//! Message rendering for the transcript. Uses crate::theme for colors.
//!
//! - **user** — outbound entries (submitted topics, spoken answers).
//! - **bot** — tutor content pushed by the server.
//! - **system** — connection/lifecycle/error status entries.

pub mod bot;
pub mod system;
pub mod user;
