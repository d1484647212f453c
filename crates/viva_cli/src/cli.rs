//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

/// Terminal client for a realtime voice tutor
#[derive(Parser)]
#[command(name = "viva", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive chat TUI
    Chat {
        /// Tutor server URL (ws:// or wss://). Uses VIVA_SERVER_URL env if not set.
        #[arg(long)]
        url: Option<String>,
        /// Speech recognition language tag (e.g. en-US). Uses VIVA_LANG env if not set.
        #[arg(long)]
        lang: Option<String>,
        /// Disable speech recognition even when a transcriber is configured
        #[arg(long)]
        no_speech: bool,
    },
    /// Probe connectivity to the tutor server
    Check {
        /// Tutor server URL (ws:// or wss://). Uses VIVA_SERVER_URL env if not set.
        #[arg(long)]
        url: Option<String>,
    },
}
