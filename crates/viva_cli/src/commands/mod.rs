//! Command dispatch.

mod chat;
mod check;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Chat {
            url,
            lang,
            no_speech,
        } => chat::handle(url, lang, no_speech).await,
        Command::Check { url } => check::handle(url).await,
    }
}
