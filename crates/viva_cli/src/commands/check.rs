//! `viva check` — probe connectivity to the tutor server.

use std::time::Duration;

use anyhow::{bail, Result};

use viva_channel::ChannelConfig;
use viva_core::ChannelEvent;

use crate::output;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn handle(url: Option<String>) -> Result<()> {
    let mut config = ChannelConfig::from_env();
    if let Some(u) = url {
        config = config.with_url(u);
    }

    let spinner = output::spinner(&format!("Connecting to {}", config.url));
    let url = config.url.clone();
    let mut handle = viva_channel::connect(config);

    match tokio::time::timeout(CONNECT_TIMEOUT, handle.events.recv()).await {
        Ok(Some(ChannelEvent::Connected)) => {
            output::spinner_success(&spinner, "Connected");
            output::kv("url", &url);
            Ok(())
        }
        Ok(Some(ChannelEvent::ConnectError { message })) => {
            output::spinner_error(&spinner, &format!("Connection error: {}", message));
            bail!("could not connect to {}", url);
        }
        Ok(event) => {
            output::spinner_error(&spinner, "Unexpected first event from channel");
            bail!("unexpected event: {:?}", event);
        }
        Err(_) => {
            output::spinner_error(&spinner, "Timed out waiting for the server");
            bail!("timed out connecting to {}", url);
        }
    }
}
