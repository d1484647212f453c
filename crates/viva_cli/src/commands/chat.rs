//! `viva chat` — run the interactive TUI wired to the channel and the
//! speech facility.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use viva_channel::ChannelConfig;
use viva_observability::{init, ObservabilityConfig};
use viva_speech::{CommandRecognizer, RecognizerConfig, SpeechEvent, SpeechRecognizer};
use viva_tui::{run_tui, SpeechPorts};

use crate::output;

pub async fn handle(url: Option<String>, lang: Option<String>, no_speech: bool) -> Result<()> {
    // Channel for tracing lines → TUI runtime-logs screen (Ctrl+D).
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let log_sink: Arc<dyn Fn(String) + Send + Sync> = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });

    // No console output while the TUI owns the terminal; logs go to the sink.
    let mut obs_config = ObservabilityConfig::from_env()
        .with_console(false)
        .with_log_sink(log_sink);
    if obs_config.log_level.is_none() {
        obs_config = obs_config.with_log_level("info,viva=debug");
    }
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Observability init failed (continuing): {}", e));
    }

    let mut config = ChannelConfig::from_env();
    if let Some(u) = url {
        config = config.with_url(u);
    }
    let handle = viva_channel::connect(config);

    let speech = if no_speech {
        None
    } else {
        spawn_speech_task(lang)
    };

    run_tui(handle.events, handle.outbound, speech, Some(log_rx))?;
    Ok(())
}

/// Build the recognizer from the environment and spawn its worker task.
/// Returns `None` when no transcriber is configured or resolvable; the TUI
/// then disables the record control and shows the unsupported notice.
fn spawn_speech_task(lang: Option<String>) -> Option<SpeechPorts> {
    let lang = lang
        .or_else(|| std::env::var("VIVA_LANG").ok())
        .filter(|l| !l.trim().is_empty());
    let mut rec_config = RecognizerConfig::default();
    if let Some(lang) = lang {
        rec_config = rec_config.with_lang(lang);
    }

    let recognizer = CommandRecognizer::from_env(rec_config)?;
    if !recognizer.is_supported() {
        tracing::warn!("configured transcriber not resolvable; speech disabled");
        return None;
    }

    let (start_tx, mut start_rx) = mpsc::channel::<()>(4);
    let (event_tx, event_rx) = mpsc::channel::<SpeechEvent>(16);
    tokio::spawn(async move {
        while start_rx.recv().await.is_some() {
            let outcome = match recognizer.recognize_once().await {
                Ok(transcript) => SpeechEvent::result(transcript),
                Err(e) => SpeechEvent::error(e.to_string()),
            };
            if event_tx.send(outcome).await.is_err() {
                break;
            }
        }
    });
    Some(SpeechPorts {
        start: start_tx,
        events: event_rx,
    })
}
