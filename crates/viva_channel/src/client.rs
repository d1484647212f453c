//! Channel client: one background task owning the socket, mpsc endpoints
//! for the UI loop.
//!
//! No reconnect and no backoff: a failed connect surfaces as one
//! `ConnectError`, a dropped connection as `Disconnected`, and the task
//! ends. The UI stays up either way and shows the failure as a system
//! message.

use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message as WsMessage};
use tracing::{debug, warn};

use viva_core::wire::{decode_frame, encode_client_event};
use viva_core::{ChannelEvent, ClientEvent};

use crate::config::ChannelConfig;

/// Capacity of the inbound event queue (transport → UI).
const EVENT_QUEUE: usize = 256;

/// Capacity of the outbound emission queue (UI → transport).
const OUTBOUND_QUEUE: usize = 64;

/// Endpoints handed to the UI loop. Dropping `outbound` closes the socket.
pub struct ChannelHandle {
    /// Inbound channel events in arrival order.
    pub events: mpsc::Receiver<ChannelEvent>,
    /// Outbound emissions (`topic`, `voice_answer`).
    pub outbound: mpsc::Sender<ClientEvent>,
}

/// Spawn the transport task for `config` and return its endpoints.
///
/// Must be called from within a tokio runtime.
pub fn connect(config: ChannelConfig) -> ChannelHandle {
    let (event_tx, event_rx) = mpsc::channel(EVENT_QUEUE);
    let (outbound_tx, outbound_rx) = mpsc::channel(OUTBOUND_QUEUE);
    tokio::spawn(transport_loop(config, event_tx, outbound_rx));
    ChannelHandle {
        events: event_rx,
        outbound: outbound_tx,
    }
}

async fn transport_loop(
    config: ChannelConfig,
    event_tx: mpsc::Sender<ChannelEvent>,
    mut outbound_rx: mpsc::Receiver<ClientEvent>,
) {
    let ws = match connect_async(config.url.as_str()).await {
        Ok((stream, _response)) => stream,
        Err(e) => {
            warn!(url = %config.url, error = %e, "channel connect failed");
            let _ = event_tx
                .send(ChannelEvent::connect_error(e.to_string()))
                .await;
            return;
        }
    };
    debug!(url = %config.url, "channel connected");
    let _ = event_tx.send(ChannelEvent::connected()).await;

    let (mut sink, mut stream) = ws.split();
    loop {
        tokio::select! {
            out = outbound_rx.recv() => {
                let event = match out {
                    Some(event) => event,
                    // UI dropped its sender: close the socket and stop.
                    None => {
                        let _ = sink.send(WsMessage::Close(None)).await;
                        break;
                    }
                };
                let raw = encode_client_event(&event);
                debug!(frame = %raw, "emit");
                if let Err(e) = sink.send(WsMessage::Text(raw)).await {
                    warn!(error = %e, "channel write failed");
                    let _ = event_tx
                        .send(ChannelEvent::connect_error(e.to_string()))
                        .await;
                    let _ = event_tx.send(ChannelEvent::disconnected()).await;
                    return;
                }
            }
            frame = stream.next() => {
                match frame {
                    Some(Ok(WsMessage::Text(raw))) => {
                        match decode_frame(&raw) {
                            Some(event) => {
                                if event_tx.send(event).await.is_err() {
                                    return;
                                }
                            }
                            None => debug!(frame = %raw, "ignoring frame"),
                        }
                    }
                    Some(Ok(WsMessage::Close(_))) | None => {
                        let _ = event_tx.send(ChannelEvent::disconnected()).await;
                        return;
                    }
                    // Ping/pong handled by tungstenite; binary has no meaning here.
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!(error = %e, "channel read failed");
                        let _ = event_tx
                            .send(ChannelEvent::connect_error(e.to_string()))
                            .await;
                        let _ = event_tx.send(ChannelEvent::disconnected()).await;
                        return;
                    }
                }
            }
        }
    }
    let _ = event_tx.send(ChannelEvent::disconnected()).await;
}
