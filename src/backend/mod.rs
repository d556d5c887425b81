//! Async network backend, run on its own thread with a Tokio runtime.
//!
//! The backend owns two independent paths: the live transport (server push
//! channel, read here and surfaced as [`GuiEvent`]s) and the outbound HTTP
//! submission (fire-and-forget, spawned so the live loop never waits on it).

pub mod http;
pub mod live;

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use tokio::runtime::Runtime;
use tokio::time::timeout;

use crate::protocol::{BackendAction, GuiEvent};

pub fn run_backend(action_rx: Receiver<BackendAction>, event_tx: Sender<GuiEvent>) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = event_tx.send(GuiEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        let client = reqwest::Client::new();
        let mut socket: Option<live::LiveSocket> = None;
        let mut server_url = String::new();

        loop {
            // Check for actions from the UI (non-blocking)
            loop {
                let action = match action_rx.try_recv() {
                    Ok(action) => action,
                    Err(TryRecvError::Empty) => break,
                    // UI side is gone; stop the backend thread.
                    Err(TryRecvError::Disconnected) => return,
                };

                match action {
                    BackendAction::Connect {
                        server_url: url,
                        transport_url,
                    } => {
                        // The submission endpoint is usable even if the live
                        // channel fails to open.
                        server_url = url;

                        match live::connect(&transport_url).await {
                            Ok(s) => {
                                socket = Some(s);
                                let _ = event_tx.send(GuiEvent::Connected);
                            }
                            Err(e) => {
                                let _ = event_tx.send(GuiEvent::Error(format!(
                                    "Live transport connect failed: {}",
                                    e
                                )));
                            }
                        }
                    }

                    BackendAction::Disconnect => {
                        if let Some(mut s) = socket.take() {
                            s.close().await;
                        }
                        let _ = event_tx.send(GuiEvent::Disconnected("User disconnected".into()));
                    }

                    BackendAction::SendMessage { text } => {
                        // Fire-and-forget: the UI has already cleared its
                        // input; only log a failed attempt.
                        let client = client.clone();
                        let url = server_url.clone();
                        tokio::spawn(async move {
                            if let Err(e) = http::post_message(&client, &url, &text).await {
                                log::error!("failed to submit message: {}", e);
                            }
                        });
                    }
                }
            }

            // Read from the live channel (short timeout so actions stay responsive)
            if let Some(ref mut s) = socket {
                match timeout(Duration::from_millis(50), s.next_frame()).await {
                    Ok(Ok(Some(frame))) => {
                        if let Some(record) = live::parse_live_frame(&frame) {
                            let _ = event_tx.send(GuiEvent::MessageReceived(record));
                        }
                    }
                    Ok(Ok(None)) => {
                        socket = None;
                        let _ = event_tx
                            .send(GuiEvent::Disconnected("Connection closed by server".into()));
                    }
                    Ok(Err(e)) => {
                        socket = None;
                        let _ = event_tx.send(GuiEvent::Error(format!("Read error: {}", e)));
                        let _ = event_tx.send(GuiEvent::Disconnected("Read error".into()));
                    }
                    Err(_) => {
                        // Timeout - this is normal, just loop
                    }
                }
            } else {
                // No connection, sleep a bit to avoid busy-looping
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        }
    });
}
