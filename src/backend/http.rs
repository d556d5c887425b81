//! Outbound message submission.
//!
//! One-way POST to the chat server; the response body and status are ignored,
//! only network-level rejection surfaces as an error.

use serde::Serialize;

use crate::error::TransportError;

pub const SEND_MESSAGE_PATH: &str = "/send_message";

#[derive(Serialize)]
struct SendPayload<'a> {
    mensagem: &'a str,
}

/// Full submission URL for a configured server base.
pub fn submit_url(server_url: &str) -> String {
    format!("{}{}", server_url.trim_end_matches('/'), SEND_MESSAGE_PATH)
}

/// POST `{"mensagem": <text>}` to the server.
pub async fn post_message(
    client: &reqwest::Client,
    server_url: &str,
    text: &str,
) -> Result<(), TransportError> {
    client
        .post(submit_url(server_url))
        .json(&SendPayload { mensagem: text })
        .send()
        .await?;
    Ok(())
}
