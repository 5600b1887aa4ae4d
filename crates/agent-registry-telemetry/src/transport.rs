//! Fire-and-forget dispatch
//!
//! Each call hands its payload to its own detached unit of work that
//! performs a single GET against the collection endpoint. The caller never
//! waits on it and a pending send never keeps the process alive.

use anyhow::Result;
use reqwest::Client;
use std::thread;
use std::time::Duration;
use tokio::runtime;

use crate::config;
use crate::events::{Payload, TOOL_ID, VERSION};

/// Per-request timeout - a slow collector must never hold a sender for long
const SEND_TIMEOUT: Duration = Duration::from_secs(2);

/// Hand `payload` off to a detached sender.
///
/// Inside an async context the send becomes an unawaited task on the
/// caller's runtime; otherwise a throwaway thread drives it on a
/// current-thread runtime. Neither is joined. Tokio tasks and non-main
/// threads both die with the process, so an in-flight send cannot delay
/// exit.
pub(crate) fn dispatch(payload: Payload) {
    if config::debug_mode() {
        eprintln!("telemetry event (debug mode - not sent):");
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
        return;
    }

    let url = config::endpoint();
    if let Ok(handle) = runtime::Handle::try_current() {
        handle.spawn(async move {
            let _ = send(&url, &payload).await;
        });
    } else {
        // Result ignored: failing to spawn is just a dropped event
        let _ = thread::Builder::new()
            .name("telemetry-send".to_string())
            .spawn(move || {
                if let Ok(rt) = runtime::Builder::new_current_thread().enable_all().build() {
                    let _ = rt.block_on(send(&url, &payload));
                }
            });
    }
}

/// Single best-effort GET. Every failure mode (client build, DNS, TLS,
/// timeout, refused connection) surfaces here as an `Err` that the
/// detached caller discards. The response is never inspected.
async fn send(url: &str, payload: &Payload) -> Result<()> {
    let client = Client::builder()
        .timeout(SEND_TIMEOUT)
        .user_agent(format!("{}/{}", TOOL_ID, VERSION))
        .build()?;

    client.get(url).query(payload).send().await?;
    Ok(())
}
