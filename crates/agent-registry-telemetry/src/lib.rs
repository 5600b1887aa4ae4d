//! # Agent Registry Telemetry
//!
//! Anonymous, fire-and-forget usage reporting for Agent Registry.
//! No personal information or search queries are collected.
//!
//! ## What is sent
//!
//! A single HTTP GET with a handful of query parameters: tool id, event
//! name, module version, runtime tag, OS - plus whatever event-specific
//! values the caller passes. Nothing else. The response is never read and
//! transmission failures are discarded.
//!
//! ## Opt-out
//!
//! ```bash
//! export AGENT_REGISTRY_NO_TELEMETRY=1
//! export DO_NOT_TRACK=1
//! ```
//!
//! Reporting is also disabled automatically in CI environments.
//!
//! ## Debug mode
//!
//! Set `AGENT_REGISTRY_TELEMETRY_DEBUG=1` to print events to stderr
//! instead of sending them.

pub mod config;
pub mod events;

mod transport;

pub use config::{is_disabled, CI_VARS, DO_NOT_TRACK_VAR, OPT_OUT_VAR};
pub use events::{Payload, TOOL_ID, VERSION};

use std::collections::HashMap;

/// Fire-and-forget usage report. Never blocks, never fails.
///
/// `data` carries optional event-specific key/value pairs (no PII by
/// policy). The call does nothing when reporting is disabled, and any
/// transmission failure is discarded in the background - the caller
/// observes no error under any condition.
///
/// ```no_run
/// use std::collections::HashMap;
///
/// agent_registry_telemetry::track("search", None);
/// agent_registry_telemetry::track(
///     "get",
///     Some(HashMap::from([("cached".to_string(), "true".to_string())])),
/// );
/// ```
pub fn track(event: &str, data: Option<HashMap<String, String>>) {
    if config::is_disabled() {
        return;
    }
    transport::dispatch(Payload::new(event, data));
}
