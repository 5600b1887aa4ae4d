//! Payload construction
//!
//! A payload is the flat key/value map that ends up as the query string of
//! the outbound request: fixed tool context first, caller data merged on top.

use serde::Serialize;
use std::collections::HashMap;

/// Tool identifier - distinguishes this project from others on the
/// shared collector
pub const TOOL_ID: &str = "agent-registry";

/// Reporting module version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Flat key/value payload serialized as URL query parameters
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Payload {
    fields: HashMap<String, String>,
}

impl Payload {
    /// Build the payload for `event`, merging optional event-specific data.
    ///
    /// Caller data is merged last, so a key colliding with a fixed field
    /// ("e", "v", ...) replaces it. Accepted quirk, not a contract.
    pub fn new(event: &str, data: Option<HashMap<String, String>>) -> Self {
        let mut fields = HashMap::from([
            ("t".to_string(), TOOL_ID.to_string()),
            ("e".to_string(), event.to_string()),
            ("v".to_string(), VERSION.to_string()),
            ("rt".to_string(), runtime_string()),
            ("os".to_string(), os_string()),
        ]);
        if let Some(data) = data {
            fields.extend(data);
        }
        Self { fields }
    }

    /// Look up a field by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Number of fields in the payload
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Runtime platform tag. A compiled binary has no interpreter version to
/// report, so this is the architecture the crate was built for.
fn runtime_string() -> String {
    format!("rust-{}", arch_string())
}

/// Get OS string
fn os_string() -> String {
    if cfg!(target_os = "linux") {
        "linux".to_string()
    } else if cfg!(target_os = "macos") {
        "macos".to_string()
    } else if cfg!(target_os = "windows") {
        "windows".to_string()
    } else {
        "unknown".to_string()
    }
}

/// Get architecture string
fn arch_string() -> String {
    if cfg!(target_arch = "x86_64") {
        "x64".to_string()
    } else if cfg!(target_arch = "aarch64") {
        "arm64".to_string()
    } else {
        "unknown".to_string()
    }
}
