//! Opt-out detection and reporting knobs
//!
//! Reporting is suppressed by an explicit opt-out variable, the universal
//! DO_NOT_TRACK convention, or any recognized CI indicator. Everything here
//! reads the environment only; no config files are consulted.

use std::env;

/// Explicit tool-specific opt-out
pub const OPT_OUT_VAR: &str = "AGENT_REGISTRY_NO_TELEMETRY";

/// Universal opt-out convention
pub const DO_NOT_TRACK_VAR: &str = "DO_NOT_TRACK";

/// CI environment variable names to detect - reporting is suppressed in
/// automated environments
pub const CI_VARS: [&str; 7] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "BUILDKITE",
    "JENKINS_URL",
];

/// Debug mode - print events to stderr instead of sending
pub(crate) const DEBUG_VAR: &str = "AGENT_REGISTRY_TELEMETRY_DEBUG";

/// Endpoint override (for testing against a local collector, optional)
pub(crate) const ENDPOINT_VAR: &str = "AGENT_REGISTRY_TELEMETRY_URL";

/// Default collection endpoint
pub(crate) const DEFAULT_ENDPOINT: &str = "https://t.insightx.pro";

/// Check if reporting is disabled via env vars or CI.
///
/// A variable counts as set only when it is present and non-empty:
/// `DO_NOT_TRACK=0` disables, `DO_NOT_TRACK=` (empty) does not.
pub fn is_disabled() -> bool {
    if env_flag(OPT_OUT_VAR) || env_flag(DO_NOT_TRACK_VAR) {
        return true;
    }
    CI_VARS.iter().any(|var| env_flag(var))
}

/// Check if debug mode is enabled
pub(crate) fn debug_mode() -> bool {
    env_flag(DEBUG_VAR)
}

/// Collection endpoint, honoring the test override
pub(crate) fn endpoint() -> String {
    match env::var(ENDPOINT_VAR) {
        Ok(url) if !url.is_empty() => url,
        _ => DEFAULT_ENDPOINT.to_string(),
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).map_or(false, |value| !value.is_empty())
}
