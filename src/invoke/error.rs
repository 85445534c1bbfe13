//! Error definitions for service invocation.

use thiserror::Error;

/// A service invocation that did not produce a usable response.
///
/// Covers connection failures, timeouts, non-2xx statuses, and responses
/// whose body is not valid JSON. The taxonomy is intentionally flat: the
/// caller's only recourse is its fallback path, so subtypes would be dead
/// weight. `reason` exists for log lines, not for branching.
#[derive(Debug, Error)]
#[error("invocation of service '{app_id}' failed: {reason}")]
pub struct InvokeError {
    /// App ID of the target service.
    pub app_id: String,
    /// Human-readable description of what went wrong.
    pub reason: String,
}

impl InvokeError {
    pub fn new(app_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for service invocation operations.
pub type InvokeResult<T> = Result<T, InvokeError>;
