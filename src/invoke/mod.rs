//! Service invocation through the sidecar proxy.
//!
//! # Data Flow
//! ```text
//! handler calls invoke(app_id, method, verb, body)
//!     → client.rs builds {verb} http://{sidecar}/v1.0/invoke/{app_id}/method/{method}
//!     → sidecar resolves the target service and forwards the call
//!     → 2xx + JSON body → returned to the handler as serde_json::Value
//!     → anything else → InvokeError (one flat failure channel)
//! ```
//!
//! # Design Decisions
//! - The sidecar owns discovery and trace-context propagation; this module
//!   only speaks HTTP to localhost.
//! - Callers get exactly one error kind. Network failure, timeout, non-2xx
//!   status, and undecodable bodies are deliberately indistinguishable
//!   because no caller branches on the difference.

pub mod client;
pub mod error;

pub use client::InvocationClient;
pub use error::{InvokeError, InvokeResult};
