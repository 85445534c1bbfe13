//! The comms front service.
//!
//! # Data Flow
//! ```text
//! POST /greet { name }
//!     → handlers.rs (greet handler)
//!     → invoke::InvocationClient (sidecar call to greeter/greet)
//!     → success: backend JSON returned verbatim
//!     → failure: FallbackResponse synthesized locally, still HTTP 200
//! ```
//!
//! # Design Decisions
//! - Failure is signaled in-band via the `error` field, never via status
//!   code; callers of /greet always get a JSON object with a `message`.
//! - No retry and no failure-subtype branching. The handler has two
//!   terminal outcomes and nothing else.

pub mod handlers;

pub use handlers::{router, AppState, FallbackResponse, GreetRequest};

/// Service identifier reported in fallback and health payloads.
pub const SERVICE_NAME: &str = "comms";
