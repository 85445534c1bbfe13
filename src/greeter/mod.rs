//! The greeter backend service.
//!
//! Synthesizes greetings locally; it has no downstream dependency and no
//! failure path. The sidecar forwards comms' invocations to this service's
//! `/greet` route as plain HTTP.

pub mod handlers;

pub use handlers::{router, GreetResponse};

/// Service identifier reported in greeting and health payloads.
pub const SERVICE_NAME: &str = "greeter";
