//! HTTP server assembly shared by both services.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware stack)
//!     → request.rs (request ID generation)
//!     → service router (comms or greeter handlers)
//!     → response to client
//! ```

pub mod request;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{serve, with_middleware};
