//! Sidecar service invocation demo: comms front service + greeter backend.

// Services
pub mod comms;
pub mod greeter;

// Core subsystems
pub mod config;
pub mod http;
pub mod invoke;

// Cross-cutting concerns
pub mod health;
pub mod lifecycle;
pub mod observability;

pub use config::{CommsConfig, GreeterConfig, SidecarConfig};
pub use invoke::InvocationClient;
pub use lifecycle::Shutdown;
