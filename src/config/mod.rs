//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment / CLI flags (clap, per binary)
//!     → schema.rs (typed structs, all fields defaulted)
//!     → CommsConfig / GreeterConfig (immutable after startup)
//!     → shared by value or via Arc to the subsystems that need them
//! ```
//!
//! # Design Decisions
//! - Configuration is environment-driven; there is no config file and no
//!   reload path. Both services must start with zero configuration.
//! - All fields have defaults matching the Dapr sidecar conventions
//!   (`localhost:3500`) so a local run needs nothing but the binaries.

pub mod schema;

pub use schema::CommsConfig;
pub use schema::GreeterConfig;
pub use schema::SidecarConfig;
