//! Configuration schema definitions.
//!
//! All types derive Serde traits so payload-level tooling (tests, debug
//! dumps) can serialize them, and `Default` so either service starts with
//! zero configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the front (comms) service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CommsConfig {
    /// Port the HTTP server listens on.
    pub port: u16,

    /// App ID of the backend service as registered with the sidecar.
    pub backend_app_id: String,

    /// Sidecar endpoint used for service invocation.
    pub sidecar: SidecarConfig,
}

impl Default for CommsConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            backend_app_id: "greeter".to_string(),
            sidecar: SidecarConfig::default(),
        }
    }
}

/// Configuration for the backend (greeter) service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GreeterConfig {
    /// Port the HTTP server listens on.
    pub port: u16,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self { port: 8081 }
    }
}

/// Sidecar proxy endpoint configuration.
///
/// Defaults follow the Dapr HTTP conventions: the sidecar is co-located on
/// `localhost` and listens on port 3500.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SidecarConfig {
    /// Sidecar host.
    pub host: String,

    /// Sidecar HTTP port.
    pub port: u16,

    /// Outbound request timeout in seconds. This is the only clock on the
    /// invocation path; when it fires the call surfaces as a failure.
    pub timeout_secs: u64,
}

impl Default for SidecarConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3500,
            timeout_secs: 5,
        }
    }
}
