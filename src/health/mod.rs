//! Health check endpoint shared by both services.
//!
//! # Design Decisions
//! - The payload is a process-lifetime constant; repeated calls return
//!   identical data and touch no state.
//! - `version` comes from the crate version so both services report the
//!   build they were compiled from.

use axum::{extract::State, Json};
use serde::Serialize;

/// Static health payload: `{ status, service, version }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl HealthStatus {
    /// Health payload for the named service.
    pub fn healthy(service: &'static str) -> Self {
        Self {
            status: "healthy",
            service,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// `GET /health` handler. The service name is injected as router state so
/// both binaries share one handler.
pub async fn health(State(service): State<&'static str>) -> Json<HealthStatus> {
    Json(HealthStatus::healthy(service))
}
