//! Request handlers for the comms service.
//!
//! # Responsibilities
//! - Accept inbound greeting requests
//! - Invoke the greeter backend through the sidecar
//! - Return the backend response verbatim, or a local fallback on failure
//! - Log entry, success, and failure with the request's `name`

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::comms::SERVICE_NAME;
use crate::health;
use crate::invoke::InvocationClient;

/// Error marker carried by [`FallbackResponse`].
pub const BACKEND_UNAVAILABLE: &str = "greeter_service_unavailable";

/// Method name invoked on the backend.
const GREET_METHOD: &str = "greet";

/// Application state injected into handlers.
///
/// The invocation client is acquired once at startup and shared; it holds
/// no per-request state, so concurrent handlers use it without coordination.
#[derive(Clone)]
pub struct AppState {
    pub invoker: Arc<InvocationClient>,
    pub backend_app_id: Arc<str>,
}

impl AppState {
    pub fn new(invoker: InvocationClient, backend_app_id: &str) -> Self {
        Self {
            invoker: Arc::new(invoker),
            backend_app_id: Arc::from(backend_app_id),
        }
    }
}

/// Inbound greeting request.
///
/// `name` is not validated; a missing field deserializes to the empty
/// string and flows through unchanged. Requests are never rejected with
/// 400 over a missing name.
#[derive(Debug, Deserialize)]
pub struct GreetRequest {
    #[serde(default)]
    pub name: String,
}

/// Locally synthesized reply returned when the backend call fails.
///
/// Distinguished from a backend reply only by the `error` field and the
/// fixed service identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackResponse {
    pub message: String,
    pub service: &'static str,
    pub error: &'static str,
}

impl FallbackResponse {
    /// Build the fallback reply for the original request's `name`.
    pub fn for_name(name: &str) -> Self {
        Self {
            message: format!("Hello, {name} (from fallback)!"),
            service: SERVICE_NAME,
            error: BACKEND_UNAVAILABLE,
        }
    }
}

/// `POST /greet` handler.
///
/// Invokes the backend's greet method through the sidecar and returns its
/// response unmodified. Any invocation failure, of whatever kind, yields
/// the fallback reply instead; the transport failure never reaches the
/// caller and the status is 200 either way.
async fn greet(State(state): State<AppState>, Json(request): Json<GreetRequest>) -> Json<Value> {
    tracing::info!(name = %request.name, "Processing greet request");

    let body = json!({ "name": request.name });
    match state
        .invoker
        .invoke(&state.backend_app_id, GREET_METHOD, Method::POST, &body)
        .await
    {
        Ok(response) => {
            tracing::info!(name = %request.name, "Greeting served by backend");
            Json(response)
        }
        Err(e) => {
            tracing::warn!(
                name = %request.name,
                error = %e,
                "Backend unavailable, serving fallback"
            );
            Json(json!(FallbackResponse::for_name(&request.name)))
        }
    }
}

/// Build the comms service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/greet", post(greet))
        .with_state(state)
        .merge(Router::new().route("/health", get(health::health)).with_state(SERVICE_NAME))
}
