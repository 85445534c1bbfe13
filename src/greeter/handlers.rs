//! Request handlers for the greeter service.

use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::greeter::SERVICE_NAME;
use crate::health;

/// Inbound greeting request. A missing `name` deserializes to the empty
/// string rather than rejecting the request.
#[derive(Debug, Deserialize)]
pub struct GreetRequest {
    #[serde(default)]
    pub name: String,
}

/// Greeting synthesized by this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetResponse {
    pub message: String,
    pub service: String,
    pub timestamp: String,
}

impl GreetResponse {
    /// Build a greeting for `name`, stamped with the current time.
    pub fn for_name(name: &str) -> Self {
        Self {
            message: format!("Hello, {name} from greeter!"),
            service: SERVICE_NAME.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// `POST /greet` handler.
async fn greet(Json(request): Json<GreetRequest>) -> Json<GreetResponse> {
    tracing::info!(name = %request.name, "Processing greet request");

    let response = GreetResponse::for_name(&request.name);

    tracing::info!(name = %request.name, "Generated greeting");
    Json(response)
}

/// Build the greeter service router.
pub fn router() -> Router {
    Router::new()
        .route("/greet", post(greet))
        .merge(Router::new().route("/health", get(health::health)).with_state(SERVICE_NAME))
}
