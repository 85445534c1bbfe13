//! Shared utilities for integration testing.
//!
//! Spawns the real services and mock sidecars on ephemeral ports so tests
//! never collide on addresses.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::{extract::Path, http::StatusCode, routing::post, Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

use comms::comms::{router as comms_router, AppState};
use comms::config::SidecarConfig;
use comms::greeter::router as greeter_router;
use comms::http;
use comms::invoke::InvocationClient;
use comms::lifecycle::Shutdown;

/// Dapr-style invocation route served by the mock sidecars.
const INVOKE_ROUTE: &str = "/v1.0/invoke/{app_id}/method/{method}";

/// Bind an ephemeral port and serve `router` on it until shutdown.
pub async fn spawn(router: Router, shutdown: &Shutdown) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = http::serve(router, listener, rx).await;
    });
    addr
}

/// Start the greeter service.
pub async fn spawn_greeter(shutdown: &Shutdown) -> SocketAddr {
    spawn(http::with_middleware(greeter_router()), shutdown).await
}

/// Start the comms service pointed at the given sidecar address.
pub async fn spawn_comms(sidecar: SocketAddr, shutdown: &Shutdown) -> SocketAddr {
    let config = SidecarConfig {
        host: sidecar.ip().to_string(),
        port: sidecar.port(),
        timeout_secs: 2,
    };
    let invoker = InvocationClient::new(&config).unwrap();
    let state = AppState::new(invoker, "greeter");
    spawn(http::with_middleware(comms_router(state)), shutdown).await
}

/// Start the comms service pointed at an address nothing listens on.
pub async fn spawn_comms_without_sidecar(shutdown: &Shutdown) -> SocketAddr {
    // Reserve a port, then release it so connections get refused.
    let dead = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = dead.local_addr().unwrap();
    drop(dead);
    spawn_comms(dead_addr, shutdown).await
}

/// Start a mock sidecar that forwards invocations to a real backend, the
/// way the real proxy resolves an app ID to a co-located service.
pub async fn spawn_forwarding_sidecar(backend: SocketAddr, shutdown: &Shutdown) -> SocketAddr {
    let app = Router::new().route(
        INVOKE_ROUTE,
        post(
            move |Path((_app_id, method)): Path<(String, String)>, Json(body): Json<Value>| async move {
                let response = reqwest::Client::new()
                    .post(format!("http://{backend}/{method}"))
                    .json(&body)
                    .send()
                    .await
                    .unwrap();
                Json(response.json::<Value>().await.unwrap())
            },
        ),
    );
    spawn(app, shutdown).await
}

/// Start a mock sidecar that answers every invocation with a fixed body.
pub async fn spawn_canned_sidecar(response: Value, shutdown: &Shutdown) -> SocketAddr {
    let app = Router::new().route(
        INVOKE_ROUTE,
        post(move || async move { Json(response) }),
    );
    spawn(app, shutdown).await
}

/// Start a mock sidecar that fails every invocation with the given status.
pub async fn spawn_failing_sidecar(status: StatusCode, shutdown: &Shutdown) -> SocketAddr {
    let app = Router::new().route(
        INVOKE_ROUTE,
        post(move || async move { (status, "invocation failed") }),
    );
    spawn(app, shutdown).await
}

/// Non-pooled client so each request opens a fresh connection.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
