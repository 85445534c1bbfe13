//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Wire up middleware (request ID, tracing, timeout, CORS)
//! - Bind the service router to a listener
//! - Serve with graceful shutdown on signal or broadcast trigger

use std::time::Duration;

use axum::http::HeaderName;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::http::request::{UuidRequestId, X_REQUEST_ID};

/// Per-request timeout for inbound requests. Generous relative to the
/// sidecar invocation timeout so the fallback path always wins the race.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply the shared middleware stack to a service router.
///
/// CORS is permissive: both services are demo endpoints meant to be called
/// from anywhere, including browser frontends.
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(
                HeaderName::from_static(X_REQUEST_ID),
                UuidRequestId,
            ))
            .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                X_REQUEST_ID,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
            .layer(CorsLayer::permissive()),
    )
}

/// Run the server on the given listener until shutdown is signaled.
///
/// Shutdown fires on ctrl-c, SIGTERM, or a message on the broadcast
/// channel; the latter is what tests and coordinated multi-service
/// shutdown use.
pub async fn serve(
    router: Router,
    listener: TcpListener,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "HTTP server starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    tracing::info!(address = %addr, "HTTP server stopped");
    Ok(())
}

/// Resolve when any shutdown source fires.
async fn shutdown_signal(mut trigger: broadcast::Receiver<()>) {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
        _ = trigger.recv() => {},
    }
}
