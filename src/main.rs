//! comms service entry point.
//!
//! Accepts greeting requests and forwards them to the greeter backend
//! through the sidecar proxy; serves a local fallback when the backend is
//! unreachable.

use clap::Parser;
use tokio::net::TcpListener;

use comms::comms::{router, AppState};
use comms::config::{CommsConfig, SidecarConfig};
use comms::http;
use comms::invoke::InvocationClient;
use comms::lifecycle::Shutdown;
use comms::observability::logging;

#[derive(Parser)]
#[command(name = "comms")]
#[command(about = "Front service: greets via the greeter backend through a sidecar", long_about = None)]
struct Cli {
    /// Listening port.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Sidecar host for service invocation.
    #[arg(long, env = "DAPR_HTTP_HOST", default_value = "localhost")]
    sidecar_host: String,

    /// Sidecar HTTP port for service invocation.
    #[arg(long, env = "DAPR_HTTP_PORT", default_value_t = 3500)]
    sidecar_port: u16,

    /// App ID of the backend service.
    #[arg(long, env = "BACKEND_APP_ID", default_value = "greeter")]
    backend_app_id: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let cli = Cli::parse();
    let config = CommsConfig {
        port: cli.port,
        backend_app_id: cli.backend_app_id,
        sidecar: SidecarConfig {
            host: cli.sidecar_host,
            port: cli.sidecar_port,
            ..SidecarConfig::default()
        },
    };

    tracing::info!(
        port = config.port,
        backend_app_id = %config.backend_app_id,
        sidecar_host = %config.sidecar.host,
        sidecar_port = config.sidecar.port,
        "Configuration loaded"
    );

    let invoker = InvocationClient::new(&config.sidecar)?;
    let state = AppState::new(invoker, &config.backend_app_id);
    let app = http::with_middleware(router(state));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    let shutdown = Shutdown::new();

    http::serve(app, listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
