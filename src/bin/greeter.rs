//! greeter service entry point.
//!
//! Synthesizes greetings locally; invoked by comms through the sidecar.

use clap::Parser;
use tokio::net::TcpListener;

use comms::config::GreeterConfig;
use comms::greeter::router;
use comms::http;
use comms::lifecycle::Shutdown;
use comms::observability::logging;

#[derive(Parser)]
#[command(name = "greeter")]
#[command(about = "Backend service: synthesizes greetings", long_about = None)]
struct Cli {
    /// Listening port.
    #[arg(long, env = "PORT", default_value_t = 8081)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let cli = Cli::parse();
    let config = GreeterConfig { port: cli.port };

    tracing::info!(port = config.port, "Configuration loaded");

    let app = http::with_middleware(router());

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    let shutdown = Shutdown::new();

    http::serve(app, listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
