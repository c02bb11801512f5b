//! Turbolinks redirect demo server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request           ┌──────────────────────────────────────────────┐
//!     ─────────────────────────┼─▶ http server ──▶ redirect controller         │
//!                              │                        │                     │
//!                              │                        ▼                     │
//!                              │   ┌──────────────────────────────────────┐   │
//!                              │   │ redirect engine                      │   │
//!                              │   │  options → eligibility → resolve     │   │
//!                              │   │            (routing::RouteTable)     │   │
//!                              │   └──────────────────┬───────────────────┘   │
//!                              │                      ▼                       │
//!     Client Response          │   200 text/javascript  Turbolinks.visit(...) │
//!     ◀────────────────────────┼── or 3xx + Location                          │
//!                              └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use turbolinks_redirect::config::{load_config, AppConfig};
use turbolinks_redirect::observability::{logging, metrics};
use turbolinks_redirect::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "turbolinks-redirect")]
#[command(about = "Demo server for Turbolinks-aware redirects", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init_logging(&config.observability.log_filter);

    tracing::info!("turbolinks-redirect v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        default_status = config.redirect.default_status,
        routes = config.routes.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
