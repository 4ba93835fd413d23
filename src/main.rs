//! Mock proxy (v1)
//!
//! A recording forward proxy built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────────┐
//!                         │                    MOCK PROXY                     │
//!   Client Request        │  ┌────────┐   ┌──────────────┐   ┌────────────┐  │
//!   ──────────────────────┼─▶│  http  │──▶│   pipeline   │──▶│   mocks    │  │
//!   (absolute-form)       │  │ server │   │ RECEIVED →   │   │  registry  │  │
//!                         │  └────────┘   │ MATCHING     │   └────────────┘  │
//!                         │       ▲       └──────┬───────┘                   │
//!                         │       │        miss  │  hit: canned response     │
//!                         │       │              ▼                           │
//!   Client Response       │       │       ┌──────────────┐                   │
//!   ◀─────────────────────┼───────┴───────│   gateway    │◀──────────────────┼──── Upstream
//!                         │               └──────┬───────┘                   │
//!                         │                      ▼                           │
//!                         │               ┌──────────────┐   ┌────────────┐  │
//!                         │               │  recording   │   │   admin    │  │
//!                         │               │   ledger     │◀──│    API     │  │
//!                         │               └──────────────┘   └────────────┘  │
//!                         └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use mock_proxy::config::{load_config, validate_config, ConfigError, ProxyConfig};
use mock_proxy::lifecycle::{signals, Shutdown};
use mock_proxy::observability::{logging, metrics};
use mock_proxy::HttpServer;

#[derive(Parser)]
#[command(name = "mock-proxy")]
#[command(about = "Recording forward proxy with canned-response mocks", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability);
    tracing::info!("mock-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        connect_timeout_secs = config.timeouts.connect_secs,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address was checked by validation.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            signals::wait_for_signal().await;
            shutdown.trigger();
        }
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
