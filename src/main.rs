//! RetroArch HTTP bridge.
//!
//! Turns `GET /play?core=<libretro core>&rom=<path>` into a page that sends
//! the browser to EmulatorJS with the ROM path and core name it expects.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser                 ┌──────────────────────────────────────────┐
//!     GET /play ─────────────▶│  http::server ──▶ translate ──▶ page     │
//!                             │       │                                  │
//!     200 redirect page ◀─────│       └──▶ /health, / (JSON status)      │
//!                             └──────────────────────────────────────────┘
//!     (after 1s)
//!     GET http://emulatorjs/?rom=<path>&core=<system> ──────────▶ EmulatorJS
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use retroarch_bridge::config::{
    read_config, validate_config, BridgeConfig, ConfigError, ConfigOverrides,
};
use retroarch_bridge::lifecycle::{signals, Shutdown};
use retroarch_bridge::observability::{logging, metrics};
use retroarch_bridge::HttpServer;

#[derive(Parser)]
#[command(name = "retroarch-bridge", version)]
#[command(about = "Redirects RetroArch-style play requests to EmulatorJS", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long, env = "BRIDGE_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => BridgeConfig::default(),
    };
    cli.overrides.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability)?;

    tracing::debug!(
        bind_address = %config.listener.bind_address(),
        frontend = %format!("{}://{}:{}", config.frontend.scheme, config.frontend.host, config.frontend.port),
        redirect_delay_ms = config.play.redirect_delay_ms,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse::<SocketAddr>()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let mut run = std::pin::pin!(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        result = &mut run => result?,
        _ = signals::forward_signals(&shutdown) => run.await?,
    }

    tracing::debug!("Shutdown complete");
    Ok(())
}
