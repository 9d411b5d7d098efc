//! CSV Record Service
//!
//! Loads a CSV file into memory at startup and serves it read-only over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                RECORD SERVICE                │
//!                    │                                              │
//!   assets/*.csv ────┼─▶ data::store ──▶ Arc<RecordStore>           │
//!   (once, startup)  │                        │                     │
//!                    │                        ▼                     │
//!   Client Request ──┼─▶ request id ─▶ track_requests ─▶ handlers   │
//!                    │                      │            │          │
//!                    │                      ▼            ▼          │
//!   Client Response ◀┼──────────── ServiceMetrics    JSON body      │
//!                    │                                              │
//!                    │   config · observability · lifecycle         │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use record_service::config::resolve_config;
use record_service::lifecycle::{bootstrap, forward_signals, Shutdown};
use record_service::observability::init_logging;

#[derive(Parser)]
#[command(name = "record-service")]
#[command(about = "Serve a CSV file as read-only JSON over HTTP", long_about = None)]
struct Cli {
    /// TOML config file. Defaults apply when omitted; DATA_PATH and PORT override either.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref())?;

    init_logging(&config.observability);
    tracing::info!("record-service v{} starting", env!("CARGO_PKG_VERSION"));

    let bind_address = config.bind_address();
    let server = bootstrap(config)?;

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    forward_signals(shutdown.clone());
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
