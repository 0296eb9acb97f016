//! HTTP server for the payroll engine.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, ENGINE_VERSION, create_router};
use payroll_engine::config::ConfigLoader;

/// Serves the payroll calculations over HTTP.
#[derive(Debug, Parser)]
#[command(name = "payroll-engine", version, about)]
struct Args {
    /// Directory holding the YAML configuration tables.
    #[arg(long, default_value = "./config/ar_2026")]
    config_dir: PathBuf,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let loader = ConfigLoader::load(&args.config_dir)?;
    info!(
        version = ENGINE_VERSION,
        config = %loader.metadata().code,
        tax_year = loader.metadata().tax_year,
        "Loaded payroll configuration"
    );

    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(address = %args.bind, "Payroll engine listening");

    axum::serve(listener, router).await?;

    Ok(())
}
