//! Bardic server binary.
//!
//! Serves the prompt form over HTTP and runs each submission through the
//! generation and speech pipeline.

use anyhow::Context;
use bardic::{AppConfig, init_tracing};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{error, info};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "bardic")]
#[command(about = "Generate a blog post from a prompt and optional image, then hear it read aloud")]
#[command(version)]
struct Args {
    /// Path to a TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to serve the form on (overrides the settings file)
    #[arg(short, long)]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    info!("Starting Bardic");

    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration failed");
            eprintln!("Error: {}", e.message);
            std::process::exit(1);
        }
    };
    let config = match args.listen {
        Some(listen) => config.with_listen(listen),
        None => config,
    };

    let app = bardic::app(&config).context("Failed to build application")?;

    let listener = tokio::net::TcpListener::bind(config.listen())
        .await
        .with_context(|| format!("Failed to bind {}", config.listen()))?;
    info!(address = %config.listen(), "Serving form");

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
