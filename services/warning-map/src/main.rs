//! Hazard warning map.
//!
//! Serves the warning map over HTTP, or renders it once to GeoJSON or PNG.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::fmt;

use snapshot::{render_snapshot, SnapshotOptions};
use warning_map::config::AppConfig;
use warning_map::runner;
use warning_map::state::AppState;

/// Hazard warning map
#[derive(Parser, Debug)]
#[command(name = "warning-map")]
#[command(about = "Map of hazard warning points with geodesic buffers")]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "config/warning-map.yaml", env = "WARNING_MAP_CONFIG")]
    config: PathBuf,

    /// Source locator (URL, file:// URL or path), overrides the config file
    #[arg(long, global = true, env = "WARNING_MAP_SOURCE")]
    source: Option<String>,

    /// Log level or filter directives (falls back to RUST_LOG)
    #[arg(long, global = true, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the map page and API (default)
    Serve {
        /// Listen address
        #[arg(short, long, default_value = "0.0.0.0:8090", env = "WARNING_MAP_LISTEN_ADDR")]
        listen: String,
    },

    /// Load once and write the features as GeoJSON
    Render {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load once and write a PNG snapshot
    Snapshot {
        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        #[arg(long)]
        width: Option<u32>,

        #[arg(long)]
        height: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so `render` can write GeoJSON to stdout.
    fmt()
        .with_env_filter(warning_map::log_filter(&cli.log_level)?)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let mut config = AppConfig::load(&cli.config)?;
    if let Some(source) = cli.source {
        config.source.locator = source;
    }
    config.validate().context("Invalid configuration")?;

    let command = cli.command.unwrap_or(Command::Serve {
        listen: std::env::var("WARNING_MAP_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8090".to_string()),
    });

    match command {
        Command::Serve { listen } => serve(config, &listen).await,
        Command::Render { output } => render(config, output).await,
        Command::Snapshot {
            output,
            width,
            height,
        } => snapshot(config, output, width, height).await,
    }
}

async fn serve(config: AppConfig, listen: &str) -> Result<()> {
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;
    info!("Prometheus metrics exporter initialized");

    info!(source = %config.source.locator, "Starting warning map server");
    let state = Arc::new(AppState::new(config));

    // Not fatal: the page reports the failure and /api/reload can retry.
    if let Err(e) = state.refresh().await {
        error!("Initial load failed: {}", e);
    }

    let app = warning_map::build_router(state, Some(prometheus_handle));

    let addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", listen))?;
    info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Received shutdown signal");
        })
        .await?;

    Ok(())
}

async fn render(config: AppConfig, output: Option<PathBuf>) -> Result<()> {
    let (session, report) = runner::run_once(&config)
        .await
        .context("Failed to load CSV data")?;

    let json = serde_json::to_string_pretty(&session.to_feature_collection())?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write: {:?}", path))?;
            info!(output = %path.display(), features = session.len(), "Wrote features");
        }
        None => println!("{}", json),
    }

    info!(
        rows = report.rows,
        skipped = report.skipped,
        buffer_failures = report.buffer_failures(),
        "Render complete"
    );
    Ok(())
}

async fn snapshot(
    config: AppConfig,
    output: PathBuf,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<()> {
    let (session, _) = runner::run_once(&config)
        .await
        .context("Failed to load CSV data")?;

    let options = SnapshotOptions {
        width: width.unwrap_or(config.snapshot.width),
        height: height.unwrap_or(config.snapshot.height),
        ..SnapshotOptions::default()
    };
    let png = render_snapshot(&session, &options)?;

    std::fs::write(&output, &png).with_context(|| format!("Failed to write: {:?}", output))?;
    info!(output = %output.display(), bytes = png.len(), "Wrote snapshot");
    Ok(())
}
