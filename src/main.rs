//! HTTP Endpoint Availability Monitor Binary

use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uptime_monitor::{Config, HealthMonitor};

/// Poll HTTP endpoints and report per-domain availability percentages
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the YAML endpoint configuration file
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    initialize_tracing();

    let args = Args::parse();

    info!("Starting uptime monitor v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!(
                "Failed to load configuration from {}: {}",
                args.config.display(),
                e
            );
            std::process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    info!("Monitoring {} endpoints", config.endpoints.len());

    let mut monitor = match HealthMonitor::new(config) {
        Ok(monitor) => monitor,
        Err(e) => {
            error!("Failed to create HTTP prober: {}", e);
            std::process::exit(1);
        }
    };

    println!("Starting health checks... (Press CTRL+C to stop)");

    monitor.run().await;
}

/// Initialize structured logging on stderr
fn initialize_tracing() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))
        .unwrap();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
