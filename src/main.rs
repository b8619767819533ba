//! # Pennant - Segmented Terminal Status Line
//!
//! Renders a single-line, segmented status display once per refresh
//! tick: input mode, battery, hostname, working directory, workspace,
//! Kubernetes cluster context, and clock, each independently
//! toggleable and styled from a resolved theme.

mod alias;
mod app;
mod cells;
mod config;
pub mod constants;
mod host;
mod models;
mod render;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::Config;
use constants::MIN_REFRESH_MS;

/// Pennant - Segmented Terminal Status Line
#[derive(Parser, Debug)]
#[command(name = "pennant", version, about = "A segmented, single-line terminal status display")]
struct Cli {
    /// Alternative config file (default: ~/.config/pennant/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<std::path::PathBuf>,

    /// Refresh interval in milliseconds
    #[arg(long, short = 'r', value_name = "MS")]
    interval: Option<u64>,

    /// Render one line and exit
    #[arg(long)]
    once: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Load and apply CLI overrides to config
    let mut config = Config::load(cli.config.as_deref());
    if let Some(ms) = cli.interval {
        config.refresh_interval_ms = ms.max(MIN_REFRESH_MS);
    }

    let mut app = app::App::new(config, cli.once);
    app.run().await
}
