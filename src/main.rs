//! Fund Dashboard server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Settings come from a TOML file (`--config`, `~/.config/fund-dashboard/config.toml`
//! or `./config.toml`), then environment variables, then command-line flags:
//! - `FUND_DASHBOARD_DATA`: CSV dataset path (default: data/dummy_sample.csv)
//! - `FUND_DASHBOARD_HOST`: Host to bind to (default: 127.0.0.1)
//! - `FUND_DASHBOARD_PORT`: Port to listen on (default: 8050)
//! - `FUND_DASHBOARD_DEBUG`: Debug mode (default: true)
//! - `RUST_LOG`: Log filter (overrides the configured level)

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use fund_dashboard::api::{serve, ApiConfig, AppState};
use fund_dashboard::config::{generate_default_config, Config, LoggingConfig};
use fund_dashboard::dataset::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "fund-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Investment and Emissions Dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard (default)
    Serve(ServeArgs),

    /// Print a default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
struct ServeArgs {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV dataset path
    #[arg(long)]
    data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug mode
    #[arg(long, conflicts_with = "no_debug")]
    debug: bool,

    /// Disable debug mode
    #[arg(long)]
    no_debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => run_server(args).await,
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
            Ok(())
        }
    }
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    init_tracing(&config.logging, config.server.debug);

    tracing::info!("Starting Fund Dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {:?}", config.dataset.path);

    let dataset = Dataset::load(&config.dataset.path)
        .with_context(|| format!("Failed to load dataset {:?}", config.dataset.path))?;

    let api_config = ApiConfig::from(&config.server);
    let state = AppState::new(Arc::new(dataset), api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Fund Dashboard stopped");
    Ok(())
}

/// Resolve config file, environment and flags, in increasing precedence
fn load_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    if let Some(data) = &args.data {
        config.dataset.path = data.clone();
    }
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.debug {
        config.server.debug = true;
    }
    if args.no_debug {
        config.server.debug = false;
    }

    Ok(config)
}

fn init_tracing(logging: &LoggingConfig, debug: bool) {
    let level = if debug { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("fund_dashboard={level},tower_http={level}"))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
