//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod distance;
pub mod geocode;

use crate::client::{ClientOptions, DistanceClient};
use crate::config::Config;
use crate::constants::env::ACCESS_TOKEN;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter, OutputFormatter};
use crate::transport::http::HttpTransport;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Geocode addresses and compute driving distances with Mapbox
#[derive(Parser)]
#[command(name = "drive-distance")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Driving distance between two addresses or lng,lat pairs
    Distance(distance::DistanceArgs),

    /// Look up the coordinates of an address
    Geocode(geocode::GeocodeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Distance(args) => distance::run(args).await,
        Commands::Geocode(args) => geocode::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}

/// Install the stderr log subscriber (`RUST_LOG`, default `warn`)
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

/// Build a client from config, environment and an optional `--token` flag
pub(crate) fn build_client(config: &Config, token: Option<&str>) -> Result<DistanceClient> {
    let env_token = std::env::var(ACCESS_TOKEN).ok();

    let options = ClientOptions {
        access_token: config.resolve_access_token(token, env_token.as_deref()),
        ..ClientOptions::from_config(config)
    };

    let transport = HttpTransport::from_config(&config.http)?;
    DistanceClient::with_transport(options, transport).map_err(|e| match e {
        Error::Config(msg) => Error::Config(format!(
            "{} Pass --token, set {} or run `drive-distance config mapbox.access_token <TOKEN>`",
            msg, ACCESS_TOKEN
        )),
        other => other,
    })
}

/// Look up the named output formatter
///
/// Commands call this before building a client so a bad `--format` fails
/// without touching the network.
pub(crate) fn formatter_for(format: &str) -> Result<Box<dyn OutputFormatter>> {
    get_formatter(format).ok_or_else(|| {
        let known: Vec<String> = available_formats().into_iter().map(|f| f.name).collect();
        Error::Config(format!(
            "Unknown format: {} (available: {})",
            format,
            known.join(", ")
        ))
    })
}
