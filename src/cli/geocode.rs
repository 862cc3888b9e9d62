//! Geocode command handler

use crate::cli::{build_client, formatter_for};
use crate::config::Config;
use crate::error::Result;
use crate::format::{GeocodeReport, Report};
use clap::Args;

/// Geocode command arguments
#[derive(Args)]
pub struct GeocodeArgs {
    /// Address to look up
    pub address: String,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Mapbox access token
    #[arg(long)]
    pub token: Option<String>,
}

/// Run the geocode command
pub async fn run(args: GeocodeArgs) -> Result<()> {
    let config = Config::load()?;
    let format = args.format.clone().unwrap_or(config.defaults.format.clone());

    let formatter = formatter_for(&format)?;
    let client = build_client(&config, args.token.as_deref())?;
    let coordinates = client.get_address_coordinates(&args.address).await?;

    let report = Report::Geocode(GeocodeReport {
        address: args.address,
        coordinates,
    });

    println!("{}", formatter.format(&report)?);

    Ok(())
}
