//! Distance command handler

use crate::cli::{build_client, formatter_for};
use crate::config::Config;
use crate::coord::units::DistanceUnit;
use crate::coord::Location;
use crate::error::{Error, Result};
use crate::format::{DistanceReport, Report, ResolvedLocation};
use clap::Args;

/// Distance command arguments
#[derive(Args)]
pub struct DistanceArgs {
    /// Starting point: an address or `lng,lat`
    #[arg(allow_hyphen_values = true)]
    pub from: String,

    /// Destination: an address or `lng,lat`
    #[arg(allow_hyphen_values = true)]
    pub to: String,

    /// Distance unit (miles, kilometers, meters)
    #[arg(long, short = 'u')]
    pub unit: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Mapbox access token
    #[arg(long)]
    pub token: Option<String>,
}

/// Run the distance command
pub async fn run(args: DistanceArgs) -> Result<()> {
    let config = Config::load()?;

    let unit = match &args.unit {
        Some(unit) => unit.parse::<DistanceUnit>().map_err(Error::Config)?,
        None => config.defaults.unit,
    };
    let format = args.format.clone().unwrap_or(config.defaults.format.clone());

    let from: Location = args.from.parse()?;
    let to: Location = args.to.parse()?;

    let formatter = formatter_for(&format)?;
    let client = build_client(&config, args.token.as_deref())?;

    let (from_coords, to_coords) = tokio::try_join!(client.normalize(&from), client.normalize(&to))?;
    let distance = client.driving_distance_in(from_coords, to_coords, unit).await?;

    let report = Report::Distance(DistanceReport {
        from: ResolvedLocation {
            input: args.from,
            coordinates: from_coords,
        },
        to: ResolvedLocation {
            input: args.to,
            coordinates: to_coords,
        },
        distance,
        unit,
    });

    println!("{}", formatter.format(&report)?);

    Ok(())
}
