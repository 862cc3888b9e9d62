//! drive-distance: Mapbox driving distances
//!
//! A small client that resolves addresses to coordinates and asks Mapbox
//! for the driving distance between two locations.
//!
//! ## Features
//!
//! - Locations as free-form addresses or `[lng, lat]` pairs
//! - Per-client in-memory cache of geocoded addresses
//! - Typed errors for every way a lookup can fail
//! - Pluggable HTTP transport (reqwest by default)
//! - CLI with TOML configuration
//!
//! ## Quick Start
//!
//! ```no_run
//! use drive_distance::{ClientOptions, Coordinate, DistanceClient};
//!
//! # async fn example() -> drive_distance::Result<()> {
//! let client = DistanceClient::new(ClientOptions::with_token("pk.your-token"))?;
//!
//! // Addresses and coordinates can be mixed; check user-supplied pairs first
//! let destination = Coordinate::new(-122.4194, 37.7749);
//! destination.validate()?;
//!
//! let miles = client
//!     .driving_distance("1 Infinite Loop, Cupertino", destination)
//!     .await?;
//! println!("{:.1} miles", miles);
//!
//! // Second lookup of the same address is served from the cache
//! let coords = client.get_address_coordinates("1 Infinite Loop, Cupertino").await?;
//! println!("{}", coords);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod geo;
pub mod transport;

// Re-export commonly used types
pub use client::{ClientOptions, DistanceClient};
pub use config::Config;
pub use coord::units::{meters_to_miles, miles_to_meters, DistanceUnit};
pub use coord::{Coordinate, Location};
pub use error::{Error, Lookup, Result};
pub use geo::DistanceExtraction;
pub use transport::{HttpResponse, Transport, TransportError};
