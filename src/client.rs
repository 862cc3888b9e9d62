//! Driving distance client
//!
//! Resolves locations to coordinates (through the address cache or Mapbox
//! geocoding) and asks the Mapbox distance matrix for the driving distance
//! between them.

use crate::config::Config;
use crate::constants::api::MAPBOX_URL;
use crate::coord::units::{meters_to_miles, DistanceUnit};
use crate::coord::{Coordinate, Location};
use crate::error::{Error, Lookup, Result};
use crate::geo::{geocoding, matrix, AddressCache, DistanceExtraction};
use crate::transport::http::HttpTransport;
use crate::transport::Transport;
use tracing::{debug, trace};

/// Options accepted by [`DistanceClient::new`]
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Mapbox access token (required, non-empty)
    pub access_token: Option<String>,

    /// How the distance is read from the matrix response
    pub extraction: DistanceExtraction,
}

impl ClientOptions {
    /// Options with just an access token
    pub fn with_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            ..Self::default()
        }
    }

    /// Options from a loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            access_token: Some(config.mapbox.access_token.clone()),
            extraction: config.defaults.extraction,
        }
    }
}

/// Client for geocoding and driving distance lookups
///
/// Each client owns its own address cache; nothing is shared between
/// instances or persisted.
#[derive(Debug)]
pub struct DistanceClient<T = HttpTransport> {
    access_token: String,
    base_url: &'static str,
    extraction: DistanceExtraction,
    cache: AddressCache,
    transport: T,
}

impl DistanceClient<HttpTransport> {
    /// Create a client using the default reqwest transport
    ///
    /// Fails if the access token is missing or empty. No request is made.
    pub fn new(options: ClientOptions) -> Result<Self> {
        Self::with_transport(options, HttpTransport::new())
    }
}

impl<T: Transport> DistanceClient<T> {
    /// Create a client over a specific transport
    pub fn with_transport(options: ClientOptions, transport: T) -> Result<Self> {
        let access_token = match options.access_token {
            Some(token) if !token.is_empty() => token,
            _ => {
                return Err(Error::Config(
                    "No Mapbox access token provided.".to_string(),
                ))
            }
        };

        Ok(Self {
            access_token,
            base_url: MAPBOX_URL,
            extraction: options.extraction,
            cache: AddressCache::new(),
            transport,
        })
    }

    /// Resolve a location to a coordinate
    ///
    /// Coordinates pass through untouched. Addresses are served from the
    /// cache when present and geocoded otherwise.
    pub async fn normalize(&self, location: &Location) -> Result<Coordinate> {
        match location {
            Location::Coordinate(coord) => Ok(*coord),
            Location::Address(address) => {
                if let Some(coord) = self.cache.get(address).await {
                    debug!(address = %address, "address cache hit");
                    return Ok(coord);
                }
                debug!(address = %address, "address cache miss");
                self.get_address_coordinates(address).await
            }
        }
    }

    /// Geocode an address
    ///
    /// Always asks Mapbox (the cache is not consulted) and stores the result
    /// in the cache under the exact address string. Mapbox matches fuzzily,
    /// so the result is the closest known address rather than an exact one.
    pub async fn get_address_coordinates(&self, address: &str) -> Result<Coordinate> {
        let url = geocoding::geocoding_url(self.base_url, address, &self.access_token);

        debug!(address = %address, "geocoding address");

        let response = self
            .transport
            .get(&url)
            .await
            .map_err(|source| Error::Network {
                lookup: Lookup::Geocode {
                    address: address.to_string(),
                },
                source,
            })?;

        trace!(status = response.status, "geocoding response");

        let coord = geocoding::parse_response(address, &response)?;
        self.cache.insert(address, coord).await;

        Ok(coord)
    }

    /// Driving distance between two coordinates, in meters
    async fn distance_in_meters(&self, from: Coordinate, to: Coordinate) -> Result<f64> {
        let url = matrix::matrix_url(self.base_url, from, to, &self.access_token);

        debug!(from = %from, to = %to, "requesting driving distance");

        let response = self
            .transport
            .get(&url)
            .await
            .map_err(|source| Error::Network {
                lookup: Lookup::Distance { from, to },
                source,
            })?;

        trace!(status = response.status, "distance matrix response");

        matrix::parse_response(from, to, &response, self.extraction)
    }

    /// Driving distance between two coordinates, in miles
    pub async fn distance_in_miles(&self, from: Coordinate, to: Coordinate) -> Result<f64> {
        Ok(meters_to_miles(self.distance_in_meters(from, to).await?))
    }

    /// Resolve both locations concurrently
    ///
    /// If both fail, the first location's error is returned.
    async fn resolve_pair(&self, from: &Location, to: &Location) -> Result<(Coordinate, Coordinate)> {
        let (from, to) = tokio::join!(self.normalize(from), self.normalize(to));
        Ok((from?, to?))
    }

    /// Driving distance in miles between two addresses or coordinates
    pub async fn driving_distance(
        &self,
        from: impl Into<Location>,
        to: impl Into<Location>,
    ) -> Result<f64> {
        let (from, to) = self.resolve_pair(&from.into(), &to.into()).await?;
        self.distance_in_miles(from, to).await
    }

    /// Driving distance between two addresses or coordinates in `unit`
    pub async fn driving_distance_in(
        &self,
        from: impl Into<Location>,
        to: impl Into<Location>,
        unit: DistanceUnit,
    ) -> Result<f64> {
        let (from, to) = self.resolve_pair(&from.into(), &to.into()).await?;
        Ok(unit.from_meters(self.distance_in_meters(from, to).await?))
    }

    /// Cached coordinate for an exact address, if any
    pub async fn cached_coordinates(&self, address: &str) -> Option<Coordinate> {
        self.cache.get(address).await
    }

    /// Number of addresses in the cache
    pub async fn cache_len(&self) -> usize {
        self.cache.len().await
    }

    /// Distance extraction rule in use
    pub fn extraction(&self) -> DistanceExtraction {
        self.extraction
    }
}
