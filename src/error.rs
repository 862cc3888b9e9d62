//! Error types for drive-distance

use crate::coord::Coordinate;
use crate::transport::TransportError;
use std::fmt;
use thiserror::Error;

/// The remote lookup an error belongs to
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Forward geocoding of an address
    Geocode { address: String },
    /// Driving distance between two coordinates
    Distance { from: Coordinate, to: Coordinate },
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geocode { address } => write!(f, "geocoding provided address `{}`", address),
            Self::Distance { from, to } => write!(
                f,
                "getting driving distance between provided coordinates `{}` and `{}`",
                from, to
            ),
        }
    }
}

/// Main error type for drive-distance operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value `{0}` given as location")]
    InvalidLocation(String),

    #[error("No matching locations for provided address `{address}`")]
    NoMatch { address: String },

    #[error(
        "Error geocoding provided address `{address}`. Server responded with status code {status}. Message: {status_text}"
    )]
    GeocodingService {
        address: String,
        status: u16,
        status_text: String,
    },

    #[error(
        "Error getting driving distance between provided coordinates `{from}` and `{to}`. Server responded with status code {status}. Message: {status_text}"
    )]
    DistanceService {
        from: Coordinate,
        to: Coordinate,
        status: u16,
        status_text: String,
    },

    #[error("Malformed response while {lookup}")]
    MalformedResponse { lookup: Lookup },

    #[error("Error {lookup}. Message: {source}")]
    Network {
        lookup: Lookup,
        #[source]
        source: TransportError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status code returned by the service, if the error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::GeocodingService { status, .. } | Self::DistanceService { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Result type alias for drive-distance operations
pub type Result<T> = std::result::Result<T, Error>;
