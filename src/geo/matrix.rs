//! Mapbox driving distance matrix
//!
//! `GET {base}/directions-matrix/v1/mapbox/driving/{a};{b}/?annotations=distance&sources=0&access_token={token}`
//!
//! With `sources=0` the matrix has a single row: distances in meters from
//! the first point to every point, itself included.

use crate::constants::api::MATRIX_PATH;
use crate::coord::Coordinate;
use crate::error::{Error, Lookup, Result};
use crate::transport::HttpResponse;
use serde::{Deserialize, Serialize};

/// How the origin→destination distance is picked out of the first row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceExtraction {
    /// First entry that is not exactly zero; 0 if every entry is zero.
    /// Identical points therefore measure 0.
    #[default]
    FirstNonZero,
    /// Entry at the destination index (1)
    DestinationIndex,
}

impl DistanceExtraction {
    /// Pick the distance out of a matrix row
    ///
    /// Returns `None` when the row has no usable entry.
    pub fn extract(self, row: &[f64]) -> Option<f64> {
        match self {
            Self::FirstNonZero => Some(row.iter().copied().find(|d| *d != 0.0).unwrap_or(0.0)),
            Self::DestinationIndex => row.get(1).copied(),
        }
    }
}

impl std::fmt::Display for DistanceExtraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstNonZero => write!(f, "first_non_zero"),
            Self::DestinationIndex => write!(f, "destination_index"),
        }
    }
}

impl std::str::FromStr for DistanceExtraction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first_non_zero" | "first-non-zero" => Ok(Self::FirstNonZero),
            "destination_index" | "destination-index" => Ok(Self::DestinationIndex),
            _ => Err(format!("Unknown distance extraction: {}", s)),
        }
    }
}

/// Build the distance matrix request URL
pub fn matrix_url(base_url: &str, from: Coordinate, to: Coordinate, access_token: &str) -> String {
    format!(
        "{}{}/{};{}/?annotations=distance&sources=0&access_token={}",
        base_url, MATRIX_PATH, from, to, access_token
    )
}

/// Interpret a distance matrix response, returning meters
pub fn parse_response(
    from: Coordinate,
    to: Coordinate,
    response: &HttpResponse,
    extraction: DistanceExtraction,
) -> Result<f64> {
    if !response.is_ok() {
        return Err(Error::DistanceService {
            from,
            to,
            status: response.status,
            status_text: response.status_text.clone(),
        });
    }

    let lookup = || Lookup::Distance { from, to };
    let malformed = || Error::MalformedResponse { lookup: lookup() };

    let mut body = response
        .json()
        .map_err(|source| Error::Network {
            lookup: lookup(),
            source,
        })?;

    let distances = body
        .get_mut("distances")
        .map(serde_json::Value::take)
        .ok_or_else(malformed)?;

    let matrix: Vec<Vec<f64>> = serde_json::from_value(distances).map_err(|_| malformed())?;

    let row = matrix.first().ok_or_else(malformed)?;

    extraction.extract(row).ok_or_else(malformed)
}
