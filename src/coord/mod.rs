//! Coordinates and location inputs
//!
//! A location is either a free-form address (resolved through geocoding) or
//! a coordinate pair used as-is.

pub mod units;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic coordinate in (longitude, latitude) order
///
/// Serialized as a `[lng, lat]` array, the shape Mapbox uses on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Check that longitude is in [-180, 180] and latitude in [-90, 90]
    ///
    /// Useful for rejecting user-supplied pairs (e.g. swapped lat/lng)
    /// before spending a request on them. Returns `InvalidLocation`.
    pub fn validate(&self) -> Result<()> {
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(Error::InvalidLocation(format!(
                "{} (longitude out of range [-180, 180])",
                self
            )));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::InvalidLocation(format!(
                "{} (latitude out of range [-90, 90])",
                self
            )));
        }
        Ok(())
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.lng, coord.lat]
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self { lng, lat }
    }
}

/// Comma-joined `lng,lat` with no spaces, as used in Mapbox URLs
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}

/// A location to measure from or to
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// Address string, matched exactly against the cache
    Address(String),
    /// Coordinate pair, used unchanged
    Coordinate(Coordinate),
}

impl From<&str> for Location {
    fn from(address: &str) -> Self {
        Self::Address(address.to_string())
    }
}

impl From<String> for Location {
    fn from(address: String) -> Self {
        Self::Address(address)
    }
}

impl From<Coordinate> for Location {
    fn from(coord: Coordinate) -> Self {
        Self::Coordinate(coord)
    }
}

impl From<[f64; 2]> for Location {
    fn from(pair: [f64; 2]) -> Self {
        Self::Coordinate(pair.into())
    }
}

impl From<(f64, f64)> for Location {
    fn from(pair: (f64, f64)) -> Self {
        Self::Coordinate(pair.into())
    }
}

/// Untyped input: a JSON string is an address, a two-element numeric array
/// is a `[lng, lat]` pair. Anything else is rejected.
impl TryFrom<serde_json::Value> for Location {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        match &value {
            Value::String(address) => Ok(Self::Address(address.clone())),
            Value::Array(items) if items.len() == 2 => {
                match (items[0].as_f64(), items[1].as_f64()) {
                    (Some(lng), Some(lat)) => Ok(Self::Coordinate(Coordinate::new(lng, lat))),
                    _ => Err(Error::InvalidLocation(value.to_string())),
                }
            }
            _ => Err(Error::InvalidLocation(value.to_string())),
        }
    }
}

/// Command-line form: `lng,lat` (two finite numbers) is a coordinate,
/// any other non-blank text is an address.
impl std::str::FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(Error::InvalidLocation(s.to_string()));
        }

        if let Some((lng, lat)) = s.split_once(',') {
            if let (Ok(lng), Ok(lat)) = (lng.trim().parse::<f64>(), lat.trim().parse::<f64>()) {
                if lng.is_finite() && lat.is_finite() {
                    return Ok(Self::Coordinate(Coordinate::new(lng, lat)));
                }
            }
        }

        Ok(Self::Address(s.to_string()))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => write!(f, "{}", address),
            Self::Coordinate(coord) => write!(f, "{}", coord),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coordinate_display() {
        assert_eq!(Coordinate::new(-122.03, 37.33).to_string(), "-122.03,37.33");
        assert_eq!(Coordinate::new(10.0, 20.0).to_string(), "10,20");
    }

    #[test]
    fn test_coordinate_serializes_as_pair() {
        let coord = Coordinate::new(10.0, 20.5);
        assert_eq!(serde_json::to_value(coord).unwrap(), json!([10.0, 20.5]));

        let parsed: Coordinate = serde_json::from_value(json!([10, 20])).unwrap();
        assert_eq!(parsed, Coordinate::new(10.0, 20.0));
    }

    #[test]
    fn test_validate() {
        assert!(Coordinate::new(-122.03, 37.33).validate().is_ok());
        assert!(Coordinate::new(181.0, 0.0).validate().is_err());
        assert!(Coordinate::new(0.0, -90.5).validate().is_err());

        // lat/lng swapped by the caller
        match Coordinate::new(37.33, -122.03).validate() {
            Err(Error::InvalidLocation(msg)) => assert!(msg.contains("latitude out of range")),
            other => panic!("expected InvalidLocation, got {:?}", other),
        }
    }

    #[test]
    fn test_location_from_json() {
        assert_eq!(
            Location::try_from(json!("1 Infinite Loop")).unwrap(),
            Location::Address("1 Infinite Loop".to_string())
        );
        assert_eq!(
            Location::try_from(json!([10, 20])).unwrap(),
            Location::Coordinate(Coordinate::new(10.0, 20.0))
        );
    }

    #[test]
    fn test_location_from_json_rejects_other_values() {
        let invalid = [
            json!(null),
            json!(42),
            json!(true),
            json!([1.0]),
            json!([1.0, 2.0, 3.0]),
            json!(["1", "2"]),
            json!({"lng": 1.0, "lat": 2.0}),
        ];

        for value in invalid {
            let expected = value.to_string();
            match Location::try_from(value) {
                Err(Error::InvalidLocation(v)) => assert_eq!(v, expected),
                other => panic!("expected InvalidLocation, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_location_from_str() {
        let loc: Location = "-122.03,37.33".parse().unwrap();
        assert_eq!(loc, Location::Coordinate(Coordinate::new(-122.03, 37.33)));

        let loc: Location = " 10 , 20 ".parse().unwrap();
        assert_eq!(loc, Location::Coordinate(Coordinate::new(10.0, 20.0)));

        let loc: Location = "1 Infinite Loop, Cupertino".parse().unwrap();
        assert_eq!(
            loc,
            Location::Address("1 Infinite Loop, Cupertino".to_string())
        );

        let loc: Location = "NaN,1".parse().unwrap();
        assert!(matches!(loc, Location::Address(_)));

        assert!("   ".parse::<Location>().is_err());
    }
}
