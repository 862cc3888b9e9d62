//! Distance unit conversion

use crate::constants::units::{METERS_PER_KILOMETER, METERS_PER_MILE};
use serde::{Deserialize, Serialize};

/// Convert meters to miles
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

/// Convert miles to meters
pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

/// Unit a distance is reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
    Meters,
}

impl DistanceUnit {
    /// Convert a distance in meters to this unit
    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            Self::Miles => meters_to_miles(meters),
            Self::Kilometers => meters / METERS_PER_KILOMETER,
            Self::Meters => meters,
        }
    }

    /// Short label (mi, km, m)
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Miles => "mi",
            Self::Kilometers => "km",
            Self::Meters => "m",
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Miles => write!(f, "miles"),
            Self::Kilometers => write!(f, "kilometers"),
            Self::Meters => write!(f, "meters"),
        }
    }
}

impl std::str::FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "miles" | "mile" | "mi" => Ok(Self::Miles),
            "kilometers" | "kilometer" | "km" => Ok(Self::Kilometers),
            "meters" | "meter" | "m" => Ok(Self::Meters),
            _ => Err(format!("Unknown distance unit: {}", s)),
        }
    }
}
