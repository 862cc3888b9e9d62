//! Output formatters
//!
//! Provides trait-based output formatting for CLI results.

pub mod json;
pub mod text;

use crate::coord::units::DistanceUnit;
use crate::coord::Coordinate;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// A resolved location as it was given and where it landed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// The input as typed
    pub input: String,
    /// Coordinates used for routing
    pub coordinates: Coordinate,
}

/// Result of a `distance` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceReport {
    pub from: ResolvedLocation,
    pub to: ResolvedLocation,
    pub distance: f64,
    pub unit: DistanceUnit,
}

/// Result of a `geocode` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeReport {
    pub address: String,
    pub coordinates: Coordinate,
}

/// Anything a CLI command prints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Distance(DistanceReport),
    Geocode(GeocodeReport),
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a report
    fn format(&self, report: &Report) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    [
        &json::JsonFormatter as &dyn OutputFormatter,
        &text::TextFormatter,
    ]
    .into_iter()
    .map(|f| FormatInfo {
        name: f.name().to_string(),
        description: f.description().to_string(),
    })
    .collect()
}

#[cfg(test)]
pub(crate) fn sample_distance() -> Report {
    Report::Distance(DistanceReport {
        from: ResolvedLocation {
            input: "1 Infinite Loop".to_string(),
            coordinates: Coordinate::new(-122.03, 37.33),
        },
        to: ResolvedLocation {
            input: "-122.42,37.77".to_string(),
            coordinates: Coordinate::new(-122.42, 37.77),
        },
        distance: 45.678,
        unit: DistanceUnit::Miles,
    })
}
