//! Human-readable text output formatter

use crate::error::Result;
use crate::format::{OutputFormatter, Report};

/// Text formatter - outputs a short human-readable summary
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        match report {
            Report::Distance(distance) => {
                output.push_str(&format!(
                    "From: {} ({})\n",
                    distance.from.input, distance.from.coordinates
                ));
                output.push_str(&format!(
                    "To:   {} ({})\n",
                    distance.to.input, distance.to.coordinates
                ));
                output.push_str(&format!(
                    "Driving distance: {:.2} {}",
                    distance.distance,
                    distance.unit.abbreviation()
                ));
            }
            Report::Geocode(geocode) => {
                output.push_str(&format!("{}\n", geocode.address));
                output.push_str(&format!(
                    "Longitude: {:.6}\nLatitude:  {:.6}",
                    geocode.coordinates.lng, geocode.coordinates.lat
                ));
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coordinate;
    use crate::format::{sample_distance, GeocodeReport};

    #[test]
    fn test_text_distance() {
        let output = TextFormatter.format(&sample_distance()).unwrap();

        assert!(output.contains("From: 1 Infinite Loop (-122.03,37.33)"));
        assert!(output.contains("To:   -122.42,37.77 (-122.42,37.77)"));
        assert!(output.ends_with("Driving distance: 45.68 mi"));
    }

    #[test]
    fn test_text_geocode() {
        let report = Report::Geocode(GeocodeReport {
            address: "foo".to_string(),
            coordinates: Coordinate::new(10.0, 20.0),
        });
        let output = TextFormatter.format(&report).unwrap();

        assert!(output.starts_with("foo\n"));
        assert!(output.contains("Longitude: 10.000000"));
        assert!(output.contains("Latitude:  20.000000"));
    }
}
