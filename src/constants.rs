//! Centralized constants for the drive-distance crate

/// Unit conversion constants
pub mod units {
    /// Exact number of meters in one international mile
    pub const METERS_PER_MILE: f64 = 1609.344;

    /// Meters in one kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;
}

/// Mapbox API endpoints
pub mod api {
    /// Mapbox API base URL
    pub const MAPBOX_URL: &str = "https://api.mapbox.com";

    /// Forward geocoding endpoint (relative to the base URL)
    pub const GEOCODING_PATH: &str = "/geocoding/v5/mapbox.places";

    /// Driving distance matrix endpoint (relative to the base URL)
    pub const MATRIX_PATH: &str = "/directions-matrix/v1/mapbox/driving";
}

/// Environment variables read by the CLI
pub mod env {
    /// Access token override
    pub const ACCESS_TOKEN: &str = "MAPBOX_ACCESS_TOKEN";
}
