//! Mapbox lookups
//!
//! URL construction and response interpretation for the two Mapbox
//! endpoints the client talks to, plus the address cache that sits in
//! front of geocoding.

pub mod cache;
pub mod geocoding;
pub mod matrix;

pub use cache::AddressCache;
pub use matrix::DistanceExtraction;

/// Percent-encode a path segment the way `encodeURIComponent` does
///
/// `urlencoding` also escapes `!'()*`, which Mapbox URLs leave literal.
pub fn encode_uri_component(s: &str) -> String {
    urlencoding::encode(s)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
