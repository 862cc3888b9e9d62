//! Mapbox forward geocoding
//!
//! `GET {base}/geocoding/v5/mapbox.places/{address}.json?types=address&access_token={token}`
//!
//! Results are ranked; only the first feature is used. The match is fuzzy,
//! so the returned point is not guaranteed to be the exact address.

use crate::constants::api::GEOCODING_PATH;
use crate::coord::Coordinate;
use crate::error::{Error, Lookup, Result};
use crate::geo::encode_uri_component;
use crate::transport::HttpResponse;
use serde::Deserialize;

/// A geocoding candidate
#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Coordinate,
}

/// Build the geocoding request URL for `address`
pub fn geocoding_url(base_url: &str, address: &str, access_token: &str) -> String {
    format!(
        "{}{}/{}.json?types=address&access_token={}",
        base_url,
        GEOCODING_PATH,
        encode_uri_component(address),
        access_token
    )
}

/// Interpret a geocoding response for `address`
pub fn parse_response(address: &str, response: &HttpResponse) -> Result<Coordinate> {
    if !response.is_ok() {
        return Err(Error::GeocodingService {
            address: address.to_string(),
            status: response.status,
            status_text: response.status_text.clone(),
        });
    }

    let lookup = || Lookup::Geocode {
        address: address.to_string(),
    };

    let mut body = response
        .json()
        .map_err(|source| Error::Network {
            lookup: lookup(),
            source,
        })?;

    let first = match body.get_mut("features").and_then(|f| f.as_array_mut()) {
        Some(features) if !features.is_empty() => features.swap_remove(0),
        _ => {
            return Err(Error::NoMatch {
                address: address.to_string(),
            })
        }
    };

    let feature: Feature = serde_json::from_value(first)
        .map_err(|_| Error::MalformedResponse { lookup: lookup() })?;

    Ok(feature.geometry.coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok(body: serde_json::Value) -> HttpResponse {
        HttpResponse {
            status: 200,
            status_text: "OK".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_geocoding_url() {
        assert_eq!(
            geocoding_url("https://api.mapbox.com", "1 Infinite Loop", "pk.test"),
            "https://api.mapbox.com/geocoding/v5/mapbox.places/1%20Infinite%20Loop.json?types=address&access_token=pk.test"
        );
    }

    #[test]
    fn test_first_feature_wins() {
        let body = json!({
            "type": "FeatureCollection",
            "features": [
                {"place_name": "first", "geometry": {"type": "Point", "coordinates": [10, 20]}},
                {"place_name": "second", "geometry": {"type": "Point", "coordinates": [30, 40]}}
            ]
        });
        let coord = parse_response("foo", &ok(body)).unwrap();
        assert_eq!(coord, Coordinate::new(10.0, 20.0));
    }

    #[test]
    fn test_no_features() {
        for body in [json!({"features": []}), json!({}), json!({"features": "nope"})] {
            match parse_response("nowhere", &ok(body)) {
                Err(Error::NoMatch { address }) => assert_eq!(address, "nowhere"),
                other => panic!("expected NoMatch, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_feature_without_coordinates() {
        let body = json!({"features": [{"geometry": {"type": "Point"}}]});
        assert!(matches!(
            parse_response("foo", &ok(body)),
            Err(Error::MalformedResponse {
                lookup: Lookup::Geocode { .. }
            })
        ));
    }

    #[test]
    fn test_non_200_short_circuits() {
        // Body would otherwise be a valid match
        let response = HttpResponse {
            status: 401,
            status_text: "Unauthorized".to_string(),
            body: json!({"features": [{"geometry": {"coordinates": [1, 2]}}]}).to_string(),
        };
        let err = parse_response("foo", &response).unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("status code 401"));
    }

    #[test]
    fn test_invalid_json_is_network_error() {
        let response = HttpResponse {
            status: 200,
            status_text: "OK".to_string(),
            body: "not json".to_string(),
        };
        assert!(matches!(
            parse_response("foo", &response),
            Err(Error::Network { .. })
        ));
    }
}
