//! Address resolution for the location step.
//!
//! The wizard only needs coordinates for geofence zones, so the collaborator
//! surface is a single async lookup. Production wires a real geocoding
//! client in here; the bundled [`StaticGeocoder`] serves demos and tests
//! with a small fixed table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A latitude/longitude pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, -90..=90
    pub latitude: f64,
    /// Longitude, -180..=180
    pub longitude: f64,
}

/// A successful lookup, kept in wizard state for the location form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddressLookup {
    /// The address as it was submitted
    pub address: String,
    /// Resolved coordinates
    pub coordinates: Coordinates,
}

/// Errors from address resolution
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The address matched nothing
    #[error("address not found: {0}")]
    NotFound(String),

    /// The upstream resolver failed
    #[error("geocoding backend error: {0}")]
    Backend(String),
}

/// Resolves free-text addresses into coordinates
#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves an address
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::NotFound`] for unknown addresses and
    /// [`GeocodeError::Backend`] when the resolver itself fails.
    async fn resolve(&self, address: &str) -> Result<Coordinates, GeocodeError>;
}

/// In-memory geocoder backed by a fixed lookup table
///
/// Matching is case-insensitive on the trimmed address.
#[derive(Debug, Default)]
pub struct StaticGeocoder {
    table: HashMap<String, Coordinates>,
}

impl StaticGeocoder {
    /// Creates a geocoder preloaded with a handful of well-known cities
    #[must_use]
    pub fn with_known_cities() -> Self {
        let mut geocoder = Self::default();
        geocoder.insert("new york", 40.7128, -74.0060);
        geocoder.insert("london", 51.5074, -0.1278);
        geocoder.insert("tokyo", 35.6762, 139.6503);
        geocoder.insert("paris", 48.8566, 2.3522);
        geocoder.insert("berlin", 52.5200, 13.4050);
        geocoder
    }

    /// Adds or replaces an entry
    pub fn insert(&mut self, address: &str, latitude: f64, longitude: f64) {
        self.table.insert(
            address.trim().to_lowercase(),
            Coordinates {
                latitude,
                longitude,
            },
        );
    }
}

#[async_trait::async_trait]
impl Geocoder for StaticGeocoder {
    async fn resolve(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        self.table
            .get(&address.trim().to_lowercase())
            .copied()
            .ok_or_else(|| GeocodeError::NotFound(address.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_known_city_case_insensitively() {
        let geocoder = StaticGeocoder::with_known_cities();
        let coordinates = geocoder.resolve("  New York ").await.unwrap();
        assert!((coordinates.latitude - 40.7128).abs() < 1e-9);
        assert!((coordinates.longitude + 74.0060).abs() < 1e-9);
    }

    #[tokio::test]
    async fn unknown_address_is_not_found() {
        let geocoder = StaticGeocoder::with_known_cities();
        let err = geocoder.resolve("atlantis").await.unwrap_err();
        assert!(matches!(err, GeocodeError::NotFound(_)));
    }
}
