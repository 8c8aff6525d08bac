//! Nominatim API response models

use serde::Deserialize;

/// One entry of a `/search` response
///
/// Nominatim returns coordinates as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NominatimResult {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl NominatimResult {
    /// Parse the coordinate strings
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.lat.trim().parse().ok()?;
        let lon = self.lon.trim().parse().ok()?;
        Some((lat, lon))
    }
}
