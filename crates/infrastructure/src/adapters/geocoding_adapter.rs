//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use std::sync::Arc;

use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::{AddressQuery, GeoLocation};
use integration_geocoding::{GeocodingClient, NominatimGeocodingClient};
use tracing::{debug, instrument, warn};

use crate::config::GeocodingAppConfig;

/// Defaults filled into addresses before they are sent to the geocoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressDefaults {
    /// City used when the address has none
    pub city: String,
    /// State used when the address has none
    pub state: String,
    /// Country appended to every search
    pub country: String,
}

impl From<&GeocodingAppConfig> for AddressDefaults {
    fn from(config: &GeocodingAppConfig) -> Self {
        Self {
            city: config.default_city.clone(),
            state: config.default_state.clone(),
            country: config.country_name.clone(),
        }
    }
}

/// Adapter for address geocoding
///
/// Every failure is logged and reported as `None`.
pub struct GeocodingAdapter {
    client: Arc<dyn GeocodingClient>,
    defaults: AddressDefaults,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"GeocodingClient")
            .field("defaults", &self.defaults)
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create an adapter around any geocoding client
    pub fn new(client: Arc<dyn GeocodingClient>, defaults: AddressDefaults) -> Self {
        Self { client, defaults }
    }

    /// Build a Nominatim-backed adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(
        config: &GeocodingAppConfig,
    ) -> Result<Self, integration_geocoding::GeocodingError> {
        let client = NominatimGeocodingClient::new(&config.to_nominatim_config())?;
        Ok(Self::new(Arc::new(client), AddressDefaults::from(config)))
    }

    /// Free-form search text for an address
    #[must_use]
    pub fn search_string(&self, address: &AddressQuery) -> String {
        address.to_search_string(
            &self.defaults.city,
            &self.defaults.state,
            &self.defaults.country,
        )
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self, address), fields(street = %address.street))]
    async fn geocode(&self, address: &AddressQuery) -> Option<GeoLocation> {
        if !address.is_geocodable() {
            debug!("Address has no street, not geocoding");
            return None;
        }

        let query = self.search_string(address);
        match self.client.geocode(&query).await {
            Ok(location) => {
                debug!(%query, %location, "Address geocoded");
                Some(location)
            },
            Err(e) => {
                warn!(%query, error = %e, "Geocoding failed");
                None
            },
        }
    }
}
