//! External service configuration

use integration_geocoding::NominatimConfig;
use serde::{Deserialize, Serialize};

use super::telemetry::default_true;

/// Geocoding configuration
///
/// Presence of the `[geocoding]` section turns geocoding on unless
/// `enabled = false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Enable geocoding
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Base URL for the Nominatim API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Cache TTL in hours (0 to disable)
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: u64,

    /// Country code filter passed to Nominatim
    #[serde(default = "default_country_filter")]
    pub country_filter: String,

    /// User-Agent sent to Nominatim
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// City used when an address leaves it blank
    #[serde(default = "default_city")]
    pub default_city: String,

    /// State used when an address leaves it blank
    #[serde(default = "default_state")]
    pub default_state: String,

    /// Country appended to every search
    #[serde(default = "default_country_name")]
    pub country_name: String,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_cache_ttl_hours() -> u64 {
    24
}

fn default_country_filter() -> String {
    "br".to_string()
}

fn default_user_agent() -> String {
    "SchoolPassSystem/1.0".to_string()
}

fn default_city() -> String {
    "Imbé".to_string()
}

fn default_state() -> String {
    "RS".to_string()
}

fn default_country_name() -> String {
    "Brazil".to_string()
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_hours: default_cache_ttl_hours(),
            country_filter: default_country_filter(),
            user_agent: default_user_agent(),
            default_city: default_city(),
            default_state: default_state(),
            country_name: default_country_name(),
        }
    }
}

impl GeocodingAppConfig {
    /// Client configuration for the Nominatim integration
    #[must_use]
    pub fn to_nominatim_config(&self) -> NominatimConfig {
        NominatimConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            cache_ttl_hours: self.cache_ttl_hours,
            country_filter: self.country_filter.clone(),
            user_agent: self.user_agent.clone(),
            ..NominatimConfig::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }
        self.to_nominatim_config().validate()
    }
}

/// Geographic location configuration (latitude/longitude pair)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to domain `GeoLocation` value object
    ///
    /// Returns `None` if coordinates are invalid.
    #[must_use]
    pub fn to_geo_location(&self) -> Option<domain::GeoLocation> {
        domain::GeoLocation::new(self.latitude, self.longitude).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoding_defaults_match_the_served_municipality() {
        let config = GeocodingAppConfig::default();
        assert!(config.enabled);
        assert_eq!(config.default_city, "Imbé");
        assert_eq!(config.default_state, "RS");
        assert_eq!(config.country_name, "Brazil");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nominatim_config_carries_client_settings() {
        let config = GeocodingAppConfig {
            base_url: "http://localhost:8088".to_string(),
            cache_ttl_hours: 0,
            ..Default::default()
        };
        let nominatim = config.to_nominatim_config();
        assert_eq!(nominatim.base_url, "http://localhost:8088");
        assert_eq!(nominatim.cache_ttl_hours, 0);
        assert_eq!(nominatim.user_agent, "SchoolPassSystem/1.0");
        assert_eq!(nominatim.min_request_interval_ms, 1100);
    }

    #[test]
    fn disabled_geocoding_skips_validation() {
        let config = GeocodingAppConfig {
            enabled: false,
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = GeocodingAppConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn geo_location_config_conversion() {
        let valid = GeoLocationConfig {
            latitude: -29.97,
            longitude: -50.13,
        };
        assert!(valid.to_geo_location().is_some());

        let invalid = GeoLocationConfig {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(invalid.to_geo_location().is_none());
    }
}
