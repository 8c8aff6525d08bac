//! Geocoding service configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Longest cache TTL accepted, one year
pub const MAX_CACHE_TTL_HOURS: u64 = 24 * 365;

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Cache TTL in hours (0 to disable)
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: u64,

    /// Country code filter (e.g., "br" for Brazil, empty for none)
    #[serde(default = "default_country_filter")]
    pub country_filter: String,

    /// User-Agent sent with every request, required by the usage policy
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Minimum spacing between two requests in milliseconds
    #[serde(default = "default_min_request_interval_ms")]
    pub min_request_interval_ms: u64,

    /// Preferred languages for results
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
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

const fn default_min_request_interval_ms() -> u64 {
    1100
}

fn default_accept_language() -> String {
    "pt-BR,pt,en".to_string()
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_hours: default_cache_ttl_hours(),
            country_filter: default_country_filter(),
            user_agent: default_user_agent(),
            min_request_interval_ms: default_min_request_interval_ms(),
            accept_language: default_accept_language(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration pointing at a local mock server
    ///
    /// Caching and request spacing are disabled.
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cache_ttl_hours: 0,
            min_request_interval_ms: 0,
            ..Default::default()
        }
    }

    /// Whether results are cached
    #[must_use]
    pub const fn cache_enabled(&self) -> bool {
        self.cache_ttl_hours > 0
    }

    /// Cache TTL as a duration, capped at [`MAX_CACHE_TTL_HOURS`]
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_hours.min(MAX_CACHE_TTL_HOURS) * 3600)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("geocoding.base_url must not be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "geocoding.base_url must be an http(s) URL, got '{}'",
                self.base_url
            ));
        }
        if self.timeout_secs == 0 {
            return Err("geocoding.timeout_secs must be greater than zero".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("geocoding.user_agent must not be empty".to_string());
        }
        if self.cache_ttl_hours > MAX_CACHE_TTL_HOURS {
            return Err(format!(
                "geocoding.cache_ttl_hours must be at most {MAX_CACHE_TTL_HOURS}, got {}",
                self.cache_ttl_hours
            ));
        }
        Ok(())
    }
}
