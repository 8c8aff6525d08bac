//! Application configuration
//!
//! Split into focused sub-modules:
//! - `resolver`: route catalog location and matching parameters
//! - `integrations`: geocoding service
//! - `telemetry`: logging
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file (`schoolpass.toml` in the working directory, or an explicit path),
//! then `SCHOOLPASS_` environment variables with `__` separating nested
//! keys (e.g. `SCHOOLPASS_RESOLVER__STRATEGY=geo`).

mod integrations;
mod resolver;
mod telemetry;

use std::path::Path;

use application::ApplicationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use integrations::{GeoLocationConfig, GeocodingAppConfig};
pub use resolver::{CatalogAppConfig, ResolverAppConfig};
pub use telemetry::TelemetryAppConfig;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "schoolpass";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "SCHOOLPASS";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Route catalog file
    #[serde(default)]
    pub catalog: CatalogAppConfig,

    /// Strategy selection and matching radii
    #[serde(default)]
    pub resolver: ResolverAppConfig,

    /// Geocoding configuration (optional, geo matching needs coordinates)
    #[serde(default)]
    pub geocoding: Option<GeocodingAppConfig>,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `schoolpass.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or does not deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(None, env_source())
    }

    /// Load configuration from environment and a required file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or malformed.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::load_with(Some(path), env_source())
    }

    fn load_with(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("catalog.path", resolver::DEFAULT_CATALOG_PATH)?
            .set_default("resolver.strategy", "auto")?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., SCHOOLPASS_RESOLVER__STRATEGY)
            .add_source(environment);

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            catalog = %config.catalog.path.display(),
            strategy = %config.resolver.strategy,
            geocoding = config.geocoding_enabled(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Whether a geocoder should be wired into the resolver
    #[must_use]
    pub fn geocoding_enabled(&self) -> bool {
        self.geocoding.as_ref().is_some_and(|g| g.enabled)
    }

    /// Check every section
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] naming the first invalid
    /// setting.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.catalog.validate().map_err(ApplicationError::Configuration)?;
        self.resolver.validate().map_err(ApplicationError::Configuration)?;
        if let Some(geocoding) = &self.geocoding {
            geocoding.validate().map_err(ApplicationError::Configuration)?;
        }
        self.telemetry.validate().map_err(ApplicationError::Configuration)?;
        Ok(())
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
