//! Route catalog and resolver configuration

use std::path::PathBuf;

use application::StrategySelection;
use application::route_matching::{
    DEFAULT_MAX_HOME_DISTANCE_M, DEFAULT_MAX_SCHOOL_DISTANCE_M, GeoMatcherSettings,
};
use serde::{Deserialize, Serialize};

/// Catalog path used when none is configured
pub(crate) const DEFAULT_CATALOG_PATH: &str = "config/routes.toml";

/// Where the route catalog is read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogAppConfig {
    /// TOML or JSON catalog file, chosen by extension
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_PATH)
}

impl Default for CatalogAppConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl CatalogAppConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("catalog.path must not be empty".to_string());
        }
        Ok(())
    }
}

/// Strategy selection and geo matching radii
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolverAppConfig {
    /// `auto`, `itinerary` or `geo`
    #[serde(default)]
    pub strategy: StrategySelection,

    /// Maximum walk from home to the boarding stop, in meters
    #[serde(default = "default_max_home_distance_m")]
    pub max_home_distance_m: f64,

    /// Maximum distance from the school to the drop-off stop, in meters
    #[serde(default = "default_max_school_distance_m")]
    pub max_school_distance_m: f64,
}

const fn default_max_home_distance_m() -> f64 {
    DEFAULT_MAX_HOME_DISTANCE_M
}

const fn default_max_school_distance_m() -> f64 {
    DEFAULT_MAX_SCHOOL_DISTANCE_M
}

impl Default for ResolverAppConfig {
    fn default() -> Self {
        Self {
            strategy: StrategySelection::default(),
            max_home_distance_m: default_max_home_distance_m(),
            max_school_distance_m: default_max_school_distance_m(),
        }
    }
}

impl ResolverAppConfig {
    /// Matcher settings for the resolver
    #[must_use]
    pub const fn geo_settings(&self) -> GeoMatcherSettings {
        GeoMatcherSettings {
            max_home_distance_m: self.max_home_distance_m,
            max_school_distance_m: self.max_school_distance_m,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        self.geo_settings()
            .validate()
            .map_err(|e| format!("resolver.{e}"))
    }
}
