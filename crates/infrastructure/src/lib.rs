//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and wires the
//! application together: configuration, route catalog loading, geocoding
//! adapter and logging.

pub mod adapters;
pub mod catalog;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use catalog::{CatalogError, CatalogFormat, load_catalog, parse_catalog};
pub use config::{
    AppConfig, CatalogAppConfig, GeoLocationConfig, GeocodingAppConfig, ResolverAppConfig,
    TelemetryAppConfig,
};
pub use telemetry::{LoggingError, init_logging};
