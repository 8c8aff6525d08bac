//! Wiring of configuration, catalog and resolver

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use application::{RouteResolver, StrategySelection};
use domain::RouteCatalog;
use infrastructure::{AppConfig, GeocodingAdapter, load_catalog};
use tracing::{info, warn};

/// Load configuration from an explicit file, or from the default sources
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => AppConfig::load().context("failed to load configuration")?,
    };
    config.validate()?;
    Ok(config)
}

/// Load the configured route catalog, or the one at `path_override`
pub fn load_route_catalog(
    config: &AppConfig,
    path_override: Option<&Path>,
) -> anyhow::Result<RouteCatalog> {
    let path = path_override.unwrap_or(config.catalog.path.as_path());
    load_catalog(path).with_context(|| format!("failed to load route catalog {}", path.display()))
}

/// Build a resolver over the configured catalog
///
/// A geocoder is attached when geocoding is enabled; if it cannot be built
/// the resolver runs without one.
pub fn build_resolver(
    config: &AppConfig,
    strategy_override: Option<StrategySelection>,
) -> anyhow::Result<RouteResolver> {
    let catalog = load_route_catalog(config, None)?;
    let strategy = strategy_override.unwrap_or(config.resolver.strategy);

    let mut resolver = RouteResolver::new(Arc::new(catalog), config.resolver.geo_settings())
        .with_strategy(strategy);

    if let Some(geocoding) = config.geocoding.as_ref().filter(|g| g.enabled) {
        match GeocodingAdapter::from_config(geocoding) {
            Ok(adapter) => resolver = resolver.with_geocoder(Arc::new(adapter)),
            Err(e) => warn!(error = %e, "Geocoder unavailable, continuing without it"),
        }
    }

    info!(?resolver, "Resolver ready");
    Ok(resolver)
}
