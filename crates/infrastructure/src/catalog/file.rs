//! On-disk catalog shape

use std::collections::BTreeMap;

use domain::{DomainError, GeoLocation, Route, RouteCatalog, SchoolDirectory};
use serde::Deserialize;

use crate::config::GeoLocationConfig;

#[derive(Debug, Deserialize)]
pub(super) struct CatalogFile {
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
    #[serde(default)]
    pub schools: BTreeMap<String, GeoLocationConfig>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RouteEntry {
    pub name: String,
    #[serde(default)]
    pub itinerary: Vec<String>,
    #[serde(default)]
    pub stops: Vec<GeoLocationConfig>,
}

impl CatalogFile {
    pub(super) fn into_catalog(self) -> Result<RouteCatalog, DomainError> {
        let routes = self
            .routes
            .into_iter()
            .map(RouteEntry::into_route)
            .collect::<Result<Vec<_>, _>>()?;

        let schools = self
            .schools
            .into_iter()
            .map(|(name, location)| {
                let location = to_location(&location, || format!("school '{name}'"))?;
                Ok((name, location))
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        RouteCatalog::new(routes, SchoolDirectory::try_from(schools)?)
    }
}

impl RouteEntry {
    fn into_route(self) -> Result<Route, DomainError> {
        let stops = self
            .stops
            .iter()
            .enumerate()
            .map(|(i, stop)| to_location(stop, || format!("stop {i} of route '{}'", self.name)))
            .collect::<Result<Vec<_>, _>>()?;

        Route::new(self.name, self.itinerary, stops)
    }
}

fn to_location(
    config: &GeoLocationConfig,
    subject: impl FnOnce() -> String,
) -> Result<GeoLocation, DomainError> {
    config
        .to_geo_location()
        .ok_or_else(|| DomainError::InvalidCoordinates {
            subject: subject(),
            latitude: config.latitude,
            longitude: config.longitude,
        })
}
