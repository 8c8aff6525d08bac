//! Immutable route and school tables

use std::collections::HashSet;

use crate::entities::{Route, SchoolDirectory};
use crate::errors::DomainError;

/// Routes plus school coordinates, loaded once at start-up
///
/// Never mutated after construction; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    routes: Vec<Route>,
    schools: SchoolDirectory,
}

impl RouteCatalog {
    /// Build a catalog, rejecting duplicate route names
    ///
    /// Route order is preserved; it decides ties in both matchers.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Duplicate` if two routes share a name.
    pub fn new(routes: Vec<Route>, schools: SchoolDirectory) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(routes.len());
        for route in &routes {
            if !seen.insert(route.name()) {
                return Err(DomainError::duplicate("route", route.name()));
            }
        }

        Ok(Self { routes, schools })
    }

    /// Routes in table order
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// School coordinate table
    #[must_use]
    pub const fn schools(&self) -> &SchoolDirectory {
        &self.schools
    }

    /// Whether any route carries GPS stops (the geo matcher has data to use)
    #[must_use]
    pub fn has_stop_data(&self) -> bool {
        self.routes.iter().any(Route::has_stops)
    }

    /// Whether any route carries a waypoint itinerary
    #[must_use]
    pub fn has_itinerary_data(&self) -> bool {
        self.routes.iter().any(Route::has_itinerary)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
