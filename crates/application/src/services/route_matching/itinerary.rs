//! Waypoint-label route matching

use domain::{
    MatchFailure, MatchResult, Route, RouteCatalog, RouteMatch, StrategyKind, normalize_text,
};
use tracing::{debug, trace};

use super::{MatchQuery, RouteMatchStrategy};

/// Matches a neighborhood and a school against route itineraries
///
/// For each route, the pickup is the first itinerary entry whose normalized
/// label contains the normalized neighborhood, and the drop-off the first
/// entry containing the normalized school. A route qualifies when both exist
/// and the pickup comes first. The first qualifying route in table order
/// wins.
///
/// Containment is substring-based, so "Mariluz" also matches
/// "Mariluz Norte" or "Mariluz Plano B"; whichever comes first in the
/// itinerary is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItineraryMatcher;

impl ItineraryMatcher {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Find the first route that passes the neighborhood before the school
    ///
    /// Routes without an itinerary are skipped. Blank neighborhood or school
    /// text never matches.
    pub fn match_route(&self, routes: &[Route], neighborhood: &str, school: &str) -> MatchResult {
        let neighborhood_key = normalize_text(neighborhood);
        let school_key = normalize_text(school);

        if neighborhood_key.is_empty() || school_key.is_empty() {
            debug!(%neighborhood, %school, "Neighborhood or school is blank");
            return Err(MatchFailure::NoCompatibleRoute);
        }

        let found = routes
            .iter()
            .filter(|route| route.has_itinerary())
            .find_map(|route| Self::match_itinerary(route, &neighborhood_key, &school_key));

        match found {
            Some(found) => {
                debug!(route = %found.route_name, %neighborhood, %school, "Itinerary match");
                Ok(found)
            },
            None => {
                debug!(%neighborhood, %school, "No itinerary passes neighborhood before school");
                Err(MatchFailure::NoCompatibleRoute)
            },
        }
    }

    fn match_itinerary(route: &Route, neighborhood_key: &str, school_key: &str) -> Option<RouteMatch> {
        let itinerary = route.itinerary();
        let pickup = first_entry_containing(itinerary, neighborhood_key)?;
        let dropoff = first_entry_containing(itinerary, school_key)?;

        if pickup >= dropoff {
            trace!(route = route.name(), pickup, dropoff, "Wrong direction");
            return None;
        }

        Some(RouteMatch::from_itinerary(
            route.name(),
            pickup,
            &itinerary[pickup],
            dropoff,
            &itinerary[dropoff],
        ))
    }
}

/// Index of the first label whose normalized text contains `key`
fn first_entry_containing(itinerary: &[String], key: &str) -> Option<usize> {
    itinerary
        .iter()
        .position(|label| normalize_text(label).contains(key))
}

impl RouteMatchStrategy for ItineraryMatcher {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Itinerary
    }

    fn find_route(&self, catalog: &RouteCatalog, query: &MatchQuery<'_>) -> MatchResult {
        self.match_route(catalog.routes(), &query.address.neighborhood, query.school)
    }
}
