//! Route matching strategies
//!
//! Two interchangeable ways to pick a bus route for a student:
//!
//! - [`ItineraryMatcher`] compares the student's neighborhood and school with
//!   the waypoint labels of each route. Pure text, no I/O.
//! - [`GeoMatcher`] measures haversine distances from the student's home and
//!   the school to the GPS stops of each route.
//!
//! Both enforce the same invariant: the student boards before the bus
//! reaches the school. They can disagree on the same student, so the caller
//! picks one explicitly (see [`crate::services::RouteResolver`]).

mod geo;
mod itinerary;

use std::fmt;

use domain::{AddressQuery, GeoLocation, MatchResult, RouteCatalog, StrategyKind};

pub use geo::{
    DEFAULT_MAX_HOME_DISTANCE_M, DEFAULT_MAX_SCHOOL_DISTANCE_M, GeoMatcher, GeoMatcherSettings,
    NearestStop, RouteAssessment, nearest_stop,
};
pub use itinerary::ItineraryMatcher;

/// Everything a matcher may look at for one student
#[derive(Debug, Clone, Copy)]
pub struct MatchQuery<'a> {
    /// Home address; matchers ignore the street
    pub address: &'a AddressQuery,
    /// Destination school as typed
    pub school: &'a str,
    /// Home coordinates, when known
    pub home: Option<GeoLocation>,
}

impl<'a> MatchQuery<'a> {
    #[must_use]
    pub const fn new(address: &'a AddressQuery, school: &'a str) -> Self {
        Self {
            address,
            school,
            home: None,
        }
    }

    #[must_use]
    pub const fn with_home(mut self, home: GeoLocation) -> Self {
        self.home = Some(home);
        self
    }
}

/// A route assignment algorithm
///
/// Implementations are pure and reentrant: the catalog is read-only and no
/// state is kept between calls.
pub trait RouteMatchStrategy: Send + Sync + fmt::Debug {
    /// Which algorithm this is
    fn kind(&self) -> StrategyKind;

    /// Pick the best route for the query, or say why none fits
    fn find_route(&self, catalog: &RouteCatalog, query: &MatchQuery<'_>) -> MatchResult;
}
