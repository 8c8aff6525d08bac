//! Route resolver facade
//!
//! Single entry point for route assignment. Chooses between the itinerary
//! and geo matchers, obtains coordinates through the geocoding port when
//! needed, and returns a [`MatchResult`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use domain::{AddressQuery, GeoLocation, MatchResult, RouteCatalog, StrategyKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::ports::GeocodingPort;
use crate::services::route_matching::{
    GeoMatcher, GeoMatcherSettings, ItineraryMatcher, MatchQuery, RouteMatchStrategy,
};

/// How the resolver picks a matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategySelection {
    /// Geo matching when stop data and coordinates are both available,
    /// itinerary matching otherwise
    #[default]
    Auto,
    /// Always match on itinerary labels
    Itinerary,
    /// Always match on GPS stops
    Geo,
}

impl fmt::Display for StrategySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Itinerary => write!(f, "itinerary"),
            Self::Geo => write!(f, "geo"),
        }
    }
}

impl FromStr for StrategySelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "itinerary" | "text" => Ok(Self::Itinerary),
            "geo" | "gps" => Ok(Self::Geo),
            _ => Err(format!(
                "Invalid strategy: {s}. Use 'auto', 'itinerary' or 'geo'"
            )),
        }
    }
}

/// One student's route request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRouteRequest {
    /// Home address
    #[serde(default)]
    pub address: AddressQuery,
    /// Destination school
    pub school: String,
    /// Known home coordinates; skips geocoding when present
    #[serde(default)]
    pub coordinates: Option<GeoLocation>,
}

impl StudentRouteRequest {
    #[must_use]
    pub fn new(address: AddressQuery, school: impl Into<String>) -> Self {
        Self {
            address,
            school: school.into(),
            coordinates: None,
        }
    }

    #[must_use]
    pub const fn with_coordinates(mut self, coordinates: GeoLocation) -> Self {
        self.coordinates = Some(coordinates);
        self
    }
}

/// Resolves a bus route for a student
///
/// Holds the immutable route catalog and both matchers. Safe to share across
/// tasks; every call is independent.
pub struct RouteResolver {
    catalog: Arc<RouteCatalog>,
    itinerary: ItineraryMatcher,
    geo: GeoMatcher,
    selection: StrategySelection,
    geocoder: Option<Arc<dyn GeocodingPort>>,
}

impl fmt::Debug for RouteResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteResolver")
            .field("routes", &self.catalog.routes().len())
            .field("schools", &self.catalog.schools().len())
            .field("selection", &self.selection)
            .field("geo", &self.geo)
            .field("geocoder", &self.geocoder.is_some())
            .finish()
    }
}

impl RouteResolver {
    /// Create a resolver over a catalog, in `auto` mode without a geocoder
    #[must_use]
    pub fn new(catalog: Arc<RouteCatalog>, settings: GeoMatcherSettings) -> Self {
        Self {
            catalog,
            itinerary: ItineraryMatcher::new(),
            geo: GeoMatcher::new(settings),
            selection: StrategySelection::default(),
            geocoder: None,
        }
    }

    /// Use a geocoder to locate students without known coordinates
    #[must_use]
    pub fn with_geocoder(mut self, geocoder: Arc<dyn GeocodingPort>) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    /// Set the strategy selection mode
    #[must_use]
    pub const fn with_strategy(mut self, selection: StrategySelection) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn selection(&self) -> StrategySelection {
        self.selection
    }

    /// Resolve a route for one student
    #[instrument(skip(self, request), fields(school = %request.school, selection = %self.selection))]
    pub async fn resolve_route(&self, request: &StudentRouteRequest) -> MatchResult {
        let home = match self.selection {
            StrategySelection::Itinerary => None,
            StrategySelection::Geo => self.locate(request).await,
            StrategySelection::Auto if !self.catalog.has_stop_data() => {
                debug!("Catalog has no stop data, using itinerary matching");
                None
            },
            StrategySelection::Auto => self.locate(request).await,
        };

        self.resolve_with_home(request, home)
    }

    /// Resolve routes for several students, preserving input order
    pub async fn resolve_batch(&self, requests: &[StudentRouteRequest]) -> Vec<MatchResult> {
        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            results.push(self.resolve_route(request).await);
        }

        let found = results.iter().filter(|r| r.is_ok()).count();
        info!(total = requests.len(), found, "Batch resolution finished");
        results
    }

    /// Resolve with coordinates already settled; no I/O
    ///
    /// `home` is used only when the selection allows geo matching.
    pub fn resolve_with_home(&self, request: &StudentRouteRequest, home: Option<GeoLocation>) -> MatchResult {
        let kind = self.choose(home.is_some());
        let mut query = MatchQuery::new(&request.address, &request.school);
        if let Some(home) = home {
            query = query.with_home(home);
        }

        let strategy = self.strategy(kind);
        debug!(strategy = %strategy.kind(), has_home = home.is_some(), "Dispatching route match");
        strategy.find_route(&self.catalog, &query)
    }

    /// Which matcher handles a request, given whether coordinates are known
    #[must_use]
    pub fn choose(&self, has_home: bool) -> StrategyKind {
        match self.selection {
            StrategySelection::Itinerary => StrategyKind::Itinerary,
            StrategySelection::Geo => StrategyKind::Geo,
            StrategySelection::Auto if has_home && self.catalog.has_stop_data() => StrategyKind::Geo,
            StrategySelection::Auto => StrategyKind::Itinerary,
        }
    }

    fn strategy(&self, kind: StrategyKind) -> &dyn RouteMatchStrategy {
        match kind {
            StrategyKind::Itinerary => &self.itinerary,
            StrategyKind::Geo => &self.geo,
        }
    }

    /// Coordinates for the student: supplied ones first, then the geocoder
    async fn locate(&self, request: &StudentRouteRequest) -> Option<GeoLocation> {
        if let Some(coordinates) = request.coordinates {
            return Some(coordinates);
        }

        let Some(geocoder) = &self.geocoder else {
            debug!("No geocoder configured");
            return None;
        };

        if !request.address.is_geocodable() {
            debug!("Address too sparse to geocode");
            return None;
        }

        let location = geocoder.geocode(&request.address).await;
        if location.is_none() {
            info!(street = %request.address.street, "Address could not be geocoded");
        }
        location
    }
}
