//! Nearest-stop route matching with directionality

use domain::{
    GeoLocation, MatchFailure, MatchResult, Route, RouteCatalog, RouteMatch, SchoolDirectory,
    StrategyKind,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{MatchQuery, RouteMatchStrategy};

/// Default walking radius from home to a boarding stop, in meters
pub const DEFAULT_MAX_HOME_DISTANCE_M: f64 = 600.0;

/// Default radius from the school to the stop that serves it, in meters
///
/// Wider than the home radius: the school address is exact, while the stop
/// only stands for "the school area".
pub const DEFAULT_MAX_SCHOOL_DISTANCE_M: f64 = 800.0;

/// Distance thresholds for [`GeoMatcher`] (both inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoMatcherSettings {
    /// Maximum distance from home to the nearest stop of a route
    #[serde(default = "default_max_home_distance_m")]
    pub max_home_distance_m: f64,
    /// Maximum distance from the school to the nearest stop of a route
    #[serde(default = "default_max_school_distance_m")]
    pub max_school_distance_m: f64,
}

const fn default_max_home_distance_m() -> f64 {
    DEFAULT_MAX_HOME_DISTANCE_M
}

const fn default_max_school_distance_m() -> f64 {
    DEFAULT_MAX_SCHOOL_DISTANCE_M
}

impl Default for GeoMatcherSettings {
    fn default() -> Self {
        Self {
            max_home_distance_m: DEFAULT_MAX_HOME_DISTANCE_M,
            max_school_distance_m: DEFAULT_MAX_SCHOOL_DISTANCE_M,
        }
    }
}

impl GeoMatcherSettings {
    /// Override the home radius
    #[must_use]
    pub const fn with_max_home_distance(mut self, meters: f64) -> Self {
        self.max_home_distance_m = meters;
        self
    }

    /// Validate the thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if a radius is not a positive finite number.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("max_home_distance_m", self.max_home_distance_m),
            ("max_school_distance_m", self.max_school_distance_m),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be a positive number of meters"));
            }
        }
        Ok(())
    }
}

/// The stop of a route closest to some point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestStop {
    /// Position of the stop in the route's visiting order
    pub index: usize,
    /// Haversine distance in meters, unrounded
    pub distance_m: f64,
}

/// Closest stop to `point`; ties go to the lowest index
///
/// Returns `None` for an empty stop list.
#[must_use]
pub fn nearest_stop(stops: &[GeoLocation], point: &GeoLocation) -> Option<NearestStop> {
    let mut best = NearestStop {
        index: 0,
        distance_m: f64::INFINITY,
    };

    for (index, stop) in stops.iter().enumerate() {
        let distance_m = point.distance_meters(stop);
        if distance_m < best.distance_m {
            best = NearestStop { index, distance_m };
        }
    }

    best.distance_m.is_finite().then_some(best)
}

/// How one route relates to a student's home and school
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteAssessment {
    /// Stop closest to home
    pub home: NearestStop,
    /// Stop closest to the school
    pub school: NearestStop,
}

impl RouteAssessment {
    /// Home stop visited strictly before the school stop
    #[must_use]
    pub const fn is_correct_direction(&self) -> bool {
        self.home.index < self.school.index
    }
}

/// Picks the route whose boarding stop is closest to the student's home
///
/// A route qualifies when its nearest stop to home is within
/// `max_home_distance_m`, its nearest stop to the school is within
/// `max_school_distance_m`, and the home stop comes before the school stop.
/// Among qualifying routes the smallest home distance wins; on an exact tie
/// the earlier route in table order is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoMatcher {
    settings: GeoMatcherSettings,
}

impl GeoMatcher {
    #[must_use]
    pub const fn new(settings: GeoMatcherSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &GeoMatcherSettings {
        &self.settings
    }

    /// Measure a route against home and school; `None` if it has no stops
    #[must_use]
    pub fn assess_route(
        &self,
        route: &Route,
        home: &GeoLocation,
        school: &GeoLocation,
    ) -> Option<RouteAssessment> {
        Some(RouteAssessment {
            home: nearest_stop(route.stops(), home)?,
            school: nearest_stop(route.stops(), school)?,
        })
    }

    /// Whether an assessment satisfies both radii and the direction rule
    #[must_use]
    pub fn qualifies(&self, assessment: &RouteAssessment) -> bool {
        assessment.home.distance_m <= self.settings.max_home_distance_m
            && assessment.school.distance_m <= self.settings.max_school_distance_m
            && assessment.is_correct_direction()
    }

    /// Find the best route from `home` to the named school
    ///
    /// An unregistered school fails immediately, before any distance is
    /// computed.
    pub fn match_route(
        &self,
        home: &GeoLocation,
        routes: &[Route],
        schools: &SchoolDirectory,
        school_name: &str,
    ) -> MatchResult {
        let Some(school) = schools.get(school_name) else {
            debug!(school = %school_name, "School has no registered location");
            return Err(MatchFailure::SchoolLocationUnknown {
                school: school_name.trim().to_string(),
            });
        };

        let mut best: Option<(&Route, RouteAssessment)> = None;
        let mut closest_home_m = f64::INFINITY;

        for route in routes.iter().filter(|route| route.has_stops()) {
            let Some(assessment) = self.assess_route(route, home, &school.location) else {
                continue;
            };
            closest_home_m = closest_home_m.min(assessment.home.distance_m);

            if !self.qualifies(&assessment) {
                trace!(
                    route = route.name(),
                    home_m = assessment.home.distance_m,
                    school_m = assessment.school.distance_m,
                    home_stop = assessment.home.index,
                    school_stop = assessment.school.index,
                    "Route does not qualify"
                );
                continue;
            }

            let is_better = best.as_ref().is_none_or(|(_, current)| {
                assessment.home.distance_m < current.home.distance_m
            });
            if is_better {
                best = Some((route, assessment));
            }
        }

        let Some((route, assessment)) = best else {
            debug!(school = %school.name, closest_home_m, "No route passes home before school");
            return Err(MatchFailure::NoDirectionalRoute {
                closest_home_distance_m: closest_home_m.is_finite().then_some(closest_home_m),
            });
        };

        debug!(
            route = route.name(),
            home_m = assessment.home.distance_m,
            school_m = assessment.school.distance_m,
            "Geo match"
        );

        Ok(RouteMatch::from_geo(
            route.name(),
            &school.name,
            assessment.home.distance_m,
            assessment.home.index,
            assessment.school.distance_m,
            assessment.school.index,
        ))
    }
}

impl RouteMatchStrategy for GeoMatcher {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Geo
    }

    fn find_route(&self, catalog: &RouteCatalog, query: &MatchQuery<'_>) -> MatchResult {
        let Some(home) = query.home else {
            return Err(MatchFailure::LocationUnavailable);
        };
        self.match_route(&home, catalog.routes(), catalog.schools(), query.school)
    }
}
