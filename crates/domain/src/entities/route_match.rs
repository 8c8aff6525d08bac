//! Outcome of a route assignment attempt

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Result of resolving a route for one student
///
/// "No match" is an expected, frequent outcome, so failures are plain values
/// the caller renders or falls back from.
pub type MatchResult = Result<RouteMatch, MatchFailure>;

/// Which matcher produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Waypoint-label matching over route itineraries
    Itinerary,
    /// Nearest-stop matching over GPS stops
    Geo,
}

impl StrategyKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Itinerary => "itinerary",
            Self::Geo => "geo",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much an operator should trust a suggested route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchConfidence {
    /// Literal waypoint labels of the route matched the student's data
    Exact,
    /// Inferred from measured distance to the nearest stops
    Proximity,
}

impl fmt::Display for MatchConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => f.write_str("exact"),
            Self::Proximity => f.write_str("proximity"),
        }
    }
}

/// The measurements that made a route qualify
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchEvidence {
    /// Pickup and drop-off waypoints found in the itinerary
    Itinerary {
        pickup_index: usize,
        pickup_label: String,
        dropoff_index: usize,
        dropoff_label: String,
    },
    /// Nearest stops to home and school
    Geo {
        home_distance_m: f64,
        home_stop_index: usize,
        school_distance_m: f64,
        school_stop_index: usize,
        school_name: String,
    },
}

/// A suggested route with its justification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMatch {
    pub route_name: String,
    pub justification: String,
    pub strategy: StrategyKind,
    pub confidence: MatchConfidence,
    pub evidence: MatchEvidence,
}

impl RouteMatch {
    /// Match found by waypoint labels
    #[must_use]
    pub fn from_itinerary(
        route_name: impl Into<String>,
        pickup_index: usize,
        pickup_label: impl Into<String>,
        dropoff_index: usize,
        dropoff_label: impl Into<String>,
    ) -> Self {
        let pickup_label = pickup_label.into();
        let dropoff_label = dropoff_label.into();
        Self {
            route_name: route_name.into(),
            justification: format!("Passes {pickup_label} before reaching {dropoff_label}"),
            strategy: StrategyKind::Itinerary,
            confidence: MatchConfidence::Exact,
            evidence: MatchEvidence::Itinerary {
                pickup_index,
                pickup_label,
                dropoff_index,
                dropoff_label,
            },
        }
    }

    /// Match found by stop proximity
    ///
    /// Distances are kept unrounded in the evidence; only the justification
    /// text shows whole meters.
    #[must_use]
    pub fn from_geo(
        route_name: impl Into<String>,
        school_name: impl Into<String>,
        home_distance_m: f64,
        home_stop_index: usize,
        school_distance_m: f64,
        school_stop_index: usize,
    ) -> Self {
        let school_name = school_name.into();
        Self {
            route_name: route_name.into(),
            justification: format!(
                "Boarding at {:.0}m from home. Correct direction to {school_name}.",
                home_distance_m.round()
            ),
            strategy: StrategyKind::Geo,
            confidence: MatchConfidence::Proximity,
            evidence: MatchEvidence::Geo {
                home_distance_m,
                home_stop_index,
                school_distance_m,
                school_stop_index,
                school_name,
            },
        }
    }
}

/// Why no route could be suggested
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "error_type")]
pub enum MatchFailure {
    /// No itinerary visits the neighborhood before the school
    #[error("no compatible route")]
    #[serde(rename = "NO_COMPATIBLE_ROUTE")]
    NoCompatibleRoute,

    /// The destination school has no registered coordinates
    #[error("school location unknown")]
    #[serde(rename = "SCHOOL_NOT_FOUND")]
    SchoolLocationUnknown { school: String },

    /// No route has a stop near home that comes before a stop near the school
    #[error("no route found that passes home before school")]
    #[serde(rename = "NO_DIRECTIONAL_ROUTE")]
    NoDirectionalRoute {
        /// Closest distance from home to any stop of any route, for diagnostics
        closest_home_distance_m: Option<f64>,
    },

    /// Geo matching was requested but the address could not be located
    #[error("student address could not be located")]
    #[serde(rename = "LOCATION_UNAVAILABLE")]
    LocationUnavailable,
}

impl MatchFailure {
    /// Stable machine-readable code
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoCompatibleRoute => "NO_COMPATIBLE_ROUTE",
            Self::SchoolLocationUnknown { .. } => "SCHOOL_NOT_FOUND",
            Self::NoDirectionalRoute { .. } => "NO_DIRECTIONAL_ROUTE",
            Self::LocationUnavailable => "LOCATION_UNAVAILABLE",
        }
    }

    /// Human-readable reason
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// What the operator should do next
    ///
    /// A missing school is a configuration gap, not a geographic mismatch,
    /// so it gets a different instruction.
    #[must_use]
    pub const fn operator_hint(&self) -> &'static str {
        match self {
            Self::NoCompatibleRoute | Self::NoDirectionalRoute { .. } => {
                "try manual route assignment"
            },
            Self::SchoolLocationUnknown { .. } => "register this school's coordinates",
            Self::LocationUnavailable => "check street and number, or assign the route manually",
        }
    }

    /// Whether the failure points at missing configuration data
    #[must_use]
    pub const fn is_configuration_gap(&self) -> bool {
        matches!(self, Self::SchoolLocationUnknown { .. })
    }
}
