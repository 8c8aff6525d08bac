//! Rendering of resolution results

use std::fmt::Write;

use domain::{MatchFailure, MatchResult, RouteCatalog, RouteMatch};
use serde::Serialize;

/// JSON shape of one resolution
#[derive(Debug, Serialize)]
pub struct ResolutionReport<'a> {
    /// Position in the batch input, when resolving a batch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub school: &'a str,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<&'a RouteMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct FailureReport<'a> {
    pub reason: String,
    pub hint: &'static str,
    #[serde(flatten)]
    pub detail: &'a MatchFailure,
}

impl<'a> ResolutionReport<'a> {
    pub fn new(index: Option<usize>, school: &'a str, result: &'a MatchResult) -> Self {
        match result {
            Ok(found) => Self {
                index,
                school,
                found: true,
                route: Some(found),
                failure: None,
            },
            Err(failure) => Self {
                index,
                school,
                found: false,
                route: None,
                failure: Some(FailureReport {
                    reason: failure.reason(),
                    hint: failure.operator_hint(),
                    detail: failure,
                }),
            },
        }
    }
}

/// One-line human-readable summary of a result
pub fn describe(result: &MatchResult) -> String {
    match result {
        Ok(found) => format!(
            "✅ {} ({}): {}",
            found.route_name, found.strategy, found.justification
        ),
        Err(failure) => {
            let mut line = format!("❌ {}", failure.reason());
            if let MatchFailure::NoDirectionalRoute {
                closest_home_distance_m: Some(distance),
            } = failure
            {
                let _ = write!(line, " (closest stop {:.0}m from home)", distance.round());
            }
            let _ = write!(line, "\n   👉 {}", failure.operator_hint());
            line
        },
    }
}

/// Catalog listing, one route per line
pub fn describe_routes(catalog: &RouteCatalog) -> Vec<String> {
    catalog
        .routes()
        .iter()
        .map(|route| {
            format!(
                "🚌 {:<12} {:>3} waypoints  {:>3} stops",
                route.name(),
                route.itinerary().len(),
                route.stops().len()
            )
        })
        .collect()
}
