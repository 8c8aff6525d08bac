//! Application services - Use case implementations

pub mod route_matching;
mod route_resolver;

pub use route_matching::{
    GeoMatcher, GeoMatcherSettings, ItineraryMatcher, MatchQuery, RouteMatchStrategy,
};
pub use route_resolver::{RouteResolver, StrategySelection, StudentRouteRequest};
