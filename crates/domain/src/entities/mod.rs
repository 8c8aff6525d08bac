//! Domain entities - Route tables and match outcomes

mod route;
mod route_catalog;
mod route_match;
mod school_directory;

pub use route::Route;
pub use route_catalog::RouteCatalog;
pub use route_match::{
    MatchConfidence, MatchEvidence, MatchFailure, MatchResult, RouteMatch, StrategyKind,
};
pub use school_directory::{SchoolDirectory, SchoolLocation};
