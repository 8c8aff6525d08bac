//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Route-matching outcomes are not errors; see [`domain::MatchFailure`].
/// Geocoding failures never surface here either, the port reports them as
/// a missing location.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}
