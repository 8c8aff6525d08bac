//! Geocoding port
//!
//! Turns an operator-typed address into coordinates. Adapters in the
//! infrastructure layer implement this port on top of a geocoding API.

use async_trait::async_trait;
use domain::{AddressQuery, GeoLocation};
#[cfg(test)]
use mockall::automock;

/// Port for address geocoding
///
/// Best effort and single result. Any failure (address not found, network
/// error, provider error) is reported as `None`: the resolver treats it as
/// "cannot use geo matching for this student", never as an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Locate an address
    async fn geocode(&self, address: &AddressQuery) -> Option<GeoLocation>;
}
