//! Address geocoding for SchoolPass
//!
//! Resolves free-form addresses to coordinates through the
//! [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).
//!
//! [`GeocodingClient`] defines the interface, implemented by
//! [`NominatimGeocodingClient`], which honours the Nominatim usage policy
//! (at most one request per second, identifying User-Agent) and caches
//! results.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
//!
//! let client = NominatimGeocodingClient::new(&NominatimConfig::default())?;
//! let home = client
//!     .geocode("Rua das Gaivotas, 120, Mariluz, Imbé, RS, Brazil")
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, NominatimGeocodingClient};
pub use config::NominatimConfig;
pub use error::GeocodingError;
