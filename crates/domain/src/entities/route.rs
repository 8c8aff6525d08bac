//! School bus route

use serde::Serialize;

use crate::errors::DomainError;
use crate::value_objects::GeoLocation;

/// A named bus route
///
/// Both `itinerary` and `stops` are in visiting order along the physical
/// route. The position of an entry is what the matchers use to decide whether
/// a student boards before the bus reaches the school.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    name: String,
    itinerary: Vec<String>,
    stops: Vec<GeoLocation>,
}

impl Route {
    /// Create a validated route
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the name is blank, any
    /// itinerary label is blank, or the route has neither itinerary nor stops.
    pub fn new(
        name: impl Into<String>,
        itinerary: Vec<String>,
        stops: Vec<GeoLocation>,
    ) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::ValidationError(
                "route name must not be empty".to_string(),
            ));
        }

        if let Some(position) = itinerary.iter().position(|label| label.trim().is_empty()) {
            return Err(DomainError::ValidationError(format!(
                "route '{name}' has an empty itinerary entry at position {position}"
            )));
        }

        if itinerary.is_empty() && stops.is_empty() {
            return Err(DomainError::ValidationError(format!(
                "route '{name}' needs an itinerary or a list of stops"
            )));
        }

        Ok(Self {
            name,
            itinerary,
            stops,
        })
    }

    /// Route with a waypoint itinerary only
    ///
    /// # Errors
    ///
    /// See [`Route::new`].
    pub fn with_itinerary<I, S>(name: impl Into<String>, itinerary: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            itinerary.into_iter().map(Into::into).collect(),
            Vec::new(),
        )
    }

    /// Route with GPS stops only
    ///
    /// # Errors
    ///
    /// See [`Route::new`].
    pub fn with_stops(name: impl Into<String>, stops: Vec<GeoLocation>) -> Result<Self, DomainError> {
        Self::new(name, Vec::new(), stops)
    }

    /// Display identifier, e.g. "Rota 14"
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Waypoint labels in visiting order
    #[must_use]
    pub fn itinerary(&self) -> &[String] {
        &self.itinerary
    }

    /// GPS stops in visiting order
    #[must_use]
    pub fn stops(&self) -> &[GeoLocation] {
        &self.stops
    }

    #[must_use]
    pub fn has_itinerary(&self) -> bool {
        !self.itinerary.is_empty()
    }

    #[must_use]
    pub fn has_stops(&self) -> bool {
        !self.stops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn itinerary_route_keeps_order() {
        let route = Route::with_itinerary("Rota 14", ["Nordeste", "Mariluz", "Harmonia"])
            .expect("valid route");
        assert_eq!(route.name(), "Rota 14");
        assert_eq!(route.itinerary(), ["Nordeste", "Mariluz", "Harmonia"]);
        assert!(route.has_itinerary());
        assert!(!route.has_stops());
    }

    #[test]
    fn name_is_trimmed() {
        let route = Route::with_itinerary("  Rota 12 ", ["Centro"]).expect("valid route");
        assert_eq!(route.name(), "Rota 12");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(Route::with_itinerary("  ", ["Centro"]).is_err());
    }

    #[test]
    fn blank_itinerary_entry_is_rejected() {
        let err = Route::with_itinerary("Rota 12", ["Centro", " "]).unwrap_err();
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn route_without_data_is_rejected() {
        assert!(Route::new("Rota 99", Vec::new(), Vec::new()).is_err());
    }

    #[test]
    fn stops_only_route() {
        let route = Route::with_stops(
            "Rota GPS",
            vec![GeoLocation::new_unchecked(-29.97, -50.12)],
        )
        .expect("valid route");
        assert!(route.has_stops());
        assert!(!route.has_itinerary());
    }
}
