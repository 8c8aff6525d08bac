//! Student home address as typed by the operator

use serde::{Deserialize, Serialize};

/// Free-text home address of a student
///
/// Nothing here is validated for existence. The street is only used to build
/// a geocoding search string; neither route matcher looks at it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressQuery {
    /// Street name (e.g. "Av. Paraguassú")
    #[serde(default)]
    pub street: String,
    /// House number
    #[serde(default)]
    pub number: String,
    /// Neighborhood ("bairro")
    #[serde(default)]
    pub neighborhood: String,
    /// City
    #[serde(default)]
    pub city: String,
    /// State (two-letter code)
    #[serde(default)]
    pub state: String,
}

impl AddressQuery {
    /// Create an address with street, number and neighborhood; city and state
    /// stay empty and are filled from defaults when geocoding
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        neighborhood: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number: number.into(),
            neighborhood: neighborhood.into(),
            ..Self::default()
        }
    }

    /// Only a neighborhood, as used by the itinerary matcher
    #[must_use]
    pub fn neighborhood_only(neighborhood: impl Into<String>) -> Self {
        Self {
            neighborhood: neighborhood.into(),
            ..Self::default()
        }
    }

    /// Set the city
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Set the state
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Whether there is enough text to attempt geocoding (a street is required)
    #[must_use]
    pub fn is_geocodable(&self) -> bool {
        !self.street.trim().is_empty()
    }

    /// Build a single-line search string such as
    /// `"Rua X, 123, Bairro Y, Imbé, RS, Brazil"`
    ///
    /// Empty city/state fall back to the supplied defaults; blank parts are
    /// skipped so no dangling separators appear.
    #[must_use]
    pub fn to_search_string(&self, default_city: &str, default_state: &str, country: &str) -> String {
        let city = non_blank_or(&self.city, default_city);
        let state = non_blank_or(&self.state, default_state);

        [
            self.street.as_str(),
            self.number.as_str(),
            self.neighborhood.as_str(),
            city,
            state,
            country,
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_string_uses_defaults() {
        let address = AddressQuery::new("Av. Paraguassú", "1234", "Centro");
        assert_eq!(
            address.to_search_string("Imbé", "RS", "Brazil"),
            "Av. Paraguassú, 1234, Centro, Imbé, RS, Brazil"
        );
    }

    #[test]
    fn search_string_prefers_explicit_city() {
        let address = AddressQuery::new("Rua A", "", "Mariluz")
            .with_city("Tramandaí")
            .with_state("RS");
        assert_eq!(
            address.to_search_string("Imbé", "SC", "Brazil"),
            "Rua A, Mariluz, Tramandaí, RS, Brazil"
        );
    }

    #[test]
    fn geocodable_requires_street() {
        assert!(AddressQuery::new("Rua A", "", "").is_geocodable());
        assert!(!AddressQuery::new("   ", "12", "Centro").is_geocodable());
        assert!(!AddressQuery::neighborhood_only("Mariluz").is_geocodable());
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let address: AddressQuery =
            serde_json::from_str(r#"{"neighborhood": "Nordeste"}"#).expect("deserialize");
        assert_eq!(address.neighborhood, "Nordeste");
        assert!(address.street.is_empty());
    }
}
