//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates for {subject}: {latitude}, {longitude}")]
    InvalidCoordinates {
        subject: String,
        latitude: f64,
        longitude: f64,
    },

    /// Two entries share the same identifier
    #[error("Duplicate {entity_type}: {id}")]
    Duplicate { entity_type: String, id: String },

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Create a duplicate entry error
    pub fn duplicate(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_creates_correct_error() {
        let err = DomainError::not_found("School", "EMEF Rui Barbosa");
        match err {
            DomainError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "School");
                assert_eq!(id, "EMEF Rui Barbosa");
            },
            _ => unreachable!("Expected NotFound error"),
        }
    }

    #[test]
    fn duplicate_error_message() {
        let err = DomainError::duplicate("route", "Rota 14");
        assert_eq!(err.to_string(), "Duplicate route: Rota 14");
    }

    #[test]
    fn invalid_coordinates_message_names_subject() {
        let err = DomainError::InvalidCoordinates {
            subject: "stop 3 of Rota 12".to_string(),
            latitude: 95.0,
            longitude: 0.0,
        };
        assert!(err.to_string().contains("stop 3 of Rota 12"));
        assert!(err.to_string().contains("95"));
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("route name is empty".to_string());
        assert_eq!(err.to_string(), "Validation failed: route name is empty");
    }
}
