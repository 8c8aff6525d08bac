//! School coordinate table

use std::collections::HashMap;

use serde::Serialize;

use crate::errors::DomainError;
use crate::text::normalize_text;
use crate::value_objects::GeoLocation;

/// A school and where it is
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchoolLocation {
    /// Display name as registered
    pub name: String,
    /// School coordinates
    pub location: GeoLocation,
}

/// Lookup table from school name to coordinates
///
/// Keys are normalized, so lookups ignore case, accents and surrounding
/// whitespace. Registration order is kept for listing.
#[derive(Debug, Clone, Default)]
pub struct SchoolDirectory {
    schools: Vec<SchoolLocation>,
    index: HashMap<String, usize>,
}

impl SchoolDirectory {
    /// Create an empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a school
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` for a blank name and
    /// `DomainError::Duplicate` if another school normalizes to the same key.
    pub fn insert(&mut self, name: impl Into<String>, location: GeoLocation) -> Result<(), DomainError> {
        let name = name.into().trim().to_string();
        let key = normalize_text(&name);
        if key.is_empty() {
            return Err(DomainError::ValidationError(
                "school name must not be empty".to_string(),
            ));
        }
        if self.index.contains_key(&key) {
            return Err(DomainError::duplicate("school", name));
        }

        self.index.insert(key, self.schools.len());
        self.schools.push(SchoolLocation { name, location });
        Ok(())
    }

    /// Look up a school by (unnormalized) name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchoolLocation> {
        self.index
            .get(&normalize_text(name))
            .and_then(|&i| self.schools.get(i))
    }

    /// Coordinates of a school, if registered
    #[must_use]
    pub fn location_of(&self, name: &str) -> Option<GeoLocation> {
        self.get(name).map(|school| school.location)
    }

    /// All schools in registration order
    pub fn iter(&self) -> impl Iterator<Item = &SchoolLocation> {
        self.schools.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }
}

impl TryFrom<Vec<(String, GeoLocation)>> for SchoolDirectory {
    type Error = DomainError;

    fn try_from(entries: Vec<(String, GeoLocation)>) -> Result<Self, Self::Error> {
        let mut directory = Self::new();
        for (name, location) in entries {
            directory.insert(name, location)?;
        }
        Ok(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rui_barbosa() -> GeoLocation {
        GeoLocation::new_unchecked(-29.9701, -50.1302)
    }

    #[test]
    fn lookup_ignores_case_and_accents() {
        let mut directory = SchoolDirectory::new();
        directory
            .insert("EMEI Vó Rosa", rui_barbosa())
            .expect("insert");

        assert!(directory.get("emei vo rosa").is_some());
        assert!(directory.get("  EMEI VÓ ROSA ").is_some());
        assert_eq!(
            directory.get("EMEI VO ROSA").map(|s| s.name.as_str()),
            Some("EMEI Vó Rosa")
        );
    }

    #[test]
    fn unknown_school_is_none() {
        let directory = SchoolDirectory::new();
        assert!(directory.location_of("Escola Inexistente").is_none());
        assert!(directory.is_empty());
    }

    #[test]
    fn duplicate_normalized_name_is_rejected() {
        let mut directory = SchoolDirectory::new();
        directory
            .insert("EMEF Rui Barbosa", rui_barbosa())
            .expect("insert");
        let err = directory
            .insert("emef rui barbosa", rui_barbosa())
            .unwrap_err();
        assert!(matches!(err, DomainError::Duplicate { .. }));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut directory = SchoolDirectory::new();
        assert!(directory.insert("   ", rui_barbosa()).is_err());
    }

    #[test]
    fn iteration_keeps_registration_order() {
        let directory = SchoolDirectory::try_from(vec![
            ("EMEF Rui Barbosa".to_string(), rui_barbosa()),
            ("EMEF Olavo Bilac".to_string(), rui_barbosa()),
        ])
        .expect("valid directory");
        let names: Vec<_> = directory.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["EMEF Rui Barbosa", "EMEF Olavo Bilac"]);
    }
}
