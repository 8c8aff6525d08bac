//! Route catalog loading
//!
//! Reads the route table and school directory from a TOML or JSON file and
//! validates it into a [`RouteCatalog`].
//!
//! ```toml
//! [[routes]]
//! name = "Rota 14"
//! itinerary = ["Nordeste", "Mariluz", "EMEF Rui Barbosa"]
//! stops = [
//!     { latitude = -29.9630, longitude = -50.1210 },
//!     { latitude = -29.9751, longitude = -50.1299 },
//! ]
//!
//! [schools]
//! "EMEF Rui Barbosa" = { latitude = -29.9802, longitude = -50.1337 }
//! ```

mod file;

use std::path::{Path, PathBuf};

use domain::{DomainError, RouteCatalog};
use thiserror::Error;
use tracing::{debug, info, instrument};

use file::CatalogFile;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        /// Catalog path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file extension is neither `.toml` nor `.json`
    #[error("Unsupported catalog format for {}, expected .toml or .json", path.display())]
    UnsupportedFormat {
        /// Catalog path
        path: PathBuf,
    },

    /// The file is not valid TOML/JSON or does not have the catalog shape
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// The content parsed but violates a catalog rule
    #[error("Invalid catalog: {0}")]
    Invalid(#[from] DomainError),
}

/// Serialization format of a catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Detect the format from the file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Load and validate a catalog file
///
/// # Errors
///
/// Returns [`CatalogError`] if the file cannot be read, parsed or validated.
#[instrument]
pub fn load_catalog(path: &Path) -> Result<RouteCatalog, CatalogError> {
    let format = CatalogFormat::from_path(path).ok_or_else(|| CatalogError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&contents, format)?;
    info!(
        path = %path.display(),
        routes = catalog.routes().len(),
        schools = catalog.schools().len(),
        "Route catalog loaded"
    );
    Ok(catalog)
}

/// Parse and validate catalog text
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] for malformed text and
/// [`CatalogError::Invalid`] for rule violations.
pub fn parse_catalog(contents: &str, format: CatalogFormat) -> Result<RouteCatalog, CatalogError> {
    let file: CatalogFile = match format {
        CatalogFormat::Toml => {
            toml::from_str(contents).map_err(|e| CatalogError::Parse(e.to_string()))?
        },
        CatalogFormat::Json => {
            serde_json::from_str(contents).map_err(|e| CatalogError::Parse(e.to_string()))?
        },
    };

    debug!(
        routes = file.routes.len(),
        schools = file.schools.len(),
        "Catalog parsed"
    );
    Ok(file.into_catalog()?)
}
