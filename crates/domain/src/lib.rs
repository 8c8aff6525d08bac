//! Domain layer for SchoolPass
//!
//! Contains the route tables, school coordinates, addresses and match
//! outcomes that the route resolver works with, plus the text normalization
//! shared by every name comparison. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod text;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use text::normalize_text;
pub use value_objects::*;
