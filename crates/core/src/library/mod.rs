//! Movie library - flat-file persistence for the catalog.
//!
//! Two backends implement the same contract: a delimited-text file (CSV)
//! and a structured document (JSON). Every operation loads the whole
//! collection from disk and every mutation rewrites the whole file; there
//! is no locking and no atomic write, so concurrent external writers can
//! race (known limitation).

mod csv;
mod json;
mod types;

pub use csv::CsvLibrary;
pub use json::JsonLibrary;
pub use types::*;

use crate::config::{StorageBackend, StorageConfig};

/// Trait for movie library storage.
pub trait MovieLibrary: Send + Sync {
    /// Load the full collection.
    ///
    /// A missing backing file yields an empty collection; a file that
    /// exists but cannot be parsed as the backend's format is an error.
    fn list(&self) -> Result<MovieCollection, LibraryError>;

    /// Insert or overwrite the record for `title`, then persist.
    ///
    /// Fields are stored as given; rating, year and poster are never
    /// validated here.
    fn add(
        &self,
        title: &str,
        rating: Option<Rating>,
        year: &str,
        poster: &str,
    ) -> Result<(), LibraryError>;

    /// Remove a record, matching the title case-insensitively.
    ///
    /// An absent title fails with `LibraryError::NotFound` and leaves the
    /// backing file untouched.
    fn delete(&self, title: &str) -> Result<(), LibraryError>;

    /// Overwrite only the supplied fields of a record, matching the title
    /// case-insensitively, then persist.
    fn update(
        &self,
        title: &str,
        rating: Option<Rating>,
        year: Option<&str>,
    ) -> Result<(), LibraryError>;
}

/// Create the library backend selected by configuration.
pub fn create_library(config: &StorageConfig) -> Box<dyn MovieLibrary> {
    match config.backend {
        StorageBackend::Csv => Box::new(CsvLibrary::new(&config.path)),
        StorageBackend::Json => Box::new(JsonLibrary::new(&config.path)),
    }
}
