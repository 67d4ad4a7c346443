//! Testing utilities and mock implementations.
//!
//! Provides a mock metadata provider so the interactive command flow can
//! be exercised end to end without network access.

mod mock_metadata;

pub use mock_metadata::MockMetadataProvider;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::library::Rating;
    use crate::omdb::MovieFacts;

    /// Build movie facts the way a successful OMDb lookup would.
    pub fn movie_facts(title: &str, year: &str, rating: &str, poster: &str) -> MovieFacts {
        MovieFacts {
            title: title.to_string(),
            year: year.to_string(),
            rating: Rating::from_input(rating),
            poster: poster.to_string(),
        }
    }
}
