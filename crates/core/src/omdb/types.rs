//! Types for the metadata provider.

use crate::library::Rating;

/// Fallback poster shown when the provider has none.
pub const NO_POSTER_URL: &str = "https://via.placeholder.com/100x150?text=No+Poster";

/// Facts about a movie as resolved by the metadata provider.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieFacts {
    /// Canonical title as known upstream.
    pub title: String,
    /// Release year, kept as text (OMDb returns ranges like "2008-2013").
    pub year: String,
    /// Rating; `Text("N/A")` when the provider has none.
    pub rating: Rating,
    /// Poster URL, already defaulted to [`NO_POSTER_URL`] when missing.
    pub poster: String,
}
