//! OMDb integration - resolves a movie title to release facts.
//!
//! The CLI uses this to enrich "add" with the real title, year, rating and
//! poster URL instead of asking the user to type everything in.

mod client;
mod types;

pub use client::{OmdbClient, OmdbConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when querying the metadata provider.
#[derive(Debug, Error)]
pub enum OmdbError {
    /// HTTP request failed (network error, timeout, bad URL).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider knows no movie by this title.
    #[error("Movie '{0}' not found")]
    NotFound(String),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Client not configured (missing API key, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for movie metadata providers.
///
/// The CLI treats every failure variant the same way: no record is added,
/// a diagnostic is printed and control returns to the menu.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch the best-effort match for a title.
    async fn fetch_by_title(&self, title: &str) -> Result<MovieFacts, OmdbError>;
}
