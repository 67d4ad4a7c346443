//! Mock metadata provider for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::omdb::{MetadataProvider, MovieFacts, OmdbError};

/// Mock implementation of the MetadataProvider trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable movie facts, matched case-insensitively by title
/// - Track queries for assertions
/// - Simulate failures
#[derive(Debug, Default)]
pub struct MockMetadataProvider {
    /// Movie facts by lowercase title.
    movies: Arc<RwLock<HashMap<String, MovieFacts>>>,
    /// Recorded lookup queries.
    queries: Arc<RwLock<Vec<String>>>,
    /// If set, the next lookup fails with this error.
    next_error: Arc<RwLock<Option<OmdbError>>>,
}

impl MockMetadataProvider {
    /// Create a new empty mock provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register facts to be returned for their title.
    pub async fn add_movie(&self, facts: MovieFacts) {
        self.movies
            .write()
            .await
            .insert(facts.title.to_lowercase(), facts);
    }

    /// Make the next lookup fail with the given error.
    pub async fn set_next_error(&self, error: OmdbError) {
        *self.next_error.write().await = Some(error);
    }

    /// All queries seen so far.
    pub async fn queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }
}

#[async_trait]
impl MetadataProvider for MockMetadataProvider {
    async fn fetch_by_title(&self, title: &str) -> Result<MovieFacts, OmdbError> {
        self.queries.write().await.push(title.to_string());

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        self.movies
            .read()
            .await
            .get(&title.to_lowercase())
            .cloned()
            .ok_or_else(|| OmdbError::NotFound(title.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_mock_returns_registered_facts() {
        let provider = MockMetadataProvider::new();
        provider
            .add_movie(fixtures::movie_facts("Heat", "1995", "8.3", "http://p"))
            .await;

        let facts = provider.fetch_by_title("heat").await.unwrap();
        assert_eq!(facts.title, "Heat");
        assert_eq!(provider.queries().await, vec!["heat".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_unknown_title_is_not_found() {
        let provider = MockMetadataProvider::new();
        let err = provider.fetch_by_title("Ghost").await.unwrap_err();
        assert!(matches!(err, OmdbError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_mock_next_error_fires_once() {
        let provider = MockMetadataProvider::new();
        provider
            .add_movie(fixtures::movie_facts("Heat", "1995", "8.3", ""))
            .await;
        provider
            .set_next_error(OmdbError::Api {
                status: 503,
                message: "unavailable".to_string(),
            })
            .await;

        assert!(provider.fetch_by_title("Heat").await.is_err());
        assert!(provider.fetch_by_title("Heat").await.is_ok());
    }
}
