//! OMDb API client.
//!
//! OMDb requires an API key for access; the free tier allows 1000
//! requests per day.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::library::Rating;

use super::types::{MovieFacts, NO_POSTER_URL};
use super::{MetadataProvider, OmdbError};

/// OMDb API client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OmdbConfig {
    /// OMDb API key (required for lookups).
    #[serde(default)]
    pub api_key: String,
    /// Base URL (default: https://www.omdbapi.com).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// OMDb API client.
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Create a new OMDb client.
    ///
    /// An empty API key is accepted here so the application can start
    /// without one; lookups then fail with `NotConfigured`.
    pub fn new(config: OmdbConfig) -> Result<Self, OmdbError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| "https://www.omdbapi.com".to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl MetadataProvider for OmdbClient {
    async fn fetch_by_title(&self, title: &str) -> Result<MovieFacts, OmdbError> {
        if self.api_key.is_empty() {
            return Err(OmdbError::NotConfigured(
                "OMDb API key is required (set omdb.api_key or CINELOG_OMDB__API_KEY)".to_string(),
            ));
        }

        debug!("OMDb title lookup: '{}'", title);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await?;

        let status = response.status();
        if status == 401 {
            return Err(OmdbError::NotConfigured(
                "Invalid OMDb API key".to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OmdbError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: OmdbResponse = response.json().await.map_err(|e| {
            OmdbError::Parse(format!("Failed to parse title lookup response: {}", e))
        })?;

        // OMDb reports "no match" inside a 200 body.
        if body.response != "True" {
            return Err(OmdbError::NotFound(title.to_string()));
        }

        body.try_into()
    }
}

// ============================================================================
// OMDb API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

impl TryFrom<OmdbResponse> for MovieFacts {
    type Error = OmdbError;

    fn try_from(r: OmdbResponse) -> Result<Self, Self::Error> {
        let title = r
            .title
            .ok_or_else(|| OmdbError::Parse("response is missing Title".to_string()))?;
        let year = r
            .year
            .ok_or_else(|| OmdbError::Parse("response is missing Year".to_string()))?;

        let rating = Rating::from_input(r.imdb_rating.as_deref().unwrap_or("N/A"));

        // OMDb uses the literal "N/A" for missing posters.
        let poster = match r.poster {
            Some(p) if !p.is_empty() && p != "N/A" => p,
            _ => NO_POSTER_URL.to_string(),
        };

        Ok(Self {
            title,
            year,
            rating,
            poster,
        })
    }
}
