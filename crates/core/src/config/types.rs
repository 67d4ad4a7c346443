use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::omdb::OmdbConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub website: WebsiteConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Storage backend type
    #[serde(default)]
    pub backend: StorageBackend,
    /// Path to the backing file
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
        }
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("data/movies.csv")
}

/// Available storage backends
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Csv,
    Json,
}

/// Website generation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebsiteConfig {
    /// Path to the HTML template carrying the placeholder tokens
    #[serde(default = "default_template_path")]
    pub template: PathBuf,
    /// Where the rendered page is written
    #[serde(default = "default_output_path")]
    pub output: PathBuf,
    /// Page title substituted into the template
    #[serde(default = "default_page_title")]
    pub title: String,
}

impl Default for WebsiteConfig {
    fn default() -> Self {
        Self {
            template: default_template_path(),
            output: default_output_path(),
            title: default_page_title(),
        }
    }
}

fn default_template_path() -> PathBuf {
    PathBuf::from("templates/index_template.html")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_page_title() -> String {
    "My Movie Website".to_string()
}
