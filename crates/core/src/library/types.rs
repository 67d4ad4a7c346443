//! Types for the movie library (flat-file record store).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A movie rating as stored in the library.
///
/// The JSON backend preserves whatever the file holds: numbers stay numbers
/// and text like `"N/A"` stays text. The CSV backend coerces anything that
/// does not parse as a number to an absent rating at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Value(f64),
    Text(String),
}

impl Rating {
    /// Build a rating from raw user or API input.
    ///
    /// Numeric input becomes `Value`, anything else is kept verbatim as
    /// `Text` (so `"N/A"` survives a JSON round-trip).
    pub fn from_input(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) => Rating::Value(v),
            Err(_) => Rating::Text(raw.trim().to_string()),
        }
    }

    /// The numeric value, if this rating parses as one.
    pub fn as_value(&self) -> Option<f64> {
        match self {
            Rating::Value(v) => Some(*v),
            Rating::Text(_) => None,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Value(v) => write!(f, "{}", v),
            Rating::Text(t) => write!(f, "{}", t),
        }
    }
}

/// One movie entry in the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Rating, absent when unknown or unparsable (CSV backend).
    pub rating: Option<Rating>,
    /// Release year, opaque text (never validated).
    pub year: String,
    /// Poster URL or empty string (never checked for reachability).
    pub poster: String,
}

impl MovieRecord {
    /// Rating as display text, `"N/A"` when absent.
    pub fn rating_display(&self) -> String {
        match &self.rating {
            Some(r) => r.to_string(),
            None => "N/A".to_string(),
        }
    }
}

/// The whole catalog, keyed by exact stored title. Titles are unique;
/// last write wins.
pub type MovieCollection = BTreeMap<String, MovieRecord>;

/// Resolve a stored title case-insensitively.
///
/// Both delete and update match this way; the stored key keeps its
/// original casing.
pub fn find_title<'a>(movies: &'a MovieCollection, title: &str) -> Option<&'a str> {
    let needle = title.to_lowercase();
    movies
        .keys()
        .find(|stored| stored.to_lowercase() == needle)
        .map(String::as_str)
}

/// Errors for library operations.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Movie '{0}' not found.")]
    NotFound(String),

    #[error("Failed to parse library file: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
