//! Structured-document library backend.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use super::types::{find_title, LibraryError, MovieCollection, MovieRecord, Rating};

/// Movie library backed by a pretty-printed JSON document mapping each
/// title to `{rating, year, poster}`.
///
/// Unlike the CSV backend, raw rating values are preserved verbatim: a
/// stored `"N/A"` loads back as the literal text.
pub struct JsonLibrary {
    path: PathBuf,
}

impl JsonLibrary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<MovieCollection, LibraryError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("JSON library file {:?} does not exist, starting empty", self.path);
                return Ok(MovieCollection::new());
            }
            Err(e) => return Err(LibraryError::Io(e)),
        };

        serde_json::from_str(&raw).map_err(|e| LibraryError::Parse(e.to_string()))
    }

    fn save(&self, movies: &MovieCollection) -> Result<(), LibraryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let raw = serde_json::to_string_pretty(movies)
            .map_err(|e| LibraryError::Parse(e.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl super::MovieLibrary for JsonLibrary {
    fn list(&self) -> Result<MovieCollection, LibraryError> {
        self.load()
    }

    fn add(
        &self,
        title: &str,
        rating: Option<Rating>,
        year: &str,
        poster: &str,
    ) -> Result<(), LibraryError> {
        let mut movies = self.load()?;
        movies.insert(
            title.to_string(),
            MovieRecord {
                rating,
                year: year.to_string(),
                poster: poster.to_string(),
            },
        );
        self.save(&movies)
    }

    fn delete(&self, title: &str) -> Result<(), LibraryError> {
        let mut movies = self.load()?;
        let stored = find_title(&movies, title)
            .map(str::to_string)
            .ok_or_else(|| LibraryError::NotFound(title.to_string()))?;
        movies.remove(&stored);
        self.save(&movies)
    }

    fn update(
        &self,
        title: &str,
        rating: Option<Rating>,
        year: Option<&str>,
    ) -> Result<(), LibraryError> {
        let mut movies = self.load()?;
        let stored = find_title(&movies, title)
            .map(str::to_string)
            .ok_or_else(|| LibraryError::NotFound(title.to_string()))?;
        if let Some(record) = movies.get_mut(&stored) {
            if let Some(rating) = rating {
                record.rating = Some(rating);
            }
            if let Some(year) = year {
                record.year = year.to_string();
            }
        }
        self.save(&movies)
    }
}
