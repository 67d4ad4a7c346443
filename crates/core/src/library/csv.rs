//! Delimited-text library backend.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{find_title, LibraryError, MovieCollection, MovieRecord, Rating};

/// Movie library backed by a CSV file with a `title,rating,year,poster`
/// header row.
pub struct CsvLibrary {
    path: PathBuf,
}

/// One CSV row; the rating travels as raw text.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    title: String,
    rating: String,
    year: String,
    poster: String,
}

impl CsvLibrary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<MovieCollection, LibraryError> {
        if !self.path.exists() {
            debug!("CSV library file {:?} does not exist, starting empty", self.path);
            return Ok(MovieCollection::new());
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(map_csv_error)?;
        let mut movies = MovieCollection::new();
        for row in reader.deserialize::<CsvRow>() {
            let row = row.map_err(map_csv_error)?;
            // Unparsable ratings (including "N/A" and the empty field)
            // coerce to absent at load time.
            let rating = row.rating.trim().parse::<f64>().ok().map(Rating::Value);
            movies.insert(
                row.title,
                MovieRecord {
                    rating,
                    year: row.year,
                    poster: row.poster,
                },
            );
        }
        Ok(movies)
    }

    fn save(&self, movies: &MovieCollection) -> Result<(), LibraryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(map_csv_error)?;
        for (title, record) in movies {
            writer
                .serialize(CsvRow {
                    title: title.clone(),
                    rating: match &record.rating {
                        Some(r) => r.to_string(),
                        None => String::new(),
                    },
                    year: record.year.clone(),
                    poster: record.poster.clone(),
                })
                .map_err(map_csv_error)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl super::MovieLibrary for CsvLibrary {
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

fn map_csv_error(e: csv::Error) -> LibraryError {
    let msg = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(io) => LibraryError::Io(io),
        _ => LibraryError::Parse(msg),
    }
}
