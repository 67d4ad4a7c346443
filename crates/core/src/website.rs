//! Static website generation - renders the gallery page from a template.
//!
//! The template carries two placeholder tokens, one for the page title and
//! one for the repeating movie grid. Rendering is pure string substitution.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::config::WebsiteConfig;
use crate::library::MovieCollection;
use crate::omdb::NO_POSTER_URL;

/// Token replaced with the configured page title.
pub const TITLE_PLACEHOLDER: &str = "__TEMPLATE_TITLE__";
/// Token replaced with the generated movie grid markup.
pub const GRID_PLACEHOLDER: &str = "__TEMPLATE_MOVIE_GRID__";

/// Errors for website generation.
#[derive(Debug, Error)]
pub enum WebsiteError {
    #[error("Template file not found: {0}")]
    TemplateNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the gallery page and write it to the configured output path.
pub fn generate_website(
    config: &WebsiteConfig,
    movies: &MovieCollection,
) -> Result<(), WebsiteError> {
    let template = read_template(&config.template)?;
    let page = render(&template, &config.title, movies);
    fs::write(&config.output, page)?;
    info!("Generated website at {:?} ({} movies)", config.output, movies.len());
    Ok(())
}

fn read_template(path: &Path) -> Result<String, WebsiteError> {
    match fs::read_to_string(path) {
        Ok(template) => Ok(template),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(WebsiteError::TemplateNotFound(path.display().to_string()))
        }
        Err(e) => Err(WebsiteError::Io(e)),
    }
}

/// Substitute both placeholder tokens in the template.
fn render(template: &str, page_title: &str, movies: &MovieCollection) -> String {
    template
        .replace(TITLE_PLACEHOLDER, &escape_html(page_title))
        .replace(GRID_PLACEHOLDER, &movie_grid(movies))
}

fn movie_grid(movies: &MovieCollection) -> String {
    let mut grid = String::new();
    for (title, record) in movies {
        let poster = if record.poster.is_empty() {
            NO_POSTER_URL
        } else {
            record.poster.as_str()
        };
        grid.push_str(&format!(
            r#"        <li>
            <div class="movie">
                <img src="{poster}" alt="{title} Poster" style="width:100px;">
                <h2>{title}</h2>
                <p><strong>Rating:</strong> {rating}</p>
                <p><strong>Year:</strong> {year}</p>
            </div>
        </li>
"#,
            poster = escape_html(poster),
            title = escape_html(title),
            rating = escape_html(&record.rating_display()),
            year = escape_html(&record.year),
        ));
    }
    grid
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
