//! The interactive menu loop.
//!
//! One command per menu selection; every command performs a full
//! load-act-print cycle against the library. Errors from the library, the
//! metadata provider and the website renderer are converted to printed
//! diagnostics here and never terminate the loop.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::warn;

use cinelog_core::library::find_title;
use cinelog_core::{
    compute_stats, generate_website, MetadataProvider, MovieLibrary, OmdbError, Rating,
    WebsiteConfig,
};

/// The application controller.
///
/// Input and output handles are injected so tests can script a whole
/// session against an in-memory reader and writer.
pub struct App<R, W> {
    library: Box<dyn MovieLibrary>,
    provider: Arc<dyn MetadataProvider>,
    website: WebsiteConfig,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(
        library: Box<dyn MovieLibrary>,
        provider: Arc<dyn MetadataProvider>,
        website: WebsiteConfig,
        input: R,
        out: W,
    ) -> Self {
        Self {
            library,
            provider,
            website,
            input,
            out,
        }
    }

    /// Run the menu loop until the user exits.
    ///
    /// Only explicit exit (selection `0`) or end of input terminates the
    /// loop; unrecognized selections re-prompt.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "\n------ Menu ------")?;
            writeln!(self.out, "0. Exit")?;
            writeln!(self.out, "1. List Movies")?;
            writeln!(self.out, "2. Add Movie")?;
            writeln!(self.out, "3. Delete Movie")?;
            writeln!(self.out, "4. Update Movie Rating")?;
            writeln!(self.out, "5. Show Movie Stats")?;
            writeln!(self.out, "6. Generate Website")?;

            let Some(choice) = self.prompt("Enter choice (0-6): ")? else {
                break;
            };

            match choice.as_str() {
                "0" => {
                    writeln!(self.out, "Exiting... Bye!")?;
                    break;
                }
                "1" => self.list_movies()?,
                "2" => self.add_movie().await?,
                "3" => self.delete_movie()?,
                "4" => self.update_movie()?,
                "5" => self.movie_stats()?,
                "6" => self.generate_site()?,
                _ => writeln!(self.out, "Invalid choice, try again.")?,
            }
        }
        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` means end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn list_movies(&mut self) -> io::Result<()> {
        match self.library.list() {
            Ok(movies) if movies.is_empty() => writeln!(self.out, "No movies found.")?,
            Ok(movies) => {
                writeln!(self.out, "\nList of movies:")?;
                for (title, record) in &movies {
                    writeln!(
                        self.out,
                        "{}: {}, {}",
                        title,
                        record.rating_display(),
                        record.year
                    )?;
                }
            }
            Err(e) => writeln!(self.out, "Error listing movies: {}", e)?,
        }
        writeln!(self.out)?;
        Ok(())
    }

    async fn add_movie(&mut self) -> io::Result<()> {
        let Some(title) = self.prompt("Enter movie name: ")? else {
            return Ok(());
        };
        if title.is_empty() {
            writeln!(self.out, "Movie name cannot be empty.")?;
            return Ok(());
        }

        let facts = match self.provider.fetch_by_title(&title).await {
            Ok(facts) => facts,
            Err(OmdbError::NotFound(_)) => {
                writeln!(self.out, "Movie '{}' not found.", title)?;
                return Ok(());
            }
            Err(e) => {
                warn!("Metadata lookup for '{}' failed: {}", title, e);
                writeln!(self.out, "An error occurred: {}", e)?;
                return Ok(());
            }
        };

        let mut rating = facts.rating.clone();
        let answer = self.prompt(&format!(
            "The API returned a rating of {}. Would you like to provide your own rating? (yes/no): ",
            facts.rating
        ))?;
        if answer.is_some_and(|a| a.eq_ignore_ascii_case("yes")) {
            if let Some(custom) = self.prompt("Enter your custom rating: ")? {
                rating = Rating::from_input(&custom);
            }
        }

        match self
            .library
            .add(&facts.title, Some(rating), &facts.year, &facts.poster)
        {
            Ok(()) => writeln!(self.out, "Movie '{}' added successfully.", facts.title)?,
            Err(e) => writeln!(self.out, "An error occurred: {}", e)?,
        }
        Ok(())
    }

    fn delete_movie(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter the movie name to delete: ")? else {
            return Ok(());
        };

        match self.library.delete(&name) {
            Ok(()) => writeln!(self.out, "'{}' has been deleted.", name)?,
            // NotFound carries the user-facing message verbatim.
            Err(e) => writeln!(self.out, "{}", e)?,
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn update_movie(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter the movie name to update: ")? else {
            return Ok(());
        };

        let movies = match self.library.list() {
            Ok(movies) => movies,
            Err(e) => {
                writeln!(self.out, "Error listing movies: {}", e)?;
                return Ok(());
            }
        };

        let Some(stored) = find_title(&movies, &name).map(str::to_string) else {
            writeln!(self.out, "Movie '{}' not found in the list.", name)?;
            return Ok(());
        };

        let Some(new_rating) = self.prompt(&format!("Enter new rating for '{}': ", stored))? else {
            return Ok(());
        };

        match self
            .library
            .update(&stored, Some(Rating::from_input(&new_rating)), None)
        {
            Ok(()) => writeln!(
                self.out,
                "Movie '{}' rating updated to {}.",
                stored, new_rating
            )?,
            Err(e) => writeln!(self.out, "Error updating movie: {}", e)?,
        }
        Ok(())
    }

    fn movie_stats(&mut self) -> io::Result<()> {
        let movies = match self.library.list() {
            Ok(movies) => movies,
            Err(e) => {
                writeln!(self.out, "Error listing movies: {}", e)?;
                return Ok(());
            }
        };

        match compute_stats(&movies) {
            Some(stats) => {
                writeln!(self.out, "Average rating: {:.1}", stats.average)?;
                writeln!(self.out, "Median rating: {:.1}", stats.median)?;
                writeln!(self.out, "Highest rated: {}", extreme_line(&stats.best))?;
                writeln!(self.out, "Lowest rated: {}", extreme_line(&stats.worst))?;
            }
            None => writeln!(self.out, "No movies found to generate statistics.")?,
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn generate_site(&mut self) -> io::Result<()> {
        let movies = match self.library.list() {
            Ok(movies) => movies,
            Err(e) => {
                writeln!(self.out, "Error listing movies: {}", e)?;
                return Ok(());
            }
        };

        match generate_website(&self.website, &movies) {
            Ok(()) => writeln!(self.out, "Website was generated successfully.")?,
            Err(e) => writeln!(
                self.out,
                "An error occurred while generating the website: {}",
                e
            )?,
        }
        Ok(())
    }
}

/// Format tied titles and their shared rating, e.g. `Heat, Ronin (8.3)`.
fn extreme_line(entries: &[(String, f64)]) -> String {
    let titles: Vec<&str> = entries.iter().map(|(title, _)| title.as_str()).collect();
    match entries.first() {
        Some((_, value)) => format!("{} ({:.1})", titles.join(", "), value),
        None => "N/A".to_string(),
    }
}
