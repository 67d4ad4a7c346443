//! Menu flow integration tests.
//!
//! Each test scripts a whole interactive session against a temp-file
//! library and the mock metadata provider, then asserts on the printed
//! transcript and the resulting storage state.

use std::io::Cursor;
use std::sync::Arc;

use tempfile::TempDir;

use cinelog_cli::app::App;
use cinelog_core::testing::{fixtures, MockMetadataProvider};
use cinelog_core::{
    create_library, MetadataProvider, MovieLibrary, OmdbError, Rating, StorageBackend,
    StorageConfig, WebsiteConfig,
};

struct SessionHarness {
    provider: Arc<MockMetadataProvider>,
    storage: StorageConfig,
    website: WebsiteConfig,
    _dir: TempDir,
}

impl SessionHarness {
    fn new(backend: StorageBackend) -> Self {
        let dir = TempDir::new().unwrap();
        let file_name = match backend {
            StorageBackend::Csv => "movies.csv",
            StorageBackend::Json => "movies.json",
        };
        let storage = StorageConfig {
            backend,
            path: dir.path().join(file_name),
        };
        let website = WebsiteConfig {
            template: dir.path().join("template.html"),
            output: dir.path().join("index.html"),
            title: "Test Gallery".to_string(),
        };
        Self {
            provider: Arc::new(MockMetadataProvider::new()),
            storage,
            website,
            _dir: dir,
        }
    }

    fn library(&self) -> Box<dyn MovieLibrary> {
        create_library(&self.storage)
    }

    /// Feed the scripted input through a full menu session and return the
    /// transcript.
    async fn run(&self, script: &str) -> String {
        let provider: Arc<dyn MetadataProvider> = self.provider.clone();
        let mut out = Vec::new();
        let mut app = App::new(
            self.library(),
            provider,
            self.website.clone(),
            Cursor::new(script.as_bytes().to_vec()),
            &mut out,
        );
        app.run().await.unwrap();
        String::from_utf8(out).unwrap()
    }
}

#[tokio::test]
async fn add_fetches_metadata_and_persists() {
    let harness = SessionHarness::new(StorageBackend::Json);
    harness
        .provider
        .add_movie(fixtures::movie_facts("Heat", "1995", "8.3", "http://p"))
        .await;

    let transcript = harness.run("2\nheat\nno\n0\n").await;

    assert!(transcript.contains("The API returned a rating of 8.3."));
    assert!(transcript.contains("Movie 'Heat' added successfully."));
    assert_eq!(harness.provider.queries().await, vec!["heat".to_string()]);

    let movies = harness.library().list().unwrap();
    assert_eq!(movies["Heat"].rating, Some(Rating::Value(8.3)));
    assert_eq!(movies["Heat"].year, "1995");
    assert_eq!(movies["Heat"].poster, "http://p");
}

#[tokio::test]
async fn add_with_custom_rating_override() {
    let harness = SessionHarness::new(StorageBackend::Csv);
    harness
        .provider
        .add_movie(fixtures::movie_facts("Heat", "1995", "8.3", ""))
        .await;

    let transcript = harness.run("2\nHeat\nYES\n9.5\n0\n").await;

    assert!(transcript.contains("Enter your custom rating: "));
    let movies = harness.library().list().unwrap();
    assert_eq!(movies["Heat"].rating, Some(Rating::Value(9.5)));
}

#[tokio::test]
async fn add_unknown_title_prints_not_found_and_stores_nothing() {
    let harness = SessionHarness::new(StorageBackend::Json);

    let transcript = harness.run("2\nGhost Film\n0\n").await;

    assert!(transcript.contains("Movie 'Ghost Film' not found."));
    assert!(harness.library().list().unwrap().is_empty());
}

#[tokio::test]
async fn add_transport_failure_is_a_diagnostic_not_a_crash() {
    let harness = SessionHarness::new(StorageBackend::Json);
    harness
        .provider
        .set_next_error(OmdbError::Api {
            status: 503,
            message: "unavailable".to_string(),
        })
        .await;

    let transcript = harness.run("2\nHeat\n0\n").await;

    assert!(transcript.contains("An error occurred: API error: 503"));
    assert!(harness.library().list().unwrap().is_empty());
}

#[tokio::test]
async fn delete_absent_title_prints_library_message_verbatim() {
    let harness = SessionHarness::new(StorageBackend::Csv);

    let transcript = harness.run("3\nGhost\n0\n").await;

    assert!(transcript.contains("Movie 'Ghost' not found."));
}

#[tokio::test]
async fn update_resolves_stored_title_case_insensitively() {
    let harness = SessionHarness::new(StorageBackend::Json);
    harness
        .library()
        .add("Heat", Some(Rating::Value(8.3)), "1995", "")
        .unwrap();

    let transcript = harness.run("4\nHEAT\n9.1\n0\n").await;

    assert!(transcript.contains("Enter new rating for 'Heat': "));
    assert!(transcript.contains("Movie 'Heat' rating updated to 9.1."));
    let movies = harness.library().list().unwrap();
    assert_eq!(movies["Heat"].rating, Some(Rating::Value(9.1)));
}

#[tokio::test]
async fn stats_report_and_no_data_message() {
    let harness = SessionHarness::new(StorageBackend::Json);

    let transcript = harness.run("5\n0\n").await;
    assert!(transcript.contains("No movies found to generate statistics."));

    let library = harness.library();
    library.add("A", Some(Rating::Value(8.0)), "2000", "").unwrap();
    library.add("B", Some(Rating::Value(6.0)), "2001", "").unwrap();
    library
        .add("C", Some(Rating::Text("N/A".to_string())), "2002", "")
        .unwrap();

    let transcript = harness.run("5\n0\n").await;
    assert!(transcript.contains("Average rating: 7.0"));
    assert!(transcript.contains("Median rating: 7.0"));
    assert!(transcript.contains("Highest rated: A (8.0)"));
    assert!(transcript.contains("Lowest rated: B (6.0)"));
}

#[tokio::test]
async fn generate_website_writes_page_and_reports_missing_template() {
    let harness = SessionHarness::new(StorageBackend::Json);
    harness
        .library()
        .add("Heat", Some(Rating::Value(8.3)), "1995", "")
        .unwrap();

    // No template on disk yet: reported, loop continues to exit cleanly.
    let transcript = harness.run("6\n0\n").await;
    assert!(transcript.contains("An error occurred while generating the website:"));

    std::fs::write(
        &harness.website.template,
        "<h1>__TEMPLATE_TITLE__</h1><ol>__TEMPLATE_MOVIE_GRID__</ol>",
    )
    .unwrap();

    let transcript = harness.run("6\n0\n").await;
    assert!(transcript.contains("Website was generated successfully."));

    let page = std::fs::read_to_string(&harness.website.output).unwrap();
    assert!(page.contains("<h1>Test Gallery</h1>"));
    assert!(page.contains("<h2>Heat</h2>"));
}

#[tokio::test]
async fn invalid_choice_reprompts_and_list_shows_records() {
    let harness = SessionHarness::new(StorageBackend::Csv);
    harness
        .library()
        .add("Heat", Some(Rating::Value(8.3)), "1995", "")
        .unwrap();

    let transcript = harness.run("9\n1\n0\n").await;

    assert!(transcript.contains("Invalid choice, try again."));
    assert!(transcript.contains("Heat: 8.3, 1995"));
    assert!(transcript.contains("Exiting... Bye!"));
}

#[tokio::test]
async fn end_of_input_terminates_the_loop() {
    let harness = SessionHarness::new(StorageBackend::Csv);
    // No trailing "0": the script just runs out.
    let transcript = harness.run("1\n").await;
    assert!(transcript.contains("No movies found."));
}
