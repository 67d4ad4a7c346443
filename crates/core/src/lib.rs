pub mod config;
pub mod library;
pub mod omdb;
pub mod stats;
pub mod testing;
pub mod website;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, StorageBackend,
    StorageConfig, WebsiteConfig,
};
pub use library::{
    create_library, CsvLibrary, JsonLibrary, LibraryError, MovieCollection, MovieLibrary,
    MovieRecord, Rating,
};
pub use omdb::{MetadataProvider, MovieFacts, OmdbClient, OmdbConfig, OmdbError, NO_POSTER_URL};
pub use stats::{compute_stats, RatingStats};
pub use website::{generate_website, WebsiteError};
