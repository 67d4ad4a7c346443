use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinelog_core::{
    create_library, load_config, validate_config, Config, MetadataProvider, OmdbClient,
};

use cinelog_cli::app::App;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging. Diagnostics go to stderr so the menu on stdout
    // stays readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("cinelog v{}", VERSION);

    // Determine config path
    let config_path = std::env::var("CINELOG_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration; a missing file means a zero-config first run.
    let config = if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        info!("No config file at {:?}, using defaults", config_path);
        Config::default()
    };

    validate_config(&config).context("Configuration validation failed")?;

    info!("Storage backend: {:?}", config.storage.backend);
    info!("Library path: {:?}", config.storage.path);

    let library = create_library(&config.storage);
    let provider: Arc<dyn MetadataProvider> = Arc::new(
        OmdbClient::new(config.omdb.clone()).context("Failed to create OMDb client")?,
    );

    let mut app = App::new(
        library,
        provider,
        config.website.clone(),
        BufReader::new(io::stdin()),
        io::stdout(),
    );
    app.run().await.context("I/O error in the menu loop")?;

    Ok(())
}
