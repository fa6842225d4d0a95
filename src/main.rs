use anyhow::Context;
use beer_tracker::cli::Cli;
use beer_tracker::config::Config;
use beer_tracker::joke::{HttpJokeClient, JokeGateway};
use beer_tracker::logging::init_tracing;
use beer_tracker::storage::{FileStore, KeyValueStore};
use clap::Parser;
use std::sync::Arc;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_file = init_tracing();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let storage_path = config.storage_path();
    tracing::info!(
        config = %config_path.display(),
        storage = %storage_path.display(),
        endpoint = %config.joke.endpoint,
        log = ?log_file,
        "Starting beer-tracker"
    );

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(storage_path));
    let jokes: Arc<dyn JokeGateway> = Arc::new(
        HttpJokeClient::new(&config.joke).context("Failed to build HTTP client")?,
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    beer_tracker::ui::run(&config.ui, store, jokes, runtime.handle().clone())?;

    tracing::info!("Exited cleanly");
    Ok(())
}
