use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Count beers, time the session, and ask for a joke now and then.
#[derive(Debug, Parser)]
#[command(name = "beer-tracker", version)]
pub struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the storage file location
    #[arg(long, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    /// Override the joke API endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

impl Cli {
    /// Config file path: `--config` or the platform default.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.storage {
            config.storage.path = Some(path.clone());
        }
        if let Some(endpoint) = &self.endpoint {
            config.joke.endpoint = endpoint.clone();
        }
    }
}
