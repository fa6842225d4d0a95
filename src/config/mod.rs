//! Configuration loading.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, JokeConfig, StorageConfig, UiConfig, DEFAULT_JOKE_ENDPOINT, DEFAULT_JOKE_MODEL,
};
