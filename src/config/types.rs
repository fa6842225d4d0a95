use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Endpoint the joke request is posted to unless overridden.
pub const DEFAULT_JOKE_ENDPOINT: &str = "https://apihub.staging.appply.link/chatgpt";

/// Model identifier sent with every joke request unless overridden.
pub const DEFAULT_JOKE_MODEL: &str = "gpt-4o";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub joke: JokeConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the beer count and session start are persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the JSON storage file. Platform data dir when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Remote joke API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JokeConfig {
    /// Full URL the request is POSTed to.
    #[serde(default = "default_joke_endpoint")]
    pub endpoint: String,
    /// Model identifier included in the request body.
    #[serde(default = "default_joke_model")]
    pub model: String,
    /// Request timeout in seconds. No timeout when absent.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between redraws when idle (default: 1000).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_joke_endpoint() -> String {
    DEFAULT_JOKE_ENDPOINT.to_string()
}

fn default_joke_model() -> String {
    DEFAULT_JOKE_MODEL.to_string()
}

fn default_tick_rate_ms() -> u64 {
    1000
}

impl Default for JokeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_joke_endpoint(),
            model: default_joke_model(),
            timeout_seconds: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
