//! Persistence gateway for the tracker's two scalar values.
//!
//! The store is a flat string-to-string map. Absence of a key is the only
//! "not yet initialized" signal; there is no schema or versioning.

mod file;
mod memory;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the beer count as decimal text.
pub const BEER_COUNT_KEY: &str = "beerCount";

/// Key holding the session start as an RFC 3339 timestamp.
pub const START_TIME_KEY: &str = "startTime";

/// Errors raised by a key/value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file '{path}' is not a JSON object: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode storage contents: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous string key/value store.
///
/// Each key is independent: there are no transactions across keys.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
