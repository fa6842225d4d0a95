//! Remote joke gateway.

mod client;
mod error;

use async_trait::async_trait;

pub use client::HttpJokeClient;
pub use error::JokeError;

/// Instruction sent as the `system` message of every request.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Please provide a short, funny joke related to drinking or beer.";

/// Prompt sent as the `user` message of every request.
pub const USER_PROMPT: &str = "Tell me a short, funny joke about drinking or beer.";

/// Shown in place of a joke when the request fails for any reason.
pub const FALLBACK_JOKE: &str = "Failed to generate a joke. Have another beer!";

/// Source of jokes.
///
/// Every failure mode collapses into [`JokeError`]; callers only need to know
/// whether text came back.
#[async_trait]
pub trait JokeGateway: Send + Sync {
    async fn fetch_joke(&self) -> Result<String, JokeError>;
}
