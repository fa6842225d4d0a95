use thiserror::Error;

/// Errors that can occur while fetching a joke.
#[derive(Debug, Error)]
pub enum JokeError {
    /// Connection, TLS, timeout or body read failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Body was not the expected JSON shape.
    #[error("Parse error: {0}")]
    ParseError(String),
}
