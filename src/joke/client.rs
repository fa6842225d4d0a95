//! HTTP client for the chat-style joke endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::config::JokeConfig;

use super::error::JokeError;
use super::{JokeGateway, SYSTEM_PROMPT, USER_PROMPT};

/// Posts a fixed two-message conversation and returns the `response` field.
pub struct HttpJokeClient {
    client: Client,
    endpoint: String,
    model: String,
}

impl HttpJokeClient {
    pub fn new(config: &JokeConfig) -> Result<Self, JokeError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.trim().to_string(),
            model: config.model.clone(),
        })
    }

    fn build_request(&self) -> ApiRequest<'_> {
        ApiRequest {
            messages: [
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: USER_PROMPT,
                },
            ],
            model: &self.model,
        }
    }
}

#[async_trait]
impl JokeGateway for HttpJokeClient {
    async fn fetch_joke(&self) -> Result<String, JokeError> {
        tracing::debug!(url = %self.endpoint, model = %self.model, "Requesting joke");

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.build_request())
            .send()
            .await?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::error!(status = %status, latency_ms, error = %error_text, "Joke API error");
            return Err(JokeError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.text().await?;
        let parsed: ApiResponse = serde_json::from_str(&body)
            .map_err(|e| JokeError::ParseError(format!("Failed to parse response JSON: {}", e)))?;

        tracing::info!(latency_ms, joke_len = parsed.response.len(), "Joke received");
        Ok(parsed.response)
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    messages: [Message<'a>; 2],
    model: &'a str,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    response: String,
}
