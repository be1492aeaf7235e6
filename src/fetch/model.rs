//! Text-generation model client
//!
//! Talks to a hosted inference endpoint (Hugging Face Inference API shape):
//! POST `{base_url}/{model_id}` with `{"inputs": prompt}` and a bearer token,
//! answered by `[{"generated_text": "..."}]`.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::ModelConfig;
use crate::fetch::Fetched;

/// Client for the text-generation model API
pub struct ModelClient {
    client: Client,
    api_token: Option<String>,
    endpoint: String,
    max_new_tokens: u32,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct Generation {
    #[serde(default)]
    generated_text: String,
}

impl ModelClient {
    /// Create a new model client from configuration
    pub fn new(config: &ModelConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("travel-buddy/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client for model API")?;

        Ok(Self {
            client,
            api_token: config.api_token.clone(),
            endpoint: format!(
                "{}/{}",
                config.base_url.trim_end_matches('/'),
                config.model_id
            ),
            max_new_tokens: config.max_new_tokens,
        })
    }

    /// Run one prompt through the model.
    ///
    /// Missing token, network failure, non-2xx status, and empty or
    /// unparsable bodies are all `Unavailable`; the caller's fallback chain
    /// takes it from there.
    #[instrument(skip(self, prompt))]
    pub async fn complete(&self, prompt: &str) -> Fetched<String> {
        let Some(token) = self.api_token.as_deref() else {
            debug!("No model API token configured, generation unavailable");
            return Fetched::Unavailable;
        };

        debug!("Model request to {} ({} prompt chars)", self.endpoint, prompt.len());

        let body = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens: self.max_new_tokens,
            },
        };

        let response = match self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                warn!("Model API returned {}", response.status());
                return Fetched::Unavailable;
            }
            Err(e) => {
                warn!("Model API request failed: {}", e);
                return Fetched::Unavailable;
            }
        };

        match response.json::<Vec<Generation>>().await {
            Ok(generations) => {
                let text = generations
                    .into_iter()
                    .next()
                    .map(|g| g.generated_text.trim().to_string())
                    .unwrap_or_default();
                if text.is_empty() {
                    warn!("Model API answered with no generated text");
                    Fetched::Unavailable
                } else {
                    debug!("Model answered with {} chars", text.len());
                    Fetched::Ok(text)
                }
            }
            Err(e) => {
                warn!("Failed to parse model API response: {}", e);
                Fetched::Unavailable
            }
        }
    }
}

impl std::fmt::Debug for ModelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelClient")
            .field("endpoint", &self.endpoint)
            .field("has_api_token", &self.api_token.is_some())
            .finish()
    }
}
