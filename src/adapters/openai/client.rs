//! Blocking wrapper over an async chat completion call
//!
//! Each call runs on a private current-thread runtime and is bounded by
//! both the HTTP client timeout and an outer `tokio::time::timeout`.

use std::time::Duration;

use reqwest::Client;
use tokio::runtime::Runtime;

use super::{chat_request, parse_chat_completion, status_error};
use crate::config::EnrichmentConfig;
use crate::core::ports::{EnrichmentError, NarrativeService};

/// Narrator backed by an OpenAI-compatible HTTP endpoint
pub struct OpenAiNarrator {
    client: Client,
    runtime: Runtime,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    timeout: Duration,
}

impl std::fmt::Debug for OpenAiNarrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiNarrator")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl OpenAiNarrator {
    /// Build a narrator from settings and an API key
    pub fn new(config: &EnrichmentConfig, api_key: String) -> Result<Self, EnrichmentError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EnrichmentError::NotConfigured(e.to_string()))?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| EnrichmentError::NotConfigured(e.to_string()))?;

        Ok(Self {
            client,
            runtime,
            endpoint: config.endpoint.clone(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            timeout,
        })
    }

    async fn request(&self, prompt: &str) -> Result<String, EnrichmentError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&chat_request(&self.model, prompt, self.max_tokens))
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(&e))?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }
        parse_chat_completion(&body)
    }

    fn transport_error(&self, e: &reqwest::Error) -> EnrichmentError {
        if e.is_timeout() {
            EnrichmentError::Timeout(self.timeout.as_secs())
        } else {
            EnrichmentError::Network(e.to_string())
        }
    }
}

impl NarrativeService for OpenAiNarrator {
    fn model(&self) -> &str {
        &self.model
    }

    fn narrate(&self, prompt: &str) -> Result<String, EnrichmentError> {
        log::debug!("requesting narrative from {} ({})", self.endpoint, self.model);
        self.runtime.block_on(async {
            tokio::time::timeout(self.timeout, self.request(prompt))
                .await
                .map_err(|_| EnrichmentError::Timeout(self.timeout.as_secs()))?
        })
    }
}
