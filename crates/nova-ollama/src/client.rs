// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Ollama generate endpoint.
//!
//! Provides [`OllamaClient`] which handles request construction, a bounded
//! request timeout, and transient error retry. A hung backend surfaces as a
//! timeout error instead of wedging the calling loop.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use nova_config::model::ModelConfig;
use nova_core::{ModelBackend, NovaError};

use crate::types::{GenerateRequest, GenerateResponse};

/// HTTP client for Ollama backend communication.
///
/// Manages connection pooling, the request timeout, and retry logic for
/// transient errors (429, 500, 503).
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    model: String,
    endpoint: String,
    max_retries: u32,
    timeout: Duration,
}

impl OllamaClient {
    /// Creates a new Ollama client from the model configuration.
    pub fn new(config: &ModelConfig) -> Result<Self, NovaError> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NovaError::Backend {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model: config.name.clone(),
            endpoint: config.endpoint.clone(),
            max_retries: 1,
            timeout,
        })
    }

    /// Returns the configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a non-streaming generate request and returns the completion.
    ///
    /// On transient errors (429, 500, 503), retries once after a 1-second
    /// delay. Timeout expiry is reported as [`NovaError::Timeout`].
    pub async fn generate_completion(&self, prompt: &str) -> Result<String, NovaError> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying generate request after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let response = match self.client.post(&self.endpoint).json(&request).send().await {
                Ok(response) => response,
                Err(e) if e.is_timeout() => {
                    return Err(NovaError::Timeout {
                        duration: self.timeout,
                    });
                }
                Err(e) => {
                    return Err(NovaError::Backend {
                        message: format!("HTTP request failed: {e}"),
                        source: Some(Box::new(e)),
                    });
                }
            };

            let status = response.status();
            debug!(status = %status, attempt, "generate response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| NovaError::Backend {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                let parsed: GenerateResponse =
                    serde_json::from_str(&body).map_err(|e| NovaError::Backend {
                        message: format!("failed to parse backend response: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                return Ok(parsed.response);
            }

            let body = response.text().await.unwrap_or_default();
            if is_transient_error(status) && attempt < self.max_retries {
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(NovaError::Backend {
                    message: format!("backend returned {status}: {body}"),
                    source: None,
                });
                continue;
            }

            // Non-transient error or exhausted retries.
            return Err(NovaError::Backend {
                message: format!("backend returned {status}: {body}"),
                source: None,
            });
        }

        Err(last_error.unwrap_or_else(|| NovaError::Backend {
            message: "generate request failed after retries".into(),
            source: None,
        }))
    }
}

#[async_trait]
impl ModelBackend for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, NovaError> {
        self.generate_completion(prompt).await
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}
