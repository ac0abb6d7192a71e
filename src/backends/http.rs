/*!
 * Generic JSON HTTP translation backend.
 *
 * Talks to a translation API that accepts `{ "text", "target_language" }` and
 * answers `{ "translated_text" }`. Retries transient failures with
 * exponential backoff before giving up; the translation service treats any
 * remaining error as a fail-open signal.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::backends::TranslationBackend;
use crate::errors::BackendError;

/// Translation request payload
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    /// Text to translate
    text: &'a str,
    /// ISO code of the target language
    target_language: &'a str,
}

/// Translation response payload
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    /// Translated text
    translated_text: String,
}

/// HTTP client for a JSON translation API
#[derive(Debug)]
pub struct HttpBackend {
    /// Fully qualified endpoint URL
    endpoint: String,
    /// HTTP client for making requests
    client: Client,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

impl HttpBackend {
    /// Create a backend for the given endpoint with default retry settings
    pub fn new(endpoint: impl Into<String>) -> Result<Self, BackendError> {
        Self::new_with_config(endpoint, 3, 500)
    }

    /// Create a backend with explicit retry configuration
    pub fn new_with_config(
        endpoint: impl Into<String>,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, BackendError> {
        let endpoint = endpoint.into();

        // Validate the endpoint up front so a bad URL fails at construction
        // rather than on the first request.
        Url::parse(&endpoint)
            .map_err(|e| BackendError::ConnectionError(format!("Invalid endpoint '{}': {}", endpoint, e)))?;

        Ok(Self {
            endpoint,
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .pool_idle_timeout(Duration::from_secs(90))
                .build()
                .unwrap_or_default(),
            max_retries,
            backoff_base_ms,
        })
    }

    /// Perform one request attempt
    async fn request_once(&self, text: &str, target_language: &str) -> Result<String, BackendError> {
        let payload = TranslateRequest {
            text,
            target_language,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| BackendError::ParseError(e.to_string()))?;

        Ok(parsed.translated_text)
    }

    /// Whether an error is worth retrying
    fn is_retryable(error: &BackendError) -> bool {
        match error {
            BackendError::ConnectionError(_) | BackendError::Timeout => true,
            BackendError::ApiError { status_code, .. } => *status_code == 429 || *status_code >= 500,
            BackendError::RequestFailed(_) => true,
            BackendError::ParseError(_) => false,
        }
    }
}

#[async_trait]
impl TranslationBackend for HttpBackend {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, BackendError> {
        let mut attempt = 0;

        loop {
            match self.request_once(text, target_language).await {
                Ok(translated) => {
                    debug!(
                        "Translated {} chars -> {} ({})",
                        text.len(),
                        target_language,
                        self.endpoint
                    );
                    return Ok(translated);
                }
                Err(error) => {
                    if attempt >= self.max_retries || !Self::is_retryable(&error) {
                        return Err(error);
                    }

                    let backoff = self.backoff_base_ms * 2u64.pow(attempt);
                    warn!(
                        "Translation request failed (attempt {}/{}), retrying in {} ms: {}",
                        attempt + 1,
                        self.max_retries,
                        backoff,
                        error
                    );
                    tokio::time::sleep(Duration::from_millis(backoff)).await;
                    attempt += 1;
                }
            }
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}
