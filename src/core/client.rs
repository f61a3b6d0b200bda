//! HTTP translation client
//!
//! Wraps the provider behind the [`Translate`] trait so the fan-out
//! coordinator can run against a mock in tests.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::core::config::ClientConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::TranslationRequest;

/// A single opaque remote translation call.
///
/// One call per (text, language) pair, no retries. Failures are surfaced to
/// the caller, which records them as empty results and keeps going.
#[async_trait]
pub trait Translate: Send + Sync {
    /// Translate one text into one target language
    async fn translate(&self, request: TranslationRequest) -> Result<String>;
}

/// Translation client backed by a Google-translate style HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
    semaphore: Arc<Semaphore>,
}

impl HttpTranslator {
    /// Create a new client from settings
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .build()?;

        let semaphore = Arc::new(Semaphore::new(config.max_concurrent));

        Ok(Self {
            client,
            config: Arc::new(config),
            semaphore,
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        Self::new(config)
    }

    async fn send_request(&self, request: &TranslationRequest) -> Result<String> {
        let response = self
            .client
            .get(&self.config.api_endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", request.source_lang.as_str()),
                ("tl", request.target_lang.as_str()),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let json: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| TranslationError::InvalidResponseError {
                    message: e.to_string(),
                })?;

        parse_translation(&json)
    }
}

/// Extract the translated text from the provider's nested-array response.
///
/// The endpoint returns `[[["segment", "original", ...], ...], ...]`; the
/// translation is the concatenation of the first element of each segment.
fn parse_translation(json: &serde_json::Value) -> Result<String> {
    let segments = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslationError::InvalidResponseError {
            message: "no translation segments in response".to_string(),
        })?;

    let mut translation = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
            translation.push_str(part);
        }
    }

    if translation.is_empty() {
        return Err(TranslationError::InvalidResponseError {
            message: "empty translation in response".to_string(),
        });
    }

    Ok(translation)
}

#[async_trait]
impl Translate for HttpTranslator {
    async fn translate(&self, request: TranslationRequest) -> Result<String> {
        // Gate in-flight remote calls; correctness does not depend on the cap
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        debug!(
            "translating {:?} -> {}",
            request.text, request.target_lang
        );
        self.send_request(&request).await
    }
}
