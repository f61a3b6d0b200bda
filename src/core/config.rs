//! Configuration management
//!
//! Two configuration surfaces: the batch input document (what to translate)
//! and the client settings (how to reach the provider).

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::core::errors::{Result, TranslationError};

/// Batch input document: what to translate and into which languages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Language the source texts are written in
    pub source_lang: String,
    /// Ordered list of texts to translate
    pub source_texts: Vec<String>,
    /// Target language codes; duplicates are collapsed on load
    pub supported_langs: Vec<String>,
}

impl BatchConfig {
    /// Load the batch document from a JSON file.
    ///
    /// Target languages are deduplicated preserving first-seen order.
    /// A missing or malformed file aborts the run before any translation work.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| TranslationError::ConfigError {
                message: format!("failed to open input file {}: {}", path.display(), e),
            })?;

        let mut config: Self =
            serde_json::from_str(&content).map_err(|e| TranslationError::ConfigError {
                message: format!("failed to decode input file {}: {}", path.display(), e),
            })?;

        config.supported_langs = dedup_preserving_order(config.supported_langs);
        info!(
            "Loaded {} source texts, {} target languages",
            config.source_texts.len(),
            config.supported_langs.len()
        );

        Ok(config)
    }

    /// Validate the loaded document.
    ///
    /// Degenerate inputs are valid: an empty language list still produces
    /// one (empty) translation map per source text.
    pub fn validate(&self) -> Result<()> {
        if self.source_lang.is_empty() {
            warn!("source_lang is empty in input document");
        }

        if self.supported_langs.is_empty() {
            warn!("No target languages in input document");
        }

        if self.source_texts.is_empty() {
            warn!("No source texts in input document");
        }

        Ok(())
    }
}

/// Remove duplicate language codes, keeping the first occurrence of each
fn dedup_preserving_order(codes: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    codes
        .into_iter()
        .filter(|code| seen.insert(code.clone()))
        .collect()
}

/// Settings for the HTTP translation client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Translation provider endpoint
    pub api_endpoint: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Maximum in-flight remote calls
    pub max_concurrent: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            timeout_ms: 30000,
            max_concurrent: 64,
        }
    }
}

impl ClientConfig {
    /// Load client settings from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_endpoint =
            std::env::var("TRANSLATE_API_ENDPOINT").unwrap_or(defaults.api_endpoint);

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| defaults.timeout_ms.to_string())
            .parse::<u64>()
            .map_err(|e| TranslationError::ConfigError {
                message: format!("invalid REQUEST_TIMEOUT_MS: {}", e),
            })?;

        let max_concurrent = std::env::var("MAX_CONCURRENT")
            .unwrap_or_else(|_| defaults.max_concurrent.to_string())
            .parse::<usize>()
            .map_err(|e| TranslationError::ConfigError {
                message: format!("invalid MAX_CONCURRENT: {}", e),
            })?;

        Ok(Self {
            api_endpoint,
            timeout_ms,
            max_concurrent,
        })
    }

    /// Validate client settings
    pub fn validate(&self) -> Result<()> {
        if self.api_endpoint.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API endpoint is required".to_string(),
            });
        }

        if self.max_concurrent == 0 {
            return Err(TranslationError::ConfigError {
                message: "max_concurrent must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let codes = vec![
            "fr".to_string(),
            "es".to_string(),
            "fr".to_string(),
            "de".to_string(),
            "es".to_string(),
        ];
        assert_eq!(dedup_preserving_order(codes), vec!["fr", "es", "de"]);
    }

    #[test]
    fn test_from_file_dedups_langs() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"source_lang":"en","source_texts":["Hello World"],"supported_langs":["fr","fr","es"]}}"#
        )
        .unwrap();

        let config = BatchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.source_lang, "en");
        assert_eq!(config.source_texts, vec!["Hello World"]);
        assert_eq!(config.supported_langs, vec!["fr", "es"]);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = BatchConfig::from_file("/nonexistent/input.json").unwrap_err();
        assert!(matches!(err, TranslationError::ConfigError { .. }));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = BatchConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, TranslationError::ConfigError { .. }));
    }

    #[test]
    fn test_validate_accepts_empty_langs() {
        let config = BatchConfig {
            source_lang: "en".to_string(),
            source_texts: vec!["hi".to_string()],
            supported_langs: vec![],
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_client_config_validation() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());

        let config = ClientConfig {
            max_concurrent: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
