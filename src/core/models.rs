//! Core data models for batch translation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Translation request for a single (text, language) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Source text to translate
    pub text: String,
    /// Language the source text is written in
    pub source_lang: String,
    /// Language to translate into
    pub target_lang: String,
}

impl TranslationRequest {
    /// Create a new request
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }
}

/// Outcome of one translation call.
///
/// A failed remote call is recorded with an empty `text`, never dropped.
#[derive(Debug, Clone)]
pub struct TranslationOutput {
    /// Target language code this outcome belongs to
    pub target_lang: String,
    /// Translated text, empty when the remote call failed
    pub text: String,
}

impl TranslationOutput {
    /// Record a successful translation
    pub fn success(target_lang: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            target_lang: target_lang.into(),
            text: text.into(),
        }
    }

    /// Record a failed translation as an empty result
    pub fn failure(target_lang: impl Into<String>) -> Self {
        Self {
            target_lang: target_lang.into(),
            text: String::new(),
        }
    }
}

/// Complete set of per-language translations for one source text
#[derive(Debug, Clone)]
pub struct TextResultSet {
    /// Source text with spaces replaced by underscores
    pub key: String,
    /// Target language code -> translated text
    pub translations: HashMap<String, String>,
}

/// Aggregate mapping written to disk: source-text key -> per-language map
pub type OutputDocument = HashMap<String, HashMap<String, String>>;

/// Summary statistics for one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of source texts processed
    pub total_texts: usize,
    /// Number of deduplicated target languages
    pub total_langs: usize,
    /// Number of translation calls issued
    pub total_attempts: usize,
    /// Wall-clock time for the whole fan-out
    pub elapsed: Duration,
}

/// Build the output key for a source text: spaces become underscores
pub fn source_text_key(text: &str) -> String {
    text.replace(' ', "_")
}
