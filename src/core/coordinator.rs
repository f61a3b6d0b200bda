//! Concurrent fan-out over (text, language) pairs
//!
//! One task per source text, one nested task per target language. Each level
//! fans results back in over a channel and waits for all of its producers
//! before publishing, so the aggregate is keyed by identity and deterministic
//! regardless of completion order.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::core::client::Translate;
use crate::core::config::BatchConfig;
use crate::core::models::{
    source_text_key, OutputDocument, RunSummary, TextResultSet, TranslationOutput,
    TranslationRequest,
};

/// Coordinates the concurrent translation of a whole batch
pub struct FanOutCoordinator {
    translator: Arc<dyn Translate>,
}

impl FanOutCoordinator {
    /// Create a coordinator over the given translation client
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }

    /// Translate every source text into every target language.
    ///
    /// Remote failures are recorded as empty strings; every requested
    /// language appears in every result set. Returns the aggregate document
    /// together with run statistics.
    pub async fn run(&self, config: &BatchConfig) -> (OutputDocument, RunSummary) {
        let start = Instant::now();
        info!("total lines {}", config.source_texts.len());

        let (tx, mut rx) = mpsc::unbounded_channel::<TextResultSet>();

        for text in &config.source_texts {
            let translator = Arc::clone(&self.translator);
            let text = text.clone();
            let source_lang = config.source_lang.clone();
            let langs = config.supported_langs.clone();
            let tx = tx.clone();

            tokio::spawn(async move {
                let result_set =
                    translate_to_multiple_langs(translator, text, source_lang, langs).await;
                // Receiver only hangs up if the whole run was dropped
                let _ = tx.send(result_set);
            });
        }
        drop(tx);

        let mut document = OutputDocument::new();
        while let Some(result_set) = rx.recv().await {
            document.insert(result_set.key, result_set.translations);
        }

        let summary = RunSummary {
            total_texts: config.source_texts.len(),
            total_langs: config.supported_langs.len(),
            total_attempts: config.source_texts.len() * config.supported_langs.len(),
            elapsed: start.elapsed(),
        };

        (document, summary)
    }
}

/// Fan one source text out to every target language and wait for all of them
async fn translate_to_multiple_langs(
    translator: Arc<dyn Translate>,
    text: String,
    source_lang: String,
    langs: Vec<String>,
) -> TextResultSet {
    info!("translating {}", text);

    let (tx, mut rx) = mpsc::unbounded_channel::<TranslationOutput>();

    for lang in &langs {
        let translator = Arc::clone(&translator);
        let request =
            TranslationRequest::new(text.as_str(), source_lang.as_str(), lang.as_str());
        let lang = lang.clone();
        let tx = tx.clone();

        tokio::spawn(async move {
            let outcome = match translator.translate(request).await {
                Ok(translated) => TranslationOutput::success(lang, translated),
                Err(e) => {
                    warn!("translation to {} failed: {}", lang, e);
                    TranslationOutput::failure(lang)
                }
            };
            let _ = tx.send(outcome);
        });
    }
    drop(tx);

    let mut translations = std::collections::HashMap::with_capacity(langs.len());
    while let Some(outcome) = rx.recv().await {
        translations.insert(outcome.target_lang, outcome.text);
    }

    TextResultSet {
        key: source_text_key(&text),
        translations,
    }
}
