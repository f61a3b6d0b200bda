//! Concurrent batch translator
//!
//! Fans a list of source texts out to an external translation provider, one
//! concurrent call per (text, target language) pair, and persists the
//! aggregated results as a JSON document keyed by source text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::{HttpTranslator, Translate},
    config::{BatchConfig, ClientConfig},
    coordinator::FanOutCoordinator,
    errors::TranslationError,
    models::{OutputDocument, RunSummary, TextResultSet, TranslationRequest},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
