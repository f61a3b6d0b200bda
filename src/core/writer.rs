//! Output document writer

use std::path::Path;
use tracing::info;

use crate::core::errors::{Result, TranslationError};
use crate::core::models::OutputDocument;

/// Serialize the aggregate document to JSON and write it to `path`,
/// overwriting any existing file.
///
/// Failure here is fatal: completed translation work for the run is lost.
pub async fn write_document<P: AsRef<Path>>(document: &OutputDocument, path: P) -> Result<()> {
    let path = path.as_ref();

    let json =
        serde_json::to_vec_pretty(document).map_err(|e| TranslationError::WriteError {
            path: path.display().to_string(),
            message: format!("serialization failed: {}", e),
        })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| TranslationError::WriteError {
                    path: parent.display().to_string(),
                    message: e.to_string(),
                })?;
        }
    }

    tokio::fs::write(path, json)
        .await
        .map_err(|e| TranslationError::WriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    info!("translations written to {}", path.display());
    Ok(())
}
