//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::PathBuf;
use std::sync::Arc;

/// Commands for the batch translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate every source text into every target language
    Translate {
        /// Input JSON document (source_lang, source_texts, supported_langs)
        #[arg(short, long, default_value = "input.json")]
        input: PathBuf,

        /// Output JSON file, overwritten if it exists
        #[arg(short, long, default_value = "translations_output.json")]
        output: PathBuf,
    },

    /// Validate the input document without translating anything
    CheckConfig {
        /// Input JSON document to validate
        #[arg(short, long, default_value = "input.json")]
        input: PathBuf,
    },
}

/// Handle the translate command
pub async fn handle_translate(input: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    use crate::core::client::HttpTranslator;
    use crate::core::config::BatchConfig;
    use crate::core::coordinator::FanOutCoordinator;
    use crate::core::writer::write_document;
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Duration;
    use tracing::info;

    info!("Starting batch translation");
    info!("Input: {}", input.display());
    info!("Output: {}", output.display());

    let config = BatchConfig::from_file(&input)?;
    config.validate()?;

    let translator = HttpTranslator::from_env()?;
    let coordinator = FanOutCoordinator::new(Arc::new(translator));

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(format!(
        "Translating {} texts into {} languages...",
        config.source_texts.len(),
        config.supported_langs.len()
    ));
    pb.enable_steady_tick(Duration::from_millis(100));

    let (document, summary) = coordinator.run(&config).await;

    pb.finish_with_message("Translation completed");

    write_document(&document, &output).await?;

    println!();
    println!("************************************************************");
    println!(
        "* Translated {} texts to {} languages",
        summary.total_texts, summary.total_langs
    );
    println!("* Total translations: {}", summary.total_attempts);
    println!("* Time took: {:?}", summary.elapsed);
    println!("************************************************************");
    println!();
    println!("✅ Translations written to {}", output.display());

    Ok(())
}

/// Handle the check-config command
pub async fn handle_check_config(input: PathBuf) -> anyhow::Result<()> {
    use crate::core::config::BatchConfig;
    use tracing::info;

    info!("Validating input document: {}", input.display());

    let config = BatchConfig::from_file(&input)?;
    config.validate()?;

    println!("✅ Input document is valid");
    println!("   Source language: {}", config.source_lang);
    println!("   Source texts: {}", config.source_texts.len());
    println!(
        "   Target languages ({}): {}",
        config.supported_langs.len(),
        config.supported_langs.join(", ")
    );

    Ok(())
}
