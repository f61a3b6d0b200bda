//! Main entry point for the batch translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod core;

use cli::commands::Commands;

/// Concurrent batch translator - fans source texts out to multiple languages
#[derive(Parser, Debug)]
#[command(name = "polyglot-translator", version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Maximum concurrent requests
    #[arg(long)]
    max_concurrent: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Override config with CLI args if provided
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    if let Some(max_concurrent) = args.max_concurrent {
        std::env::set_var("MAX_CONCURRENT", max_concurrent.to_string());
    }

    // Initialize logging
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_PKG_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Execute command
    match args.command {
        Some(Commands::Translate { input, output }) => {
            cli::commands::handle_translate(input, output).await?;
        }
        Some(Commands::CheckConfig { input }) => {
            cli::commands::handle_check_config(input).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
