//! Persona ranker: rank PDF passages against a persona/task query

mod batch;
mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::Result;
use input::PdfPageSource;
use log::error;
use processing::EmbeddingEngine;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Run {
            root,
            chunk_size,
            top_k,
            embedding,
        } => {
            if let Some(chunk_size) = chunk_size {
                config.processing.chunk_size = chunk_size;
            }
            if let Some(top_k) = top_k {
                config.processing.top_k = top_k;
            }
            if let Some(embedding) = embedding {
                config.models.embedding_model = embedding;
            }
            config.validate()?;

            run_collections(&root, &config).await?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Models Directory: {}", config.models_dir().display());
                println!("Embedding Model: {}", config.models.embedding_model);
                println!("\nProcessing:");
                println!("  Chunk Size: {} words", config.processing.chunk_size);
                println!("  Top-K per Page: {}", config.processing.top_k);
                println!("\nBatch Layout:");
                println!("  Collection Prefix: {}", config.batch.collection_prefix);
                println!("  Input File: {}", config.batch.input_file);
                println!("  Output File: {}", config.batch.output_file);
                println!("  PDF Directory: {}", config.batch.pdf_dir);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

async fn run_collections(root: &PathBuf, config: &Config) -> Result<()> {
    println!("🚀 Persona ranking batch");
    println!("📂 Root: {}", root.display());
    println!("🧠 Embedding Model: {}", config.models.embedding_model);

    // Loaded once and shared by reference across the whole batch.
    let embedder = EmbeddingEngine::from_config(config)?;
    let pages = PdfPageSource;

    let runs = batch::run_batch(root, config, &pages, &embedder).await?;

    if runs.is_empty() {
        println!(
            "⚠️  No collection directories matching '{}*' found under {}",
            config.batch.collection_prefix,
            root.display()
        );
        return Ok(());
    }

    let mut processed = 0;
    let mut failed = 0;

    for run in &runs {
        match &run.outcome {
            Ok(summary) => {
                processed += 1;
                println!(
                    "✅ {}: {} sections from {} document(s) ({} missing, {} page(s) with output)",
                    run.collection,
                    summary.sections,
                    summary.documents,
                    summary.missing_documents,
                    summary.pages_with_output
                );
                println!("   💾 {}", summary.output_path.display());
            }
            Err(e) => {
                failed += 1;
                println!("❌ {}: {}", run.collection, e);
            }
        }
    }

    println!(
        "\n🎯 Batch complete: {} processed, {} failed",
        processed, failed
    );

    Ok(())
}
