//! CLI interface for the persona ranker

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "persona-ranker")]
#[command(about = "Persona-driven section ranking over PDF document collections")]
#[command(
    long_about = "Rank passages from PDF collections against a persona/task query using local embeddings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process all collection units under a root directory
    Run {
        /// Root directory containing collection subdirectories
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Chunk size in words
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Ranked chunks kept per page
        #[arg(long)]
        top_k: Option<usize>,

        /// Embedding model name or local path
        #[arg(short, long)]
        embedding: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}
