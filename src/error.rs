//! Error handling for the persona ranker

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Embedding generation error: {0}")]
    Embedding(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Missing keys in {}: {}", .path.display(), .missing.join(", "))]
    MissingKeys { path: PathBuf, missing: Vec<String> },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, RankerError>;

/// Convert anyhow errors (surfaced by the embedding model) to our error type
impl From<anyhow::Error> for RankerError {
    fn from(err: anyhow::Error) -> Self {
        RankerError::Embedding(err.to_string())
    }
}
