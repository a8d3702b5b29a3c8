//! Collection unit orchestration
//!
//! A collection unit is one persona/job query plus a set of PDF documents.
//! Processing is linear: load and validate the input config, embed the query
//! once, then walk every page of every document through normalize, chunk,
//! embed, rank, and emit the paired output rows.

use crate::config::Config;
use crate::error::{RankerError, Result};
use crate::input::PageSource;
use crate::output::CollectionOutput;
use crate::processing::chunker::Chunker;
use crate::processing::embeddings::Embedder;
use crate::processing::normalizer::TextNormalizer;
use crate::processing::ranker::RelevanceRanker;
use log::{debug, info, warn};
use serde_json::Value;
use std::path::{Path, PathBuf};

const REQUIRED_KEYS: [&str; 3] = ["persona", "job", "documents"];

/// Validated per-collection input config.
#[derive(Debug, Clone)]
pub struct CollectionConfig {
    pub persona: String,
    pub job: String,
    /// Resolved document filenames, empty entries dropped.
    pub documents: Vec<String>,
}

impl CollectionConfig {
    /// Parse a collection input config, reporting every missing required key
    /// at once.
    pub fn from_value(value: &Value, path: &Path) -> Result<Self> {
        let missing: Vec<String> = REQUIRED_KEYS
            .iter()
            .filter(|key| value.get(**key).is_none())
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(RankerError::MissingKeys {
                path: path.to_path_buf(),
                missing,
            });
        }

        let persona = value["persona"]
            .as_str()
            .ok_or_else(|| {
                RankerError::Configuration(format!(
                    "'persona' in {} must be a string",
                    path.display()
                ))
            })?
            .to_string();

        let job = value["job"]
            .as_str()
            .ok_or_else(|| {
                RankerError::Configuration(format!("'job' in {} must be a string", path.display()))
            })?
            .to_string();

        let documents = value["documents"]
            .as_array()
            .ok_or_else(|| {
                RankerError::Configuration(format!(
                    "'documents' in {} must be a list",
                    path.display()
                ))
            })?
            .iter()
            .filter_map(resolve_document_entry)
            .filter(|name| !name.is_empty())
            .collect();

        Ok(Self {
            persona,
            job,
            documents,
        })
    }

    /// The query string embedded once per collection.
    pub fn query_text(&self) -> String {
        format!("{}. Task: {}", self.persona, self.job)
    }
}

/// A document entry is either a bare filename or an object with a `filename`
/// field; anything else is dropped.
fn resolve_document_entry(entry: &Value) -> Option<String> {
    match entry {
        Value::String(name) => Some(name.clone()),
        Value::Object(map) => map
            .get("filename")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        _ => None,
    }
}

/// What one successfully processed collection produced.
#[derive(Debug, Clone)]
pub struct CollectionSummary {
    pub output_path: PathBuf,
    pub documents: usize,
    pub missing_documents: usize,
    pub pages_with_output: usize,
    pub sections: usize,
}

/// Processes one collection unit end to end.
pub struct CollectionProcessor<'a, P, E> {
    pages: &'a P,
    embedder: &'a E,
    chunker: Chunker,
    ranker: RelevanceRanker,
    config: &'a Config,
}

impl<'a, P: PageSource, E: Embedder> CollectionProcessor<'a, P, E> {
    pub fn new(pages: &'a P, embedder: &'a E, config: &'a Config) -> Self {
        Self {
            pages,
            embedder,
            chunker: Chunker::new(config.processing.chunk_size),
            ranker: RelevanceRanker::new(config.processing.top_k),
            config,
        }
    }

    /// Run the full pipeline for one collection directory and write its
    /// output report. Missing documents and empty pages are skipped, not
    /// errors; a malformed input config fails the collection.
    pub async fn process(&self, collection_dir: &Path) -> Result<CollectionSummary> {
        let input_path = collection_dir.join(&self.config.batch.input_file);
        let pdf_dir = collection_dir.join(&self.config.batch.pdf_dir);
        let output_path = collection_dir.join(&self.config.batch.output_file);

        let raw = tokio::fs::read_to_string(&input_path).await?;
        let value: Value = serde_json::from_str(&raw)?;
        let collection = CollectionConfig::from_value(&value, &input_path)?;

        info!(
            "Processing {} ({} documents)",
            collection_dir.display(),
            collection.documents.len()
        );

        let query_embedding = self.embedder.encode(&collection.query_text());

        let mut output = CollectionOutput::new(
            collection.documents.clone(),
            collection.persona.clone(),
            collection.job.clone(),
        );
        let mut missing_documents = 0;
        let mut pages_with_output = 0;

        for doc_file in &collection.documents {
            let pdf_path = pdf_dir.join(doc_file);
            if !pdf_path.exists() {
                warn!("File not found: {}. Skipping.", pdf_path.display());
                missing_documents += 1;
                continue;
            }

            let document_pages = self.pages.extract_pages(&pdf_path).await?;

            for (page_idx, blocks) in document_pages.iter().enumerate() {
                let page_number = page_idx + 1;

                let text = TextNormalizer::normalize(blocks);
                if text.is_empty() {
                    continue;
                }

                let chunks = self.chunker.chunks(&text);
                if chunks.is_empty() {
                    continue;
                }

                // Embed all of this page's chunks in one batch.
                let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
                let embeddings = self.embedder.encode_batch(&texts);

                let ranked = self.ranker.rank(&chunks, &embeddings, &query_embedding);
                if ranked.is_empty() {
                    continue;
                }

                debug!(
                    "{} page {}: {} chunks, kept {}",
                    doc_file,
                    page_number,
                    chunks.len(),
                    ranked.len()
                );

                pages_with_output += 1;
                for chunk in &ranked {
                    output.push_ranked_chunk(doc_file, page_number, chunk);
                }
            }
        }

        let sections = output.len();
        output.write(&output_path).await?;

        Ok(CollectionSummary {
            output_path,
            documents: collection.documents.len(),
            missing_documents,
            pages_with_output,
            sections,
        })
    }
}
