//! Per-collection output report

use crate::error::Result;
use crate::processing::ranker::RankedChunk;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Run metadata persisted alongside the ranked output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub documents: Vec<String>,
    pub persona: String,
    pub job: String,
    /// RFC 3339 generation timestamp.
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedSection {
    pub document: String,
    pub page_number: usize,
    pub section_title: String,
    pub importance_rank: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsectionAnalysis {
    pub document: String,
    pub page_number: usize,
    pub refined_text: String,
}

/// One serialized record per collection unit.
///
/// `extracted_sections` and `subsection_analysis` are always the same length
/// and correspond positionally: every ranked chunk contributes exactly one
/// entry to each, in document order, then page order, then rank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionOutput {
    pub metadata: Metadata,
    pub extracted_sections: Vec<ExtractedSection>,
    pub subsection_analysis: Vec<SubsectionAnalysis>,
}

impl CollectionOutput {
    pub fn new(documents: Vec<String>, persona: String, job: String) -> Self {
        Self {
            metadata: Metadata {
                documents,
                persona,
                job,
                timestamp: Utc::now().to_rfc3339(),
            },
            extracted_sections: Vec::new(),
            subsection_analysis: Vec::new(),
        }
    }

    /// Emit the paired section/analysis rows for one ranked chunk.
    pub fn push_ranked_chunk(&mut self, document: &str, page_number: usize, chunk: &RankedChunk) {
        self.extracted_sections.push(ExtractedSection {
            document: document.to_string(),
            page_number,
            section_title: derive_section_title(&chunk.text),
            importance_rank: round_score(chunk.score),
        });
        self.subsection_analysis.push(SubsectionAnalysis {
            document: document.to_string(),
            page_number,
            refined_text: chunk.text.clone(),
        });
    }

    pub fn len(&self) -> usize {
        self.extracted_sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extracted_sections.is_empty()
    }

    pub async fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

/// Title heuristic: text up to the first period, capped at 60 characters.
///
/// Known limitation rather than a naming guarantee: abbreviations such as
/// "Dr." cut the title short, and period-free text is truncated mid-sentence.
pub fn derive_section_title(text: &str) -> String {
    let first_sentence = text.split('.').next().unwrap_or(text);
    first_sentence.chars().take(60).collect()
}

/// Similarity score rounded to 4 decimal places for output.
pub fn round_score(score: f32) -> f64 {
    (score as f64 * 10_000.0).round() / 10_000.0
}
