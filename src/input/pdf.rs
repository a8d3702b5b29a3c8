//! Per-page text extraction from PDF documents

use crate::error::{RankerError, Result};
use std::path::Path;
use tokio::fs;

/// A positional text fragment on one page, in reading order.
///
/// Geometry is carried through from the extraction engine when available but
/// is not consumed by the ranking pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PageBlock {
    pub bbox: Option<[f32; 4]>,
    pub text: String,
}

impl PageBlock {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            bbox: None,
            text: text.into(),
        }
    }
}

/// Extraction engine boundary: one ordered block sequence per page.
pub trait PageSource {
    fn extract_pages(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<Vec<Vec<PageBlock>>>> + Send;
}

/// `pdf-extract` backed page source.
pub struct PdfPageSource;

impl PageSource for PdfPageSource {
    async fn extract_pages(&self, path: &Path) -> Result<Vec<Vec<PageBlock>>> {
        let bytes = fs::read(path).await.map_err(RankerError::Io)?;

        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
            RankerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;

        // The engine hands back one string per page; each line becomes a
        // block so downstream sees fragments in reading order.
        Ok(pages
            .iter()
            .map(|page| page.lines().map(PageBlock::from_text).collect())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_block_from_text() {
        let block = PageBlock::from_text("Paris is beautiful.");
        assert_eq!(block.text, "Paris is beautiful.");
        assert!(block.bbox.is_none());
    }
}
