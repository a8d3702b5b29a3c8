//! Page text normalization

use crate::input::PageBlock;

/// Collapses one page's positional blocks into a single text string.
pub struct TextNormalizer;

impl TextNormalizer {
    /// Join the text of every non-empty block with single spaces, preserving
    /// block order as given by the extraction engine. Whitespace-only blocks
    /// are dropped. Empty input yields an empty string.
    pub fn normalize(blocks: &[PageBlock]) -> String {
        blocks
            .iter()
            .map(|block| block.text.trim())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
