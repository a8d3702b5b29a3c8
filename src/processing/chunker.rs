//! Fixed-size word-count chunking

/// A contiguous run of words from one page's normalized text.
///
/// `index` is the chunk's position within its page, assigned left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
}

/// Splits normalized page text into groups of up to `chunk_size` words.
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    chunk_size: usize,
}

impl Chunker {
    pub fn new(chunk_size: usize) -> Self {
        // Config validation rejects 0; clamp anyway so chunks() never panics.
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Partition `text` into consecutive word groups, last group possibly
    /// shorter, each re-joined with single spaces. Empty or whitespace-only
    /// input yields no chunks.
    pub fn chunks(&self, text: &str) -> Vec<Chunk> {
        let words: Vec<&str> = text.split_whitespace().collect();

        words
            .chunks(self.chunk_size)
            .enumerate()
            .map(|(index, group)| Chunk {
                index,
                text: group.join(" "),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunker = Chunker::new(50);
        assert!(chunker.chunks("").is_empty());
        assert!(chunker.chunks("   \t\n  ").is_empty());
    }

    #[test]
    fn test_single_chunk_under_size() {
        let chunker = Chunker::new(50);
        let chunks = chunker.chunks("Paris is beautiful. Visit the Louvre.");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[0].text, "Paris is beautiful. Visit the Louvre.");
    }

    #[test]
    fn test_chunk_count_is_word_count_ceiling() {
        let text = (0..23).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        for chunk_size in 1..=25 {
            let chunker = Chunker::new(chunk_size);
            let chunks = chunker.chunks(&text);
            let expected = (23 + chunk_size - 1) / chunk_size;
            assert_eq!(chunks.len(), expected, "chunk_size {}", chunk_size);

            // Only the last chunk may be short.
            for chunk in &chunks[..chunks.len() - 1] {
                assert_eq!(chunk.text.split_whitespace().count(), chunk_size);
            }
            assert!(chunks.last().unwrap().text.split_whitespace().count() <= chunk_size);
        }
    }

    #[test]
    fn test_word_round_trip() {
        let text = "one  two\tthree\nfour five six seven";
        let chunker = Chunker::new(3);
        let rejoined = chunker
            .chunks(text)
            .iter()
            .map(|c| c.text.clone())
            .collect::<Vec<_>>()
            .join(" ");
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original.join(" "));
    }

    #[test]
    fn test_indices_are_sequential() {
        let text = "a b c d e f g";
        let chunker = Chunker::new(2);
        let chunks = chunker.chunks(text);
        let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_zero_size_clamped() {
        let chunker = Chunker::new(0);
        assert_eq!(chunker.chunk_size(), 1);
        assert_eq!(chunker.chunks("a b").len(), 2);
    }
}
