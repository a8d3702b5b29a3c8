//! Relevance ranking of chunks against a query embedding

use crate::processing::chunker::Chunk;
use crate::processing::embeddings::cosine_similarity;

/// One ranked chunk: original page-local index, full text, cosine score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedChunk {
    pub index: usize,
    pub text: String,
    pub score: f32,
}

/// Scores chunks against a query vector and keeps the `top_k` best.
#[derive(Debug, Clone, Copy)]
pub struct RelevanceRanker {
    top_k: usize,
}

impl RelevanceRanker {
    pub fn new(top_k: usize) -> Self {
        Self { top_k }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Rank `chunks` by cosine similarity of their embeddings against
    /// `query`, descending. Ties resolve by ascending chunk index so the
    /// output is reproducible across runs. At most `top_k` results; a single
    /// chunk yields exactly one result, no chunks yield none.
    ///
    /// `embeddings` must be positionally aligned with `chunks`; a missing
    /// embedding scores 0.
    pub fn rank(
        &self,
        chunks: &[Chunk],
        embeddings: &[Vec<f32>],
        query: &[f32],
    ) -> Vec<RankedChunk> {
        if chunks.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<RankedChunk> = chunks
            .iter()
            .map(|chunk| {
                let score = embeddings
                    .get(chunk.index)
                    .map(|embedding| cosine_similarity(embedding, query))
                    .unwrap_or(0.0);
                RankedChunk {
                    index: chunk.index,
                    text: chunk.text.clone(),
                    score,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.index.cmp(&b.index))
        });
        ranked.truncate(self.top_k);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(texts: &[&str]) -> Vec<Chunk> {
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| Chunk {
                index,
                text: text.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let ranker = RelevanceRanker::new(5);
        assert!(ranker.rank(&[], &[], &[1.0, 0.0]).is_empty());
    }

    #[test]
    fn test_single_chunk_yields_one_result() {
        let ranker = RelevanceRanker::new(5);
        let chunks = chunks(&["only chunk"]);
        let embeddings = vec![vec![0.5, 0.5]];
        let ranked = ranker.rank(&chunks, &embeddings, &[0.5, 0.5]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].index, 0);
        assert!((ranked[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_orders_by_descending_score() {
        let ranker = RelevanceRanker::new(5);
        let chunks = chunks(&["low", "high", "mid"]);
        let embeddings = vec![
            vec![0.1, 1.0],  // low alignment with query
            vec![1.0, 0.0],  // perfect
            vec![1.0, 0.5],  // middle
        ];
        let ranked = ranker.rank(&chunks, &embeddings, &[1.0, 0.0]);
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_truncates_to_top_k() {
        let ranker = RelevanceRanker::new(2);
        let chunks = chunks(&["a", "b", "c", "d"]);
        let embeddings = vec![
            vec![1.0, 0.0],
            vec![0.9, 0.1],
            vec![0.5, 0.5],
            vec![0.0, 1.0],
        ];
        let ranked = ranker.rank(&chunks, &embeddings, &[1.0, 0.0]);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].index, 0);
        assert_eq!(ranked[1].index, 1);
    }

    #[test]
    fn test_ties_resolve_by_ascending_index() {
        let ranker = RelevanceRanker::new(5);
        let chunks = chunks(&["first", "second", "third"]);
        // Identical embeddings: every chunk scores the same.
        let embeddings = vec![vec![1.0, 1.0]; 3];
        let ranked = ranker.rank(&chunks, &embeddings, &[1.0, 1.0]);
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let ranker = RelevanceRanker::new(3);
        let chunks = chunks(&["a", "b", "c", "d", "e"]);
        let embeddings = vec![
            vec![0.2, 0.8],
            vec![0.8, 0.2],
            vec![0.8, 0.2],
            vec![0.5, 0.5],
            vec![0.1, 0.9],
        ];
        let query = vec![1.0, 0.0];
        let first = ranker.rank(&chunks, &embeddings, &query);
        let second = ranker.rank(&chunks, &embeddings, &query);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_query_scores_all_zero() {
        let ranker = RelevanceRanker::new(5);
        let chunks = chunks(&["a", "b"]);
        let embeddings = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let ranked = ranker.rank(&chunks, &embeddings, &[0.0, 0.0]);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.score == 0.0));
        // Tie-break keeps original order.
        assert_eq!(ranked[0].index, 0);
    }
}
