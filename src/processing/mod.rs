//! Core relevance-ranking pipeline

pub mod chunker;
pub mod collection;
pub mod embeddings;
pub mod normalizer;
pub mod ranker;

pub use chunker::{Chunk, Chunker};
pub use collection::{CollectionConfig, CollectionProcessor, CollectionSummary};
pub use embeddings::{cosine_similarity, Embedder, EmbeddingEngine};
pub use normalizer::TextNormalizer;
pub use ranker::{RankedChunk, RelevanceRanker};
