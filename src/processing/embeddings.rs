//! Embedding generation and similarity

use crate::config::Config;
use crate::error::{RankerError, Result};
use log::info;
use model2vec_rs::model::StaticModel;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Embedding model boundary.
///
/// Encodes text into fixed-dimension vectors comparable by cosine similarity.
/// Implementations are treated as blocking, single-threaded dependencies:
/// constructed once at startup and passed by reference through the batch, so
/// tests can substitute a deterministic stub.
pub trait Embedder {
    fn encode(&self, text: &str) -> Vec<f32>;
    fn encode_batch(&self, texts: &[String]) -> Vec<Vec<f32>>;
}

/// Model2Vec backed embedding engine.
pub struct EmbeddingEngine {
    model: StaticModel,
    model_name: String,
}

impl EmbeddingEngine {
    pub fn new(model_path: &Path, model_name: &str) -> Result<Self> {
        let start_time = Instant::now();
        info!("Loading Model2Vec embedding model from: {}", model_path.display());

        let model = StaticModel::from_pretrained(
            model_path,
            None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| RankerError::Embedding(format!("Failed to load model: {}", e)))?;

        info!("Model loaded in {:.2?}", start_time.elapsed());

        Ok(Self {
            model,
            model_name: model_name.to_string(),
        })
    }

    /// Load the configured model, preferring a local copy under the models
    /// directory and falling back to the name as a HuggingFace repo id.
    pub fn from_config(config: &Config) -> Result<Self> {
        let model_name = &config.models.embedding_model;
        let local_path = config.models_dir().join(model_name);
        let model_path = if local_path.exists() {
            local_path
        } else {
            PathBuf::from(model_name)
        };
        Self::new(&model_path, model_name)
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl Embedder for EmbeddingEngine {
    fn encode(&self, text: &str) -> Vec<f32> {
        self.model.encode_single(text)
    }

    fn encode_batch(&self, texts: &[String]) -> Vec<Vec<f32>> {
        self.model.encode(texts)
    }
}

/// Cosine similarity between two vectors, in [-1, 1].
///
/// Defined as 0.0 when either vector has zero magnitude or the dimensions
/// disagree, so degenerate embeddings never poison a ranking.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}
