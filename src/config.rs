//! Configuration management for the persona ranker

use crate::error::{RankerError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub models: ModelConfig,
    pub processing: ProcessingConfig,
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub models_dir: PathBuf,
    pub embedding_model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Chunk granularity in words.
    pub chunk_size: usize,
    /// Ranked chunks kept per page.
    pub top_k: usize,
}

/// Filesystem layout of a batch root and its collection units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Directories whose name starts with this prefix are collection units.
    pub collection_prefix: String,
    pub input_file: String,
    pub output_file: String,
    pub pdf_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".persona-ranker")
            .join("models");

        Self {
            models: ModelConfig {
                models_dir,
                embedding_model: "minishlab/M2V_base_output".to_string(),
            },
            processing: ProcessingConfig {
                chunk_size: 50,
                top_k: 5,
            },
            batch: BatchConfig {
                collection_prefix: "Collection".to_string(),
                input_file: "challenge1b_input.json".to_string(),
                output_file: "challenge1b_output.json".to_string(),
                pdf_dir: "PDFs".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                RankerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            RankerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.processing.chunk_size == 0 {
            return Err(RankerError::Configuration(
                "processing.chunk_size must be at least 1".to_string(),
            ));
        }
        if self.processing.top_k == 0 {
            return Err(RankerError::Configuration(
                "processing.top_k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("persona-ranker")
            .join("config.toml")
    }

    pub fn models_dir(&self) -> &PathBuf {
        &self.models.models_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.processing.chunk_size, 50);
        assert_eq!(config.processing.top_k, 5);
        assert_eq!(config.batch.collection_prefix, "Collection");
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let mut config = Config::default();
        config.processing.chunk_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.batch.input_file, config.batch.input_file);
        assert_eq!(parsed.models.embedding_model, config.models.embedding_model);
    }
}
