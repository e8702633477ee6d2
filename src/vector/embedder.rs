//! Local fastembed model
//!
//! Downloads the model on first use (~100MB for AllMiniLmL6V2).

use super::{Embedder, VectorConfig, VectorModelType};
use crate::error::{TierError, TierResult};
use fastembed::{InitOptions, TextEmbedding};

pub struct FastEmbedder {
    model: TextEmbedding,
    model_type: VectorModelType,
}

impl FastEmbedder {
    pub fn new(config: &VectorConfig) -> TierResult<Self> {
        tracing::info!("[Embeddings] Loading model {}", config.model.as_str());

        let options = InitOptions::new(config.model.to_fastembed_model())
            .with_show_download_progress(config.show_download_progress);
        let model = TextEmbedding::try_new(options)
            .map_err(|e| TierError::Embedding(format!("Failed to load model: {}", e)))?;

        Ok(Self {
            model,
            model_type: config.model,
        })
    }
}

impl Embedder for FastEmbedder {
    fn embed(&self, texts: &[String]) -> TierResult<Vec<Vec<f32>>> {
        self.model
            .embed(texts.to_vec(), None)
            .map_err(|e| TierError::Embedding(e.to_string()))
    }

    fn model_name(&self) -> &str {
        self.model_type.as_str()
    }
}
