//! Vector Module
//!
//! Embedding-similarity support for the embedding analysis tier. The tier only
//! sees the [`Embedder`] trait; the fastembed-backed implementation is compiled
//! in with the `fastembed` feature and runs fully locally.

#[cfg(feature = "fastembed")]
pub mod embedder;
pub mod search;

#[cfg(feature = "fastembed")]
pub use embedder::*;
pub use search::*;

use crate::error::TierResult;
use serde::{Deserialize, Serialize};

/// Configuration for the local embedding model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorConfig {
    /// Embedding model to use (default: AllMiniLmL6V2)
    pub model: VectorModelType,
    /// Print model download progress on first use
    pub show_download_progress: bool,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            model: VectorModelType::AllMiniLmL6V2,
            show_download_progress: false,
        }
    }
}

/// Supported embedding models
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VectorModelType {
    /// All-MiniLM-L6-v2: Fast, good quality, 384 dimensions
    AllMiniLmL6V2,
    /// BGE-Small-EN-v1.5: Compact, English-focused
    BgeSmallEnV15,
}

impl VectorModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VectorModelType::AllMiniLmL6V2 => "all-minilm-l6-v2",
            VectorModelType::BgeSmallEnV15 => "bge-small-en-v1.5",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all-minilm-l6-v2" | "allminilml6v2" => Some(VectorModelType::AllMiniLmL6V2),
            "bge-small-en-v1.5" | "bgesmallenv15" => Some(VectorModelType::BgeSmallEnV15),
            _ => None,
        }
    }

    /// Convert to fastembed's EmbeddingModel enum
    #[cfg(feature = "fastembed")]
    pub fn to_fastembed_model(&self) -> fastembed::EmbeddingModel {
        match self {
            VectorModelType::AllMiniLmL6V2 => fastembed::EmbeddingModel::AllMiniLML6V2,
            VectorModelType::BgeSmallEnV15 => fastembed::EmbeddingModel::BGESmallENV15,
        }
    }
}

/// Text embedding model.
///
/// Implementations are blocking; callers run them on a blocking thread.
pub trait Embedder: Send + Sync {
    /// Embed a batch of texts, one vector per input in the same order
    fn embed(&self, texts: &[String]) -> TierResult<Vec<Vec<f32>>>;

    fn model_name(&self) -> &str;
}

/// Cosine similarity of two vectors; 0.0 for empty, mismatched or zero vectors
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
