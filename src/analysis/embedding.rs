//! Embedding-similarity classifier tier
//!
//! Embeds the complaint and the knowledge provider's training corpus, then
//! adopts the category and department of the closest document. Fields the
//! document's metadata lacks come from the rule-based scorer.

use super::scorer::{suggested_response, KnowledgeScorer};
use super::ClassifierTier;
use crate::error::{TierError, TierResult};
use crate::knowledge::KnowledgeProvider;
use crate::models::{AnalysisSource, Category, Classification, Complaint, KnowledgeDocument};
use crate::vector::{best_match, Embedder};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Training corpus with one embedding per document
struct DocumentIndex {
    documents: Vec<KnowledgeDocument>,
    embeddings: Vec<Vec<f32>>,
}

pub struct EmbeddingTier {
    embedder: Arc<dyn Embedder>,
    knowledge: Arc<dyn KnowledgeProvider>,
    scorer: KnowledgeScorer,
    index: OnceCell<DocumentIndex>,
}

impl EmbeddingTier {
    pub fn new(embedder: Arc<dyn Embedder>, knowledge: Arc<dyn KnowledgeProvider>) -> Self {
        let scorer = KnowledgeScorer::new(Arc::clone(&knowledge));
        Self {
            embedder,
            knowledge,
            scorer,
            index: OnceCell::new(),
        }
    }

    /// Corpus embeddings, computed on first use. A failed build is retried on
    /// the next call.
    async fn index(&self) -> TierResult<&DocumentIndex> {
        self.index
            .get_or_try_init(|| async {
                let documents = self.knowledge.training_documents();
                let texts: Vec<String> = documents.iter().map(|d| d.content.clone()).collect();

                tracing::info!(
                    "[Analysis] Embedding {} knowledge documents with {}",
                    texts.len(),
                    self.embedder.model_name()
                );
                let embeddings = embed_blocking(Arc::clone(&self.embedder), texts).await?;

                if embeddings.len() != documents.len() {
                    return Err(TierError::Embedding(format!(
                        "Expected {} document vectors, got {}",
                        documents.len(),
                        embeddings.len()
                    )));
                }

                Ok(DocumentIndex {
                    documents,
                    embeddings,
                })
            })
            .await
    }
}

async fn embed_blocking(embedder: Arc<dyn Embedder>, texts: Vec<String>) -> TierResult<Vec<Vec<f32>>> {
    tokio::task::spawn_blocking(move || embedder.embed(&texts))
        .await
        .map_err(|e| TierError::Embedding(format!("Embedding task failed: {}", e)))?
}

#[async_trait]
impl ClassifierTier for EmbeddingTier {
    fn name(&self) -> &'static str {
        "embedding"
    }

    async fn classify(&self, complaint: &Complaint) -> TierResult<Classification> {
        let index = self.index().await?;

        let query = embed_blocking(Arc::clone(&self.embedder), vec![complaint.text.clone()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| TierError::Embedding("No vector for complaint".to_string()))?;

        let (best, score) = best_match(&query, &index.embeddings)
            .ok_or_else(|| TierError::Embedding("Knowledge corpus is empty".to_string()))?;
        let document = &index.documents[best];

        let base = self.scorer.classify(&complaint.text);
        let category = document
            .metadata
            .get("category")
            .and_then(|c| Category::parse(c))
            .unwrap_or(base.category);
        let department = document
            .metadata
            .get("department")
            .filter(|d| !d.trim().is_empty())
            .cloned()
            .unwrap_or(base.department);

        tracing::debug!(
            "[Analysis] Closest document #{} ({:.3}): {:?}",
            best,
            score,
            document.metadata.get("type")
        );

        let suggested_response = suggested_response(self.knowledge.as_ref(), category, &department);

        Ok(Classification {
            category,
            department,
            confidence: score.clamp(0.0, 1.0),
            source: AnalysisSource::Embedding,
            suggested_response,
            ..base
        })
    }
}
