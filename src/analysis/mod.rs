//! Complaint analysis
//!
//! [`AnalysisOrchestrator`] runs the configured classifier tiers in order and
//! returns the first success. The rule-based [`KnowledgeScorer`] always runs
//! last and cannot fail, so `analyze` always produces a result.

pub mod embedding;
pub mod remote;
pub mod scorer;

pub use embedding::EmbeddingTier;
pub use remote::RemoteClassifierTier;
pub use scorer::KnowledgeScorer;

use crate::error::{TierError, TierResult};
use crate::knowledge::KnowledgeProvider;
use crate::models::{Classification, ClassificationResult, Complaint};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// One fallible classification stage
#[async_trait]
pub trait ClassifierTier: Send + Sync {
    fn name(&self) -> &'static str;

    /// Time allowed for one attempt; `None` means unbounded
    fn budget(&self) -> Option<Duration> {
        None
    }

    async fn classify(&self, complaint: &Complaint) -> TierResult<Classification>;
}

/// Run one tier attempt within its budget
pub(crate) async fn attempt<T, F>(budget: Option<Duration>, call: F) -> TierResult<T>
where
    F: std::future::Future<Output = TierResult<T>>,
{
    match budget {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .unwrap_or(Err(TierError::Timeout(limit))),
        None => call.await,
    }
}

/// Log a tier failure; missing configuration is expected and kept quiet
pub(crate) fn log_tier_failure(component: &str, tier: &str, error: &TierError) {
    match error {
        TierError::Config(_) => {
            tracing::debug!("[{}] Skipping {} tier: {}", component, tier, error)
        }
        _ => tracing::warn!("[{}] {} tier failed, falling through: {}", component, tier, error),
    }
}

pub struct AnalysisOrchestrator {
    knowledge: Arc<dyn KnowledgeProvider>,
    tiers: Vec<Box<dyn ClassifierTier>>,
    scorer: KnowledgeScorer,
}

impl AnalysisOrchestrator {
    /// Orchestrator with only the rule-based tier
    pub fn new(knowledge: Arc<dyn KnowledgeProvider>) -> Self {
        let scorer = KnowledgeScorer::new(Arc::clone(&knowledge));
        Self {
            knowledge,
            tiers: Vec::new(),
            scorer,
        }
    }

    /// Append a tier; tiers run in the order they were added
    pub fn with_tier(mut self, tier: impl ClassifierTier + 'static) -> Self {
        self.tiers.push(Box::new(tier));
        self
    }

    /// Tier names in evaluation order, ending with the rule-based tier
    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers
            .iter()
            .map(|t| t.name())
            .chain(std::iter::once("rule-based"))
            .collect()
    }

    pub async fn analyze(&self, complaint: &Complaint) -> ClassificationResult {
        for tier in &self.tiers {
            match attempt(tier.budget(), tier.classify(complaint)).await {
                Ok(classification) => {
                    tracing::info!(
                        "[Analysis] {} tier classified complaint {} as {} / {}",
                        tier.name(),
                        complaint.id,
                        classification.category,
                        classification.priority
                    );
                    return self.enrich(classification);
                }
                Err(e) => log_tier_failure("Analysis", tier.name(), &e),
            }
        }

        let classification = self.scorer.classify(&complaint.text);
        tracing::info!(
            "[Analysis] rule-based tier classified complaint {} as {} / {}",
            complaint.id,
            classification.category,
            classification.priority
        );
        self.enrich(classification)
    }

    fn enrich(&self, classification: Classification) -> ClassificationResult {
        let record = self
            .knowledge
            .resolve_department(classification.category, &classification.department);
        ClassificationResult::enrich(classification, record)
    }
}
