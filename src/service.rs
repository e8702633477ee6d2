//! End-to-end triage: complaint → analysis → reply

use crate::ai::{OpenRouterClient, WatsonxClient};
use crate::analysis::{AnalysisOrchestrator, EmbeddingTier, RemoteClassifierTier};
use crate::config::TriageConfig;
use crate::generation::{ChatReplyTier, ResponseGenerator, StreamingReplyTier};
use crate::knowledge::{BuiltinKnowledge, KnowledgeProvider, KnowledgeStats};
use crate::models::{ClassificationResult, Complaint};
use crate::vector::Embedder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_CHAT_TIMEOUT: Duration = Duration::from_secs(30);

/// Result of handling one complaint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageOutcome {
    pub complaint_id: uuid::Uuid,
    pub language: String,
    pub analysis: ClassificationResult,
    pub reply: String,
    pub timestamp: DateTime<Utc>,
}

/// Which optional tiers are wired in, plus dataset sizes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub streaming_configured: bool,
    pub chat_configured: bool,
    /// Model the chat tiers ask for
    pub chat_model: Option<String>,
    pub embeddings_model: Option<String>,
    pub analysis_tiers: Vec<&'static str>,
    pub generation_tiers: Vec<&'static str>,
    pub knowledge: KnowledgeStats,
}

pub struct TriageService {
    analyzer: AnalysisOrchestrator,
    generator: ResponseGenerator,
    status: ServiceStatus,
}

impl TriageService {
    /// Service over the built-in dataset
    pub fn from_config(config: &TriageConfig, embedder: Option<Arc<dyn Embedder>>) -> Self {
        let knowledge = BuiltinKnowledge::new();
        let stats = knowledge.stats();
        Self::with_knowledge(config, Arc::new(knowledge), stats, embedder)
    }

    /// Service over any knowledge provider
    pub fn with_knowledge(
        config: &TriageConfig,
        knowledge: Arc<dyn KnowledgeProvider>,
        stats: KnowledgeStats,
        embedder: Option<Arc<dyn Embedder>>,
    ) -> Self {
        let http = reqwest::Client::new();

        let openrouter = config
            .openrouter
            .clone()
            .map(|c| Arc::new(OpenRouterClient::new(http.clone(), c)));
        let chat_timeout = config
            .openrouter
            .as_ref()
            .map_or(DEFAULT_CHAT_TIMEOUT, |c| c.timeout);

        let watsonx = config
            .watsonx
            .clone()
            .map(|c| Arc::new(WatsonxClient::new(http.clone(), c)));
        let stream_timeout = config
            .watsonx
            .as_ref()
            .map_or(Duration::from_secs(60), |c| {
                c.stream_timeout.saturating_add(c.auth_timeout)
            });

        let mut analyzer = AnalysisOrchestrator::new(Arc::clone(&knowledge)).with_tier(
            RemoteClassifierTier::new(openrouter.clone(), Arc::clone(&knowledge), chat_timeout),
        );

        let embedder = embedder.filter(|_| config.embeddings_enabled);
        let embeddings_model = embedder.as_ref().map(|e| e.model_name().to_string());
        if let Some(embedder) = embedder {
            analyzer = analyzer.with_tier(EmbeddingTier::new(embedder, Arc::clone(&knowledge)));
        }

        let generator = ResponseGenerator::new(Arc::clone(&knowledge))
            .with_tier(StreamingReplyTier::new(watsonx.clone(), stream_timeout))
            .with_tier(ChatReplyTier::new(openrouter.clone(), chat_timeout));

        let status = ServiceStatus {
            streaming_configured: watsonx.is_some(),
            chat_configured: openrouter.is_some(),
            chat_model: openrouter.as_ref().map(|c| c.model().to_string()),
            embeddings_model,
            analysis_tiers: analyzer.tier_names(),
            generation_tiers: generator.tier_names(),
            knowledge: stats,
        };

        tracing::info!(
            "[Triage] Ready: analysis {:?}, generation {:?}",
            status.analysis_tiers,
            status.generation_tiers
        );

        Self {
            analyzer,
            generator,
            status,
        }
    }

    pub async fn analyze(&self, complaint: &Complaint) -> ClassificationResult {
        self.analyzer.analyze(complaint).await
    }

    /// Classify a complaint and write a reply for it. Never fails.
    pub async fn handle(&self, complaint: &Complaint) -> TriageOutcome {
        tracing::info!(
            "[Triage] Processing complaint {}: {}...",
            complaint.id,
            complaint.text.chars().take(50).collect::<String>()
        );

        let analysis = self.analyzer.analyze(complaint).await;
        let reply = self.generator.respond(complaint, &analysis).await;

        TriageOutcome {
            complaint_id: complaint.id,
            language: complaint.language.clone(),
            analysis,
            reply,
            timestamp: Utc::now(),
        }
    }

    pub fn generator(&self) -> &ResponseGenerator {
        &self.generator
    }

    pub fn status(&self) -> &ServiceStatus {
        &self.status
    }
}
