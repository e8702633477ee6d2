//! Remote LLM classifier tier

use super::ClassifierTier;
use crate::ai::json_parser::extract_json;
use crate::ai::prompts::build_classification_prompt;
use crate::ai::{OpenRouterClient, Sampling};
use crate::error::{TierError, TierResult};
use crate::knowledge::KnowledgeProvider;
use crate::models::{
    AnalysisSource, Category, Classification, Complaint, Priority, Sentiment, DEFAULT_DEPARTMENT,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

const SAMPLING: Sampling = Sampling::new(500, 0.7);

/// Confidence assumed when the provider omits it
const DEFAULT_CONFIDENCE: f32 = 0.8;

/// Fields the classification prompt asks for. All optional; present values
/// must still be valid.
#[derive(Debug, Deserialize)]
struct RemoteAnalysis {
    category: Option<String>,
    priority: Option<String>,
    department: Option<String>,
    sentiment: Option<String>,
    confidence: Option<serde_json::Value>,
    district: Option<String>,
}

impl RemoteAnalysis {
    fn into_classification(self, knowledge: &dyn KnowledgeProvider) -> TierResult<Classification> {
        let category = parse_field("category", self.category, Category::parse)?
            .unwrap_or(Category::Other);
        let priority = parse_field("priority", self.priority, Priority::parse)?
            .unwrap_or(Priority::Medium);
        let sentiment = parse_field("sentiment", self.sentiment, Sentiment::parse)?
            .unwrap_or(Sentiment::Neutral);

        let confidence = match self.confidence {
            None | Some(serde_json::Value::Null) => DEFAULT_CONFIDENCE,
            Some(value) => parse_confidence(&value).ok_or_else(|| {
                TierError::Upstream(format!("Unrecognized confidence: {}", value))
            })?,
        };

        let department = self
            .department
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .or_else(|| knowledge.department_name(category).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string());

        let district = self
            .district
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Classification {
            category,
            priority,
            department,
            sentiment,
            confidence: confidence.clamp(0.0, 1.0),
            source: AnalysisSource::Remote,
            suggested_response: format!(
                "Thank you for your {} complaint. We will address it promptly.",
                category.as_str().to_lowercase()
            ),
            district,
        })
    }
}

/// Absent or blank is `None`; present but unrecognized is a schema mismatch
fn parse_field<T>(
    name: &str,
    value: Option<String>,
    parse: impl Fn(&str) -> Option<T>,
) -> TierResult<Option<T>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse(raw)
            .map(Some)
            .ok_or_else(|| TierError::Upstream(format!("Unrecognized {}: {:?}", name, raw))),
    }
}

fn parse_confidence(value: &serde_json::Value) -> Option<f32> {
    let parsed: Option<f32> = match value {
        serde_json::Value::Number(n) => n.as_f64().map(|f| f as f32),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

/// Asks the chat-completions provider for a JSON classification
pub struct RemoteClassifierTier {
    client: Option<Arc<OpenRouterClient>>,
    knowledge: Arc<dyn KnowledgeProvider>,
    budget: Duration,
    document_count: usize,
}

impl RemoteClassifierTier {
    pub fn new(
        client: Option<Arc<OpenRouterClient>>,
        knowledge: Arc<dyn KnowledgeProvider>,
        budget: Duration,
    ) -> Self {
        let document_count = knowledge.training_documents().len();
        Self {
            client,
            knowledge,
            budget,
            document_count,
        }
    }
}

#[async_trait]
impl ClassifierTier for RemoteClassifierTier {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn budget(&self) -> Option<Duration> {
        Some(self.budget)
    }

    async fn classify(&self, complaint: &Complaint) -> TierResult<Classification> {
        let client = self
            .client
            .as_ref()
            .ok_or(TierError::Config("OPENROUTER_API_KEY"))?;

        let prompt =
            build_classification_prompt(&complaint.text, &complaint.language, self.document_count);
        let reply = client.chat(&prompt, SAMPLING).await?;

        let parsed: RemoteAnalysis = extract_json(&reply).map_err(TierError::Upstream)?;
        parsed.into_classification(self.knowledge.as_ref())
    }
}
