//! Reply generation
//!
//! [`ResponseGenerator`] tries the streaming provider, then the chat provider,
//! and finally renders a reply template from the knowledge provider. The
//! template step cannot fail, so every complaint gets a reply.

pub mod tiers;

pub use tiers::{ChatReplyTier, StreamingReplyTier};

use crate::analysis::{attempt, log_tier_failure};
use crate::error::TierResult;
use crate::knowledge::KnowledgeProvider;
use crate::models::{
    Category, ClassificationResult, Complaint, DepartmentRecord, Priority, DEFAULT_DEPARTMENT,
};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

const COMPLAINT_ID_PLACEHOLDER: &str = "{complaint_id}";

/// What every reply tier gets to work with
pub struct ReplyRequest<'a> {
    pub complaint: &'a Complaint,
    pub category: Category,
    pub priority: Priority,
    pub department: &'a str,
    pub record: &'a DepartmentRecord,
}

/// One fallible reply stage
#[async_trait]
pub trait ReplyTier: Send + Sync {
    fn name(&self) -> &'static str;

    /// Time allowed for one attempt; `None` means unbounded
    fn budget(&self) -> Option<Duration> {
        None
    }

    async fn reply(&self, request: &ReplyRequest<'_>) -> TierResult<String>;
}

pub struct ResponseGenerator {
    knowledge: Arc<dyn KnowledgeProvider>,
    tiers: Vec<Box<dyn ReplyTier>>,
}

impl ResponseGenerator {
    /// Generator that only renders templates
    pub fn new(knowledge: Arc<dyn KnowledgeProvider>) -> Self {
        Self {
            knowledge,
            tiers: Vec::new(),
        }
    }

    /// Append a tier; tiers run in the order they were added
    pub fn with_tier(mut self, tier: impl ReplyTier + 'static) -> Self {
        self.tiers.push(Box::new(tier));
        self
    }

    /// Tier names in evaluation order, ending with the template step
    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers
            .iter()
            .map(|t| t.name())
            .chain(std::iter::once("template"))
            .collect()
    }

    /// Reply for a complaint with a known category and priority.
    ///
    /// The complaint's language is passed through to the provider prompts.
    pub async fn generate(
        &self,
        complaint: &Complaint,
        category: Category,
        priority: Priority,
    ) -> String {
        let department = self
            .knowledge
            .department_name(category)
            .unwrap_or(DEFAULT_DEPARTMENT)
            .to_string();
        let record = self.knowledge.resolve_department(category, &department);

        self.run(&ReplyRequest {
            complaint,
            category,
            priority,
            department: &department,
            record: &record,
        })
        .await
    }

    /// Reply reusing the department resolved during analysis
    pub async fn respond(&self, complaint: &Complaint, analysis: &ClassificationResult) -> String {
        self.run(&ReplyRequest {
            complaint,
            category: analysis.category,
            priority: analysis.priority,
            department: &analysis.department,
            record: &analysis.department_info,
        })
        .await
    }

    async fn run(&self, request: &ReplyRequest<'_>) -> String {
        for tier in &self.tiers {
            match attempt(tier.budget(), tier.reply(request)).await {
                Ok(reply) => {
                    tracing::info!(
                        "[Generation] {} tier replied to complaint {} ({} chars)",
                        tier.name(),
                        request.complaint.id,
                        reply.len()
                    );
                    return reply;
                }
                Err(e) => log_tier_failure("Generation", tier.name(), &e),
            }
        }

        tracing::info!(
            "[Generation] Using template reply for complaint {}",
            request.complaint.id
        );
        self.template_reply(request)
    }

    /// First template for (category, priority), or a sentence built from the
    /// department's contact fields
    fn template_reply(&self, request: &ReplyRequest<'_>) -> String {
        let template = self
            .knowledge
            .response_templates()
            .get(&request.category)
            .and_then(|by_priority| by_priority.get(&request.priority))
            .and_then(|templates| templates.first());

        match template {
            Some(template) => {
                template.replace(COMPLAINT_ID_PLACEHOLDER, &request.complaint.id.to_string())
            }
            None => {
                let record = request.record;
                format!(
                    "Thank you for your {} complaint. Contact {} at {} or emergency {}. Expected response: {}.",
                    request.category.as_str().to_lowercase(),
                    record.head,
                    record.contact,
                    record.emergency_contact,
                    record.response_time
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TierError;
    use crate::knowledge::{BuiltinKnowledge, DepartmentEntry, PriorityKeywords, ResponseTemplates};
    use crate::models::KnowledgeDocument;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Canned {
        name: &'static str,
        reply: Option<&'static str>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ReplyTier for Canned {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn reply(&self, _request: &ReplyRequest<'_>) -> TierResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.map(str::to_string).ok_or(TierError::NoContent)
        }
    }

    fn canned(name: &'static str, reply: Option<&'static str>) -> (Canned, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Canned {
                name,
                reply,
                calls: calls.clone(),
            },
            calls,
        )
    }

    fn builtin() -> Arc<dyn KnowledgeProvider> {
        Arc::new(BuiltinKnowledge::new())
    }

    #[tokio::test]
    async fn test_first_tier_reply_wins() {
        let (streaming, _) = canned("streaming", Some("From the stream."));
        let (chat, chat_calls) = canned("chat", Some("From chat."));
        let generator = ResponseGenerator::new(builtin())
            .with_tier(streaming)
            .with_tier(chat);

        let reply = generator
            .generate(&Complaint::new("x"), Category::Traffic, Priority::Low)
            .await;
        assert_eq!(reply, "From the stream.");
        assert_eq!(chat_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_falls_through_to_second_tier() {
        let (streaming, streaming_calls) = canned("streaming", None);
        let (chat, _) = canned("chat", Some("From chat."));
        let generator = ResponseGenerator::new(builtin())
            .with_tier(streaming)
            .with_tier(chat);

        let reply = generator
            .generate(&Complaint::new("x"), Category::Traffic, Priority::Low)
            .await;
        assert_eq!(reply, "From chat.");
        assert_eq!(streaming_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_template_uses_first_entry() {
        let kb = builtin();
        let expected = kb.response_templates()[&Category::Utilities][&Priority::Critical][0].clone();
        let (streaming, _) = canned("streaming", None);
        let generator = ResponseGenerator::new(kb).with_tier(streaming);

        let reply = generator
            .generate(&Complaint::new("No water"), Category::Utilities, Priority::Critical)
            .await;
        assert_eq!(reply, expected);
    }

    #[tokio::test]
    async fn test_generic_reply_for_category_without_templates() {
        let generator = ResponseGenerator::new(builtin());
        let reply = generator
            .generate(&Complaint::new("ration card"), Category::Other, Priority::Medium)
            .await;
        assert_eq!(
            reply,
            "Thank you for your other complaint. Contact Department Head at N/A or emergency 112. Expected response: 3-5 days."
        );
    }

    struct TemplateOnly(ResponseTemplates);

    impl KnowledgeProvider for TemplateOnly {
        fn departments(&self) -> &[DepartmentEntry] {
            &[]
        }
        fn lookup_helpline(&self, _name: &str) -> String {
            "112".to_string()
        }
        fn priority_keywords(&self) -> &PriorityKeywords {
            static EMPTY: PriorityKeywords = PriorityKeywords::new();
            &EMPTY
        }
        fn response_templates(&self) -> &ResponseTemplates {
            &self.0
        }
        fn training_documents(&self) -> Vec<KnowledgeDocument> {
            Vec::new()
        }
    }

    #[tokio::test]
    async fn test_complaint_id_is_substituted() {
        let mut templates = ResponseTemplates::new();
        templates
            .entry(Category::Education)
            .or_default()
            .insert(Priority::High, vec!["Logged as {complaint_id}.".to_string()]);
        let generator = ResponseGenerator::new(Arc::new(TemplateOnly(templates)));

        let complaint = Complaint::new("exam leak");
        let reply = generator
            .generate(&complaint, Category::Education, Priority::High)
            .await;
        assert_eq!(reply, format!("Logged as {}.", complaint.id));
    }

    #[test]
    fn test_tier_names() {
        let (chat, _) = canned("chat", None);
        let generator = ResponseGenerator::new(builtin()).with_tier(chat);
        assert_eq!(generator.tier_names(), vec!["chat", "template"]);
    }
}
