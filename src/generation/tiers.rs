//! Provider-backed reply tiers

use super::{ReplyRequest, ReplyTier};
use crate::ai::clean_response;
use crate::ai::prompts::{build_chat_reply_prompt, build_streaming_reply_prompt, ReplyContext};
use crate::ai::{OpenRouterClient, Sampling, WatsonxClient};
use crate::error::{TierError, TierResult};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

const STREAMING_SAMPLING: Sampling = Sampling::new(300, 0.7);
const CHAT_SAMPLING: Sampling = Sampling::new(500, 0.7);

fn context<'a>(request: &'a ReplyRequest<'a>) -> ReplyContext<'a> {
    ReplyContext {
        complaint: &request.complaint.text,
        category: request.category,
        priority: request.priority,
        language: &request.complaint.language,
        department: request.department,
        record: request.record,
    }
}

/// Cleaned text, or `NoContent` if cleaning leaves nothing
fn cleaned(raw: &str) -> TierResult<String> {
    let text = clean_response(raw);
    if text.is_empty() {
        return Err(TierError::NoContent);
    }
    Ok(text)
}

/// watsonx event-stream reply
pub struct StreamingReplyTier {
    client: Option<Arc<WatsonxClient>>,
    budget: Duration,
}

impl StreamingReplyTier {
    pub fn new(client: Option<Arc<WatsonxClient>>, budget: Duration) -> Self {
        Self { client, budget }
    }
}

#[async_trait]
impl ReplyTier for StreamingReplyTier {
    fn name(&self) -> &'static str {
        "streaming"
    }

    fn budget(&self) -> Option<Duration> {
        Some(self.budget)
    }

    async fn reply(&self, request: &ReplyRequest<'_>) -> TierResult<String> {
        let client = self
            .client
            .as_ref()
            .ok_or(TierError::Config("WATSONX_API_KEY"))?;

        let prompt = build_streaming_reply_prompt(&context(request));
        let raw = client.stream_chat(&prompt, STREAMING_SAMPLING).await?;
        cleaned(&raw)
    }
}

/// OpenRouter chat-completions reply
pub struct ChatReplyTier {
    client: Option<Arc<OpenRouterClient>>,
    budget: Duration,
}

impl ChatReplyTier {
    pub fn new(client: Option<Arc<OpenRouterClient>>, budget: Duration) -> Self {
        Self { client, budget }
    }
}

#[async_trait]
impl ReplyTier for ChatReplyTier {
    fn name(&self) -> &'static str {
        "chat"
    }

    fn budget(&self) -> Option<Duration> {
        Some(self.budget)
    }

    async fn reply(&self, request: &ReplyRequest<'_>) -> TierResult<String> {
        let client = self
            .client
            .as_ref()
            .ok_or(TierError::Config("OPENROUTER_API_KEY"))?;

        let prompt = build_chat_reply_prompt(&context(request));
        let raw = client.chat(&prompt, CHAT_SAMPLING).await?;
        cleaned(&raw)
    }
}
