//! Provider clients
//!
//! - [`WatsonxClient`]: streaming chat with an IAM bearer token
//! - [`OpenRouterClient`]: single request/response chat completions

use super::credentials::CredentialCache;
use super::stream::decode_event_stream;
use crate::config::{OpenRouterConfig, WatsonxConfig};
use crate::error::{TierError, TierResult};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Message in conversation
#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> Message<'a> {
    fn user(content: &'a str) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

/// Streaming request body
#[derive(Serialize)]
struct StreamingRequest<'a> {
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
}

/// Chat completions request body
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Sampling settings for one call
#[derive(Debug, Clone, Copy)]
pub struct Sampling {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Sampling {
    pub const fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}

/// watsonx streaming client
pub struct WatsonxClient {
    http: Client,
    config: WatsonxConfig,
    credentials: CredentialCache,
}

impl WatsonxClient {
    /// Client with its own credential cache
    pub fn new(http: Client, config: WatsonxConfig) -> Self {
        let credentials = CredentialCache::new(
            http.clone(),
            config.iam_url.clone(),
            config.api_key.clone(),
            config.auth_timeout,
        );
        Self {
            http,
            config,
            credentials,
        }
    }

    /// Send one prompt and assemble the streamed reply
    pub async fn stream_chat(&self, prompt: &str, sampling: Sampling) -> TierResult<String> {
        let url = self
            .config
            .streaming_url
            .as_deref()
            .ok_or(TierError::Config("WATSONX_STREAMING_URL"))?;

        let token = self.credentials.get_token().await?;

        let request = StreamingRequest {
            messages: vec![Message::user(prompt)],
            max_tokens: sampling.max_tokens,
            temperature: sampling.temperature,
        };

        tracing::debug!("[Watsonx] Opening stream ({} prompt chars)", prompt.len());

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .header(ACCEPT, "text/event-stream")
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TierError::upstream_status(status, &body));
        }

        let text = decode_event_stream(response.bytes_stream()).await?;
        tracing::debug!("[Watsonx] Stream complete ({} chars)", text.len());
        Ok(text)
    }
}

/// OpenRouter chat completions client
pub struct OpenRouterClient {
    http: Client,
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    pub fn new(http: Client, config: OpenRouterConfig) -> Self {
        Self { http, config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send one prompt and return the first choice's content
    pub async fn chat(&self, prompt: &str, sampling: Sampling) -> TierResult<String> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![Message::user(prompt)],
            max_tokens: sampling.max_tokens,
            temperature: sampling.temperature,
        };

        tracing::debug!("[OpenRouter] Calling {}", self.config.model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header(CONTENT_TYPE, "application/json")
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TierError::upstream_status(status, &body));
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| TierError::Upstream(format!("Unexpected response shape: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| TierError::Upstream("Response has no choices".to_string()))?
            .message
            .content
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(TierError::NoContent);
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLING: Sampling = Sampling::new(300, 0.7);

    async fn mount_token(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/identity/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({ "access_token": "bearer-1", "expires_in": 3600 }),
            ))
            .mount(server)
            .await;
    }

    fn watsonx_config(server: &MockServer) -> WatsonxConfig {
        let mut config = WatsonxConfig::new("wx-key");
        config.iam_url = format!("{}/identity/token", server.uri());
        config.streaming_url = Some(format!("{}/ml/v1/stream", server.uri()));
        config.auth_timeout = Duration::from_secs(5);
        config
    }

    fn openrouter_config(server: &MockServer) -> OpenRouterConfig {
        let mut config = OpenRouterConfig::new("or-key");
        config.base_url = server.uri();
        config
    }

    #[tokio::test]
    async fn test_stream_chat_assembles_deltas() {
        let server = MockServer::start().await;
        mount_token(&server).await;
        Mock::given(method("POST"))
            .and(path("/ml/v1/stream"))
            .and(header("authorization", "Bearer bearer-1"))
            .and(header("accept", "text/event-stream"))
            .and(body_partial_json(serde_json::json!({ "max_tokens": 300 })))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                "data: {\"choices\":[{\"delta\":{\"content\":\"Your complaint \"}}]}\n\n\
                 data: {\"choices\":[{\"delta\":{\"content\":\"is registered.\"}}]}\n\n\
                 data: [DONE]\n\n",
                "text/event-stream",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = WatsonxClient::new(Client::new(), watsonx_config(&server));
        let text = client.stream_chat("hello", SAMPLING).await.unwrap();
        assert_eq!(text, "Your complaint is registered.");
    }

    #[tokio::test]
    async fn test_stream_chat_requires_endpoint() {
        let server = MockServer::start().await;
        let mut config = watsonx_config(&server);
        config.streaming_url = None;

        let client = WatsonxClient::new(Client::new(), config);
        assert!(matches!(
            client.stream_chat("hello", SAMPLING).await,
            Err(TierError::Config("WATSONX_STREAMING_URL"))
        ));
    }

    #[tokio::test]
    async fn test_stream_chat_error_status() {
        let server = MockServer::start().await;
        mount_token(&server).await;
        Mock::given(method("POST"))
            .and(path("/ml/v1/stream"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client = WatsonxClient::new(Client::new(), watsonx_config(&server));
        match client.stream_chat("hello", SAMPLING).await {
            Err(TierError::UpstreamStatus { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_chat_sends_headers_and_reads_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer or-key"))
            .and(header("x-title", "Samadhan AI"))
            .and(body_partial_json(serde_json::json!({
                "model": crate::config::DEFAULT_OPENROUTER_MODEL,
                "max_tokens": 500
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "First" } },
                    { "message": { "role": "assistant", "content": "Second" } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenRouterClient::new(Client::new(), openrouter_config(&server));
        let text = client.chat("hi", Sampling::new(500, 0.7)).await.unwrap();
        assert_eq!(text, "First");
    }

    #[tokio::test]
    async fn test_chat_empty_choices_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let client = OpenRouterClient::new(Client::new(), openrouter_config(&server));
        assert!(matches!(
            client.chat("hi", SAMPLING).await,
            Err(TierError::Upstream(_))
        ));
    }

    #[tokio::test]
    async fn test_chat_malformed_body_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = OpenRouterClient::new(Client::new(), openrouter_config(&server));
        assert!(matches!(
            client.chat("hi", SAMPLING).await,
            Err(TierError::Upstream(_))
        ));
    }
}
