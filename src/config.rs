//! Runtime configuration
//!
//! Loaded from the process environment (and a `.env` file when present).
//! A provider whose API key is absent stays `None`; its tiers then report
//! [`crate::TierError::Config`] and the pipeline falls through.

use crate::vector::{VectorConfig, VectorModelType};
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com/identity/token";
pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_OPENROUTER_MODEL: &str = "deepseek/deepseek-r1-0528-qwen3-8b:free";

/// Token-authenticated streaming provider (IBM watsonx)
#[derive(Clone)]
pub struct WatsonxConfig {
    pub api_key: String,
    pub iam_url: String,
    /// Event-stream endpoint; the streaming tier is unusable without it
    pub streaming_url: Option<String>,
    pub auth_timeout: Duration,
    pub stream_timeout: Duration,
}

/// Plain chat-completions provider (OpenRouter)
#[derive(Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub referer: String,
    pub title: String,
    pub timeout: Duration,
}

impl OpenRouterConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_OPENROUTER_BASE_URL.to_string(),
            model: DEFAULT_OPENROUTER_MODEL.to_string(),
            referer: "http://localhost:5173".to_string(),
            title: "Samadhan AI".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl WatsonxConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            iam_url: DEFAULT_IAM_URL.to_string(),
            streaming_url: None,
            auth_timeout: Duration::from_secs(10),
            stream_timeout: Duration::from_secs(60),
        }
    }
}

// Keys must never reach logs
impl std::fmt::Debug for WatsonxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatsonxConfig")
            .field("iam_url", &self.iam_url)
            .field("streaming_url", &self.streaming_url)
            .field("auth_timeout", &self.auth_timeout)
            .field("stream_timeout", &self.stream_timeout)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("referer", &self.referer)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct TriageConfig {
    pub watsonx: Option<WatsonxConfig>,
    pub openrouter: Option<OpenRouterConfig>,
    /// Whether to build the embedding tier when an embedder is available
    pub embeddings_enabled: bool,
    pub vector: VectorConfig,
}

impl Default for TriageConfig {
    /// No providers configured, embeddings enabled
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl TriageConfig {
    /// Read `.env` (if any) and the process environment
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("[Config] Ignoring unreadable .env file: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a `.env`-style file only, ignoring the process environment
    pub fn from_env_file(path: &std::path::Path) -> Result<Self, dotenvy::Error> {
        let vars = dotenvy::from_path_iter(path)?.collect::<Result<HashMap<_, _>, _>>()?;
        Ok(Self::from_lookup(|key| vars.get(key).cloned()))
    }

    /// Build from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let secs = |key: &str, default: u64| {
            Duration::from_secs(get(key).and_then(|v| v.parse().ok()).unwrap_or(default))
        };

        let watsonx = get("WATSONX_API_KEY").map(|api_key| WatsonxConfig {
            api_key,
            iam_url: get("WATSONX_IAM_URL").unwrap_or_else(|| DEFAULT_IAM_URL.to_string()),
            streaming_url: get("WATSONX_STREAMING_URL"),
            auth_timeout: secs("AUTH_TIMEOUT", 10),
            stream_timeout: secs("WATSONX_TIMEOUT", 60),
        });

        let openrouter = get("OPENROUTER_API_KEY").map(|api_key| OpenRouterConfig {
            api_key,
            base_url: get("OPENROUTER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENROUTER_BASE_URL.to_string()),
            model: get("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_OPENROUTER_MODEL.to_string()),
            referer: get("FRONTEND_URL").unwrap_or_else(|| "http://localhost:5173".to_string()),
            title: "Samadhan AI".to_string(),
            timeout: secs("OPENROUTER_TIMEOUT", 30),
        });

        let embeddings_enabled = get("ENABLE_EMBEDDINGS")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(true);

        let mut vector = VectorConfig::default();
        if let Some(model) = get("EMBEDDING_MODEL").and_then(|m| VectorModelType::parse(&m)) {
            vector.model = model;
        }

        Self {
            watsonx,
            openrouter,
            embeddings_enabled,
            vector,
        }
    }
}
