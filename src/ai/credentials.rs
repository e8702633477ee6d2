//! Bearer token cache for the watsonx provider
//!
//! Exchanges the configured API key for an IAM access token and keeps it until
//! five minutes before it expires. The check-then-fetch sequence runs under a
//! single lock, so concurrent callers share one exchange.

use crate::error::{TierError, TierResult};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::Mutex;

const GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Tokens are treated as expired this long before the provider says so
const SAFETY_MARGIN_SECS: i64 = 300;

/// Lifetime assumed when the provider omits `expires_in`
const DEFAULT_TTL_SECS: i64 = 3600;

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<i64>,
}

#[derive(Clone)]
struct AuthToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AuthToken {
    fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at
    }
}

pub struct CredentialCache {
    http: Client,
    iam_url: String,
    api_key: String,
    timeout: Duration,
    slot: Mutex<Option<AuthToken>>,
}

impl CredentialCache {
    pub fn new(
        http: Client,
        iam_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            iam_url: iam_url.into(),
            api_key: api_key.into(),
            timeout,
            slot: Mutex::new(None),
        }
    }

    /// Current bearer token, exchanging the API key when the cached one is
    /// missing or expired.
    ///
    /// A failed exchange leaves the previous token in place.
    pub async fn get_token(&self) -> TierResult<String> {
        let mut slot = self.slot.lock().await;

        if let Some(token) = slot.as_ref().filter(|t| t.is_valid()) {
            return Ok(token.value.clone());
        }

        let token = tokio::time::timeout(self.timeout, self.exchange())
            .await
            .map_err(|_| TierError::Timeout(self.timeout))??;

        let value = token.value.clone();
        *slot = Some(token);
        Ok(value)
    }

    async fn exchange(&self) -> TierResult<AuthToken> {
        tracing::debug!("[Credentials] Exchanging API key for access token");

        let response = self
            .http
            .post(&self.iam_url)
            .header("Accept", "application/json")
            .form(&[("grant_type", GRANT_TYPE), ("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| TierError::Auth(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("[Credentials] Token exchange returned {}", status);
            return Err(TierError::Auth(format!(
                "Status {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let parsed: TokenResponse = response
            .json()
            .await
            .map_err(|e| TierError::Auth(format!("Unreadable token response: {}", e)))?;

        let value = parsed
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| TierError::Auth("Response carried no access_token".to_string()))?;

        let ttl = parsed.expires_in.unwrap_or(DEFAULT_TTL_SECS);
        let expires_at = expiry_after(Utc::now(), ttl).ok_or_else(|| {
            TierError::Auth(format!("Unrepresentable token lifetime: {}s", ttl))
        })?;

        tracing::info!("[Credentials] Obtained access token valid until {}", expires_at);

        Ok(AuthToken { value, expires_at })
    }
}

/// Instant the token stops being used, `None` if it cannot be represented
fn expiry_after(now: DateTime<Utc>, ttl_secs: i64) -> Option<DateTime<Utc>> {
    let usable = ttl_secs.checked_sub(SAFETY_MARGIN_SECS)?;
    now.checked_add_signed(ChronoDuration::try_seconds(usable)?)
}
