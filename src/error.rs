//! Tier error taxonomy
//!
//! Every remote or local tier reports failure through [`TierError`]. The
//! orchestrators never surface these to callers: each one is logged and turned
//! into a fallthrough to the next tier.

use std::time::Duration;
use thiserror::Error;

/// Why a single tier attempt failed
#[derive(Debug, Error)]
pub enum TierError {
    /// Credential exchange failed or returned no token
    #[error("Credential exchange failed: {0}")]
    Auth(String),

    /// Provider answered with a non-success status
    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Provider answered, but the top-level response did not match its schema
    #[error("Malformed upstream response: {0}")]
    Upstream(String),

    /// Event stream closed without any usable text
    #[error("Stream closed without content")]
    NoContent,

    /// A required credential or endpoint is not configured
    #[error("{0} is not configured")]
    Config(&'static str),

    /// Network-level failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The tier exceeded its time budget
    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    /// Local embedding model failure
    #[error("Embedding failed: {0}")]
    Embedding(String),
}

impl TierError {
    /// Build an [`TierError::UpstreamStatus`] from a status and a raw body,
    /// keeping only the first few hundred characters of the body.
    pub fn upstream_status(status: reqwest::StatusCode, body: &str) -> Self {
        Self::UpstreamStatus {
            status: status.as_u16(),
            body: body.trim().chars().take(300).collect(),
        }
    }
}

pub type TierResult<T> = Result<T, TierError>;
