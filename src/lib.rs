//! Samadhan complaint triage
//!
//! Classifies citizen complaints and writes replies through tiers of remote
//! language-model providers, with local embedding and rule-based fallbacks
//! that always produce an answer.

pub mod ai;
pub mod analysis;
pub mod config;
pub mod error;
pub mod generation;
pub mod knowledge;
pub mod models;
pub mod service;
pub mod vector;

pub use analysis::AnalysisOrchestrator;
pub use config::TriageConfig;
pub use error::{TierError, TierResult};
pub use generation::ResponseGenerator;
pub use knowledge::{BuiltinKnowledge, KnowledgeProvider};
pub use models::{Category, ClassificationResult, Complaint, Priority, Sentiment};
pub use service::{TriageOutcome, TriageService};

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
