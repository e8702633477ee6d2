//! Shared types for the triage pipeline

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A citizen complaint as submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: Uuid,
    pub text: String,
    pub language: String,
}

impl Complaint {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            language: "en".to_string(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Complaint category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Infrastructure,
    Utilities,
    Traffic,
    Environment,
    Healthcare,
    Education,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Self::Infrastructure,
        Self::Utilities,
        Self::Traffic,
        Self::Environment,
        Self::Healthcare,
        Self::Education,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Infrastructure => "Infrastructure",
            Self::Utilities => "Utilities",
            Self::Traffic => "Traffic",
            Self::Environment => "Environment",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Lenient parse of provider or metadata text.
    ///
    /// Accepts category names as well as the department names providers tend
    /// to answer with ("Water Supply", "PublicWorks"). Returns `None` for
    /// anything outside the fixed set.
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "infrastructure" | "publicworks" | "pwd" => Some(Self::Infrastructure),
            "utilities" | "utility" | "watersupply" | "water" => Some(Self::Utilities),
            "traffic" | "trafficpolice" => Some(Self::Traffic),
            "environment" | "environmental" => Some(Self::Environment),
            "healthcare" | "health" | "medical" => Some(Self::Healthcare),
            "education" => Some(Self::Education),
            "other" | "generalservices" => Some(Self::Other),
            _ => None,
        }
    }

    /// Scope name of this category in the priority keyword table
    pub fn keyword_scope(&self) -> Option<&'static str> {
        match self {
            Self::Infrastructure => Some("infrastructure"),
            Self::Utilities => Some("water"),
            Self::Traffic => Some("traffic"),
            Self::Environment => Some("environment"),
            Self::Healthcare => Some("healthcare"),
            Self::Education => Some("education"),
            Self::Other => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complaint priority
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Order in which keyword tiers are evaluated; medium is the implicit default
    pub const DETECTION_ORDER: [Priority; 3] = [Self::Critical, Self::High, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "normal" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" | "urgent" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "neutral" => Some(Self::Neutral),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }
}

/// Which tier produced a classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisSource {
    /// Remote LLM classifier
    Remote,
    /// Local embedding similarity
    Embedding,
    /// Deterministic keyword scorer
    RuleBased,
}

/// Department directory entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRecord {
    pub contact: String,
    pub email: String,
    pub emergency_contact: String,
    pub response_time: String,
    pub services: Vec<String>,
    pub head: String,
    pub address: String,
}

impl DepartmentRecord {
    /// Placeholder record used when the directory has no entry
    pub fn unknown(emergency_contact: impl Into<String>) -> Self {
        Self {
            contact: "N/A".to_string(),
            email: "N/A".to_string(),
            emergency_contact: emergency_contact.into(),
            response_time: DEFAULT_TIMELINE.to_string(),
            services: Vec::new(),
            head: "Department Head".to_string(),
            address: "Government Office, Lucknow".to_string(),
        }
    }
}

/// Department name used when nothing matches
pub const DEFAULT_DEPARTMENT: &str = "General Services";

/// Timeline used when the directory has no entry
pub const DEFAULT_TIMELINE: &str = "3-5 days";

/// Reference document used by the embedding tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    pub content: String,
    pub metadata: BTreeMap<String, String>,
}

/// What a single tier produces, before department enrichment
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: Category,
    pub priority: Priority,
    pub department: String,
    pub sentiment: Sentiment,
    pub confidence: f32,
    pub source: AnalysisSource,
    pub suggested_response: String,
    pub district: Option<String>,
}

/// Final analysis of a complaint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: Category,
    pub priority: Priority,
    pub department: String,
    pub sentiment: Sentiment,
    /// Always within 0.0..=1.0
    pub confidence: f32,
    pub timeline: String,
    pub source: AnalysisSource,
    pub department_info: DepartmentRecord,
    pub suggested_response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

impl ClassificationResult {
    /// Attach directory data to a tier's classification.
    ///
    /// The timeline comes from the department's response time.
    pub fn enrich(classification: Classification, department_info: DepartmentRecord) -> Self {
        let department = if classification.department.trim().is_empty() {
            DEFAULT_DEPARTMENT.to_string()
        } else {
            classification.department
        };
        let timeline = if department_info.response_time.trim().is_empty() {
            DEFAULT_TIMELINE.to_string()
        } else {
            department_info.response_time.clone()
        };

        Self {
            category: classification.category,
            priority: classification.priority,
            department,
            sentiment: classification.sentiment,
            confidence: unit_confidence(classification.confidence),
            timeline,
            source: classification.source,
            department_info,
            suggested_response: classification.suggested_response,
            district: classification.district,
        }
    }
}

/// Clamp to 0.0..=1.0; NaN counts as no confidence
fn unit_confidence(confidence: f32) -> f32 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    }
}
