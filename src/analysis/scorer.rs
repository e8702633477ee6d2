//! Rule-based classifier
//!
//! Deterministic keyword scoring over the knowledge provider's department
//! keywords and priority tables. Used as the unconditional last analysis tier
//! and as the field fallback for the embedding tier.

use crate::knowledge::{KnowledgeProvider, GENERAL_SCOPE};
use crate::models::{
    AnalysisSource, Category, Classification, Priority, Sentiment, DEFAULT_DEPARTMENT,
};
use std::sync::Arc;

const NEGATIVE_WORDS: &[&str] = &[
    "angry",
    "frustrated",
    "terrible",
    "worst",
    "horrible",
    "disgusted",
    "furious",
    "outraged",
    "disappointed",
];

const POSITIVE_WORDS: &[&str] = &[
    "thank",
    "appreciate",
    "good",
    "excellent",
    "satisfied",
    "happy",
    "pleased",
    "grateful",
];

pub const RULE_BASED_CONFIDENCE: f32 = 0.7;

#[derive(Clone)]
pub struct KnowledgeScorer {
    knowledge: Arc<dyn KnowledgeProvider>,
}

impl KnowledgeScorer {
    pub fn new(knowledge: Arc<dyn KnowledgeProvider>) -> Self {
        Self { knowledge }
    }

    pub fn classify(&self, text: &str) -> Classification {
        let text = text.to_lowercase();

        let (category, department) = self.detect_department(&text);
        let priority = self.detect_priority(&text, category);
        let sentiment = detect_sentiment(&text);

        let suggested_response = suggested_response(self.knowledge.as_ref(), category, &department);

        Classification {
            category,
            priority,
            department,
            sentiment,
            confidence: RULE_BASED_CONFIDENCE,
            source: AnalysisSource::RuleBased,
            suggested_response,
            district: None,
        }
    }

    /// Department with the most distinct keyword hits; the first listed wins ties
    fn detect_department(&self, text: &str) -> (Category, String) {
        let mut best: Option<(usize, &crate::knowledge::DepartmentEntry)> = None;

        for entry in self.knowledge.departments() {
            let hits = count_hits(text, entry.keywords.iter().map(String::as_str));
            if hits == 0 {
                continue;
            }
            match best {
                Some((top, _)) if hits <= top => {}
                _ => best = Some((hits, entry)),
            }
        }

        match best {
            Some((_, entry)) => (entry.category, entry.name.clone()),
            None => (Category::Other, DEFAULT_DEPARTMENT.to_string()),
        }
    }

    /// First priority tier with a general or category-scoped hit; medium otherwise
    fn detect_priority(&self, text: &str, category: Category) -> Priority {
        let table = self.knowledge.priority_keywords();

        for priority in Priority::DETECTION_ORDER {
            let Some(scopes) = table.get(&priority) else {
                continue;
            };

            let scoped = std::iter::once(GENERAL_SCOPE).chain(category.keyword_scope());
            for scope in scoped {
                let matched = scopes
                    .get(scope)
                    .is_some_and(|words| words.iter().any(|w| text.contains(w.as_str())));
                if matched {
                    return priority;
                }
            }
        }

        Priority::Medium
    }
}

fn detect_sentiment(text: &str) -> Sentiment {
    let negative = count_hits(text, NEGATIVE_WORDS.iter().copied());
    let positive = count_hits(text, POSITIVE_WORDS.iter().copied());

    match negative.cmp(&positive) {
        std::cmp::Ordering::Greater => Sentiment::Negative,
        std::cmp::Ordering::Less => Sentiment::Positive,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

/// Number of distinct keywords present as substrings
fn count_hits<'a>(text: &str, keywords: impl Iterator<Item = &'a str>) -> usize {
    keywords.filter(|k| text.contains(k)).count()
}

/// Acknowledgement naming the department's contact details
pub(crate) fn suggested_response(
    knowledge: &dyn KnowledgeProvider,
    category: Category,
    department: &str,
) -> String {
    let record = knowledge.resolve_department(category, department);
    format!(
        "Thank you for your {} complaint. Contact {} at {} or emergency {}. Response time: {}.",
        category.as_str().to_lowercase(),
        department,
        record.contact,
        record.emergency_contact,
        record.response_time
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{
        BuiltinKnowledge, DepartmentEntry, PriorityKeywords, ResponseTemplates,
    };
    use crate::models::{DepartmentRecord, KnowledgeDocument};

    fn scorer() -> KnowledgeScorer {
        KnowledgeScorer::new(Arc::new(BuiltinKnowledge::new()))
    }

    #[test]
    fn test_water_complaint() {
        let result = scorer().classify("No water supply for 3 days, very urgent");
        assert_eq!(result.category, Category::Utilities);
        assert_eq!(result.department, "Water Supply");
        assert_eq!(result.priority, Priority::Critical);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.confidence, RULE_BASED_CONFIDENCE);
        assert_eq!(result.source, AnalysisSource::RuleBased);
        assert!(result.suggested_response.contains("0522-2623404"));
        assert!(result.suggested_response.starts_with("Thank you for your utilities complaint"));
    }

    #[test]
    fn test_positive_sentiment_without_department() {
        let result = scorer().classify("Thank you, excellent service");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.category, Category::Other);
        assert_eq!(result.department, DEFAULT_DEPARTMENT);
        assert_eq!(result.priority, Priority::Medium);
    }

    #[test]
    fn test_negative_sentiment() {
        let result = scorer().classify("I am angry and frustrated, the worst road ever, thank you");
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.category, Category::Infrastructure);
    }

    #[test]
    fn test_other_category_keeps_department_name() {
        let result = scorer().classify("Land record mutation pending at tehsil");
        assert_eq!(result.category, Category::Other);
        assert_eq!(result.department, "Revenue");
        assert!(result.suggested_response.contains("0522-2237890"));
    }

    #[test]
    fn test_case_insensitive() {
        let lower = scorer().classify("pothole on the road");
        let upper = scorer().classify("POTHOLE ON THE ROAD");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_deterministic() {
        let s = scorer();
        let text = "Garbage dumping near hospital, doctor absent, frustrated";
        let first = s.classify(text);
        for _ in 0..10 {
            assert_eq!(s.classify(text), first);
        }
    }

    struct Fixture {
        departments: Vec<DepartmentEntry>,
        priority_keywords: PriorityKeywords,
        templates: ResponseTemplates,
    }

    impl KnowledgeProvider for Fixture {
        fn departments(&self) -> &[DepartmentEntry] {
            &self.departments
        }
        fn lookup_helpline(&self, _name: &str) -> String {
            "999".to_string()
        }
        fn priority_keywords(&self) -> &PriorityKeywords {
            &self.priority_keywords
        }
        fn response_templates(&self) -> &ResponseTemplates {
            &self.templates
        }
        fn training_documents(&self) -> Vec<KnowledgeDocument> {
            Vec::new()
        }
    }

    fn entry(name: &str, category: Category, keywords: &[&str]) -> DepartmentEntry {
        DepartmentEntry {
            name: name.to_string(),
            category,
            record: DepartmentRecord::unknown("999"),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn fixture(departments: Vec<DepartmentEntry>) -> KnowledgeScorer {
        let mut priority_keywords = PriorityKeywords::new();
        priority_keywords
            .entry(Priority::High)
            .or_default()
            .insert(GENERAL_SCOPE.to_string(), vec!["broken".to_string()]);
        priority_keywords
            .entry(Priority::Critical)
            .or_default()
            .insert("traffic".to_string(), vec!["pileup".to_string()]);
        priority_keywords
            .entry(Priority::Low)
            .or_default()
            .insert(GENERAL_SCOPE.to_string(), vec!["suggestion".to_string()]);

        KnowledgeScorer::new(Arc::new(Fixture {
            departments,
            priority_keywords,
            templates: ResponseTemplates::new(),
        }))
    }

    #[test]
    fn test_tie_goes_to_first_listed_department() {
        let s = fixture(vec![
            entry("Roads", Category::Infrastructure, &["lamp"]),
            entry("Lights", Category::Other, &["lamp"]),
        ]);
        assert_eq!(s.classify("lamp is out").department, "Roads");

        let s = fixture(vec![
            entry("Lights", Category::Other, &["lamp"]),
            entry("Roads", Category::Infrastructure, &["lamp"]),
        ]);
        assert_eq!(s.classify("lamp is out").department, "Lights");
    }

    #[test]
    fn test_strictly_higher_count_wins() {
        let s = fixture(vec![
            entry("Roads", Category::Infrastructure, &["lamp"]),
            entry("Signals", Category::Traffic, &["lamp", "junction"]),
        ]);
        let result = s.classify("lamp at junction");
        assert_eq!(result.department, "Signals");
        assert_eq!(result.category, Category::Traffic);
    }

    #[test]
    fn test_priority_tier_order_and_category_scope() {
        let s = fixture(vec![entry("Signals", Category::Traffic, &["junction"])]);

        // critical (category scope) beats high (general scope)
        assert_eq!(s.classify("broken junction pileup").priority, Priority::Critical);
        assert_eq!(s.classify("broken junction").priority, Priority::High);
        // high is checked before low
        assert_eq!(s.classify("broken suggestion").priority, Priority::High);
        assert_eq!(s.classify("a suggestion").priority, Priority::Low);
        assert_eq!(s.classify("junction").priority, Priority::Medium);

        // category scope only applies to its own category
        assert_eq!(s.classify("pileup").priority, Priority::Medium);
    }

    #[test]
    fn test_unknown_department_uses_emergency_helpline() {
        let s = fixture(Vec::new());
        let result = s.classify("anything");
        assert_eq!(result.department, DEFAULT_DEPARTMENT);
        assert!(result.suggested_response.contains("emergency 999"));
    }
}
