//! Knowledge Provider
//!
//! Read-only reference data consumed by the triage core: the department
//! directory, helplines, priority keyword tables, reply templates and the
//! training corpus for the embedding tier. The core only talks to the
//! [`KnowledgeProvider`] trait so tests can inject fixture data.

mod dataset;

use crate::models::{Category, DepartmentRecord, KnowledgeDocument, Priority};
use serde::Serialize;
use std::collections::BTreeMap;

/// priority → scope ("general", "water", ...) → keywords
pub type PriorityKeywords = BTreeMap<Priority, BTreeMap<String, Vec<String>>>;

/// category → priority → templates, first one preferred
pub type ResponseTemplates = BTreeMap<Category, BTreeMap<Priority, Vec<String>>>;

/// Keyword scope consulted for every category
pub const GENERAL_SCOPE: &str = "general";

/// Helpline returned for unknown services
pub const DEFAULT_HELPLINE: &str = "112";

/// A department with its routing keywords
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentEntry {
    pub name: String,
    pub category: Category,
    pub record: DepartmentRecord,
    /// Lower-case trigger keywords used by the rule-based scorer
    pub keywords: Vec<String>,
}

/// Read-only reference data source
pub trait KnowledgeProvider: Send + Sync {
    /// Departments in enumeration order (ties in keyword scoring go to the
    /// first department listed)
    fn departments(&self) -> &[DepartmentEntry];

    fn lookup_helpline(&self, name: &str) -> String;

    fn priority_keywords(&self) -> &PriorityKeywords;

    fn response_templates(&self) -> &ResponseTemplates;

    fn training_documents(&self) -> Vec<KnowledgeDocument>;

    /// Directory record of the department that owns a category.
    ///
    /// `Other` has no owning department.
    fn lookup_department(&self, category: Category) -> Option<DepartmentRecord> {
        if category == Category::Other {
            return None;
        }
        self.departments()
            .iter()
            .find(|d| d.category == category)
            .map(|d| d.record.clone())
    }

    fn department_by_name(&self, name: &str) -> Option<&DepartmentEntry> {
        let wanted = name.trim();
        self.departments()
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(wanted))
    }

    /// Name of the department that owns a category, if any
    fn department_name(&self, category: Category) -> Option<&str> {
        if category == Category::Other {
            return None;
        }
        self.departments()
            .iter()
            .find(|d| d.category == category)
            .map(|d| d.name.as_str())
    }

    /// Directory record for a classification.
    ///
    /// Looks up the category owner first, then the department by name, and
    /// finally falls back to a placeholder carrying the emergency helpline.
    fn resolve_department(&self, category: Category, department: &str) -> DepartmentRecord {
        self.lookup_department(category)
            .or_else(|| self.department_by_name(department).map(|d| d.record.clone()))
            .unwrap_or_else(|| DepartmentRecord::unknown(self.lookup_helpline("emergency")))
    }
}

/// Dataset size counters
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeStats {
    pub departments: usize,
    pub helplines: usize,
    pub complaint_patterns: usize,
    pub training_documents: usize,
    pub response_templates: usize,
}

/// UP government reference dataset compiled into the crate
#[derive(Debug, Clone)]
pub struct BuiltinKnowledge {
    departments: Vec<DepartmentEntry>,
    helplines: BTreeMap<String, String>,
    priority_keywords: PriorityKeywords,
    response_templates: ResponseTemplates,
    complaint_patterns: Vec<(Category, String)>,
}

impl BuiltinKnowledge {
    pub fn new() -> Self {
        let departments = dataset::DEPARTMENTS
            .iter()
            .map(|d| DepartmentEntry {
                name: d.name.to_string(),
                category: d.category,
                record: DepartmentRecord {
                    contact: d.contact.to_string(),
                    email: d.email.to_string(),
                    emergency_contact: d.emergency_contact.to_string(),
                    response_time: d.response_time.to_string(),
                    services: to_strings(d.services),
                    head: d.head.to_string(),
                    address: d.address.to_string(),
                },
                keywords: to_strings(d.keywords),
            })
            .collect();

        // First group listing a service wins
        let mut helplines = BTreeMap::new();
        for (_, entries) in dataset::HELPLINES {
            for (name, number) in entries.iter() {
                helplines
                    .entry(name.to_string())
                    .or_insert_with(|| number.to_string());
            }
        }

        let mut priority_keywords = PriorityKeywords::new();
        for (priority, scopes) in dataset::PRIORITY_KEYWORDS {
            let table = priority_keywords.entry(*priority).or_default();
            for (scope, words) in scopes.iter() {
                table.insert(scope.to_string(), to_strings(words));
            }
        }

        let mut response_templates = ResponseTemplates::new();
        for (category, by_priority) in dataset::RESPONSE_TEMPLATES {
            let table = response_templates.entry(*category).or_default();
            for (priority, templates) in by_priority.iter() {
                table.insert(*priority, to_strings(templates));
            }
        }

        let complaint_patterns = dataset::COMPLAINT_PATTERNS
            .iter()
            .flat_map(|(category, patterns)| {
                patterns.iter().map(move |p| (*category, p.to_string()))
            })
            .collect();

        Self {
            departments,
            helplines,
            priority_keywords,
            response_templates,
            complaint_patterns,
        }
    }

    pub fn stats(&self) -> KnowledgeStats {
        KnowledgeStats {
            departments: self.departments.len(),
            helplines: self.helplines.len(),
            complaint_patterns: self.complaint_patterns.len(),
            training_documents: self.training_documents().len(),
            response_templates: self
                .response_templates
                .values()
                .flat_map(|by_priority| by_priority.values())
                .map(Vec::len)
                .sum(),
        }
    }

    fn department_document(entry: &DepartmentEntry) -> KnowledgeDocument {
        let record = &entry.record;
        let content = format!(
            "{} in UP handles {}. Contact: {}, Emergency: {}, Email: {}. Head: {}. Response time: {}. Address: {}. Priority keywords: {}.",
            entry.name,
            record.services.join(", "),
            record.contact,
            record.emergency_contact,
            record.email,
            record.head,
            record.response_time,
            record.address,
            entry.keywords.join(", "),
        );

        let metadata = [
            ("category", entry.category.as_str().to_string()),
            ("department", entry.name.clone()),
            ("contact", record.contact.clone()),
            ("emergency", record.emergency_contact.clone()),
            ("response_time", record.response_time.clone()),
            ("type", "department_info".to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        KnowledgeDocument { content, metadata }
    }

    fn pattern_document(&self, category: Category, pattern: &str) -> KnowledgeDocument {
        let owner = self
            .departments
            .iter()
            .find(|d| d.category == category);

        let (head, contact, emergency, response_time) = match owner {
            Some(d) => (
                d.record.head.as_str(),
                d.record.contact.as_str(),
                d.record.emergency_contact.as_str(),
                d.record.response_time.as_str(),
            ),
            None => ("Department Head", "N/A", DEFAULT_HELPLINE, "3-5 days"),
        };

        let content = format!(
            "Common complaint: {}. This should be handled by {}. Contact: {}, Emergency: {}. Expected response time: {}.",
            pattern, head, contact, emergency, response_time
        );

        let mut metadata = BTreeMap::new();
        metadata.insert("category".to_string(), category.as_str().to_string());
        if let Some(d) = owner {
            metadata.insert("department".to_string(), d.name.clone());
        }
        metadata.insert("contact".to_string(), contact.to_string());
        metadata.insert("type".to_string(), "complaint_example".to_string());

        KnowledgeDocument { content, metadata }
    }
}

impl Default for BuiltinKnowledge {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeProvider for BuiltinKnowledge {
    fn departments(&self) -> &[DepartmentEntry] {
        &self.departments
    }

    fn lookup_helpline(&self, name: &str) -> String {
        self.helplines
            .get(name)
            .cloned()
            .unwrap_or_else(|| DEFAULT_HELPLINE.to_string())
    }

    fn priority_keywords(&self) -> &PriorityKeywords {
        &self.priority_keywords
    }

    fn response_templates(&self) -> &ResponseTemplates {
        &self.response_templates
    }

    fn training_documents(&self) -> Vec<KnowledgeDocument> {
        let mut documents: Vec<KnowledgeDocument> = self
            .departments
            .iter()
            .map(Self::department_document)
            .collect();

        documents.extend(
            self.complaint_patterns
                .iter()
                .map(|(category, pattern)| self.pattern_document(*category, pattern)),
        );

        let helplines = self
            .helplines
            .iter()
            .map(|(name, number)| format!("{}: {}", title_case(name), number))
            .collect::<Vec<_>>()
            .join(", ");
        let mut metadata = BTreeMap::new();
        metadata.insert("type".to_string(), "helplines".to_string());
        documents.push(KnowledgeDocument {
            content: format!("UP Government Helplines: {}", helplines),
            metadata,
        });

        documents
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// "water_complaint" -> "Water Complaint"
fn title_case(name: &str) -> String {
    name.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
