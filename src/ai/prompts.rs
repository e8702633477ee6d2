use crate::models::{Category, DepartmentRecord, Priority};

/// Everything a reply prompt mentions about one complaint
pub struct ReplyContext<'a> {
    pub complaint: &'a str,
    pub category: Category,
    pub priority: Priority,
    pub language: &'a str,
    pub department: &'a str,
    pub record: &'a DepartmentRecord,
}

/// Build the remote classification prompt
pub fn build_classification_prompt(complaint: &str, language: &str, training_documents: usize) -> String {
    format!(
        r#"You are Samadhan AI, an expert system for UP government complaints trained on comprehensive real data.

Analyze this complaint for Uttar Pradesh CM Helpline 1076:
Complaint: {complaint}
Language: {language}

Based on Samadhan AI reference data with {training_documents} documents, provide JSON response:
{{
    "category": "Infrastructure|Utilities|Environment|Traffic|Healthcare|Education|Other",
    "priority": "low|medium|high|critical",
    "department": "Public Works|Water Supply|Environment|Traffic Police|Healthcare|Education|General Services",
    "sentiment": "positive|neutral|negative",
    "timeline": "expected resolution time",
    "confidence": 0.8,
    "district": "if mentioned"
}}

Only respond with valid JSON."#
    )
}

/// Prompt for the streaming reply provider
pub fn build_streaming_reply_prompt(ctx: &ReplyContext<'_>) -> String {
    format!(
        r#"You are Samadhan AI, a helpful government assistant for Uttar Pradesh, India.

A citizen submitted this complaint to CM Helpline 1076:
Complaint: "{}"
Category: {}
Priority: {}
Language: {}

Department: {}
Contact: {}
Emergency: {}
Response Time: {}
Head: {}

Provide a professional, empathetic response that:
1. Acknowledges the citizen's concern
2. Provides correct contact information
3. Gives realistic timeline
4. Mentions emergency contact if urgent
5. Is helpful and reassuring

Keep response concise (2-3 sentences). No markdown formatting."#,
        ctx.complaint,
        ctx.category,
        ctx.priority,
        ctx.language,
        ctx.department,
        ctx.record.contact,
        ctx.record.emergency_contact,
        ctx.record.response_time,
        ctx.record.head,
    )
}

/// Shorter prompt for the chat-completions reply provider
pub fn build_chat_reply_prompt(ctx: &ReplyContext<'_>) -> String {
    format!(
        r#"Generate professional UP government response for Samadhan AI:

Complaint: {}
Category: {}
Priority: {}
Language: {}
Department: {}
Contact: {}
Emergency: {}
Response Time: {}

Professional, empathetic response with real contact info. 2-3 sentences. No markdown."#,
        ctx.complaint,
        ctx.category,
        ctx.priority,
        ctx.language,
        ctx.department,
        ctx.record.contact,
        ctx.record.emergency_contact,
        ctx.record.response_time,
    )
}
