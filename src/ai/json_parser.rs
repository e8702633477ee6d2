use serde::de::DeserializeOwned;

/// Extracts and parses a JSON object from a model reply.
///
/// Handles pure JSON, markdown code fences and conversational text around the
/// object. The object is the greedy span from the first `{` to the last `}`.
pub fn extract_json<T: DeserializeOwned>(response: &str) -> Result<T, String> {
    let trimmed = response.trim();

    // Stage 1: pure JSON reply
    if let Ok(parsed) = serde_json::from_str::<T>(trimmed) {
        return Ok(parsed);
    }

    // Stage 2: greedy object span
    let Some(span) = find_json_span(trimmed) else {
        return Err(format!(
            "No JSON object in response. Preview: {}...",
            preview(trimmed)
        ));
    };

    serde_json::from_str::<T>(span).map_err(|e| {
        format!(
            "Failed to parse JSON from response ({}). Preview: {}...",
            e,
            preview(trimmed)
        )
    })
}

/// Span from the first `{` to the last `}`, inclusive
fn find_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn preview(text: &str) -> String {
    text.chars().take(200).collect()
}
