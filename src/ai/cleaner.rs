//! Markup stripping for generated replies

use regex::Regex;
use std::sync::LazyLock;

struct Rule {
    pattern: LazyLock<Regex>,
    replacement: &'static str,
}

macro_rules! rule {
    ($re:expr, $rep:expr) => {
        Rule {
            pattern: LazyLock::new(|| Regex::new($re).expect("static regex")),
            replacement: $rep,
        }
    };
}

// Applied in order; later rules assume earlier markers are gone
static RULES: [Rule; 8] = [
    rule!(r"\*\*(.*?)\*\*", "$1"),
    rule!(r"\*(.*?)\*", "$1"),
    rule!(r"#{1,6}\s*", ""),
    rule!(r"(?s)```.*?```", ""),
    rule!(r"`(.*?)`", "$1"),
    rule!(r"\[(.*?)\]\(.*?\)", "$1"),
    rule!(r"\n\s*\n", "\n"),
    rule!(r"\s+", " "),
];

fn clean_once(text: &str) -> String {
    let mut out = text.to_string();
    for rule in RULES.iter() {
        out = rule.pattern.replace_all(&out, rule.replacement).into_owned();
    }
    out.trim().to_string()
}

/// Strip markdown emphasis, headings, code and links, then collapse whitespace.
///
/// Passes repeat until the text stops changing, so
/// `clean_response(&clean_response(x)) == clean_response(x)`.
pub fn clean_response(text: &str) -> String {
    let mut current = clean_once(text);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}
