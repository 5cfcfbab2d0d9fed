pub mod rules;
pub mod text;
pub mod title;

use serde::Serialize;

use crate::raw_store::RawDocument;
use rules::{first_match, DEFAULT_CATEGORY, RULES};
use text::WorkingText;
use title::infer_title;

pub const DEFAULT_DIFFICULTY: &str = "Medium";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRecord {
    pub title: String,
    pub category: String,
    pub description: String,
    pub difficulty: String,
    pub tags: Vec<String>,
}

/// Title → category/tags → description. Never fails; degenerate input gets
/// the fallback values.
pub fn classify(doc: &RawDocument) -> ParsedRecord {
    let text = WorkingText::from_raw(&doc.content);
    let title = infer_title(&text, &doc.filename);

    let (category, tags) = match first_match(RULES, &title, &doc.content) {
        Some(rule) => (
            rule.category.to_string(),
            rule.tags.iter().map(|t| t.to_string()).collect(),
        ),
        None => (DEFAULT_CATEGORY.to_string(), Vec::new()),
    };

    ParsedRecord {
        title,
        category,
        description: escape_literal(&doc.content),
        difficulty: DEFAULT_DIFFICULTY.to_string(),
        tags,
    }
}

pub fn classify_all(docs: &[RawDocument]) -> Vec<ParsedRecord> {
    docs.iter().map(classify).collect()
}

/// Make text safe inside a double-quoted string literal: `"` becomes `\"` and
/// a newline becomes the two characters `\n`. Backslashes are left alone.
pub fn escape_literal(s: &str) -> String {
    s.replace('"', "\\\"").replace('\n', "\\n")
}

// ── Tests ──
