use std::path::Path;

use super::text::WorkingText;

pub const TITLE_MARKER: &str = "Title";

/// Marker lines at or above this many characters are treated as body prose.
pub const MARKER_LINE_MAX_CHARS: usize = 100;

/// Pick a title: the text after a short "Title" marker line, else the line
/// following an empty marker, else the first line, else the file stem.
pub fn infer_title(text: &WorkingText, filename: &str) -> String {
    let lines = text.lines();
    if let Some(idx) = lines.iter().position(|l| is_marker_line(l)) {
        let title = after_marker(&lines[idx]);
        if !title.is_empty() {
            return title.to_string();
        }
        if let Some(next) = lines.get(idx + 1) {
            return next.clone();
        }
    }

    match lines.first() {
        Some(first) => first.clone(),
        None => file_stem(filename),
    }
}

fn is_marker_line(line: &str) -> bool {
    line.contains(TITLE_MARKER) && line.chars().count() < MARKER_LINE_MAX_CHARS
}

// Colons and whitespace are trimmed together, so "Title : X" gives "X" and
// not ": X".
fn after_marker(line: &str) -> &str {
    line.split_once(TITLE_MARKER)
        .map(|(_, rest)| rest)
        .unwrap_or_default()
        .trim_matches(|c: char| c == ':' || c.is_whitespace())
}

fn file_stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
