/// The trimmed, non-empty lines of a document's flattened text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingText {
    lines: Vec<String>,
}

impl WorkingText {
    pub fn from_raw(raw: &str) -> Self {
        let lines = raw
            .split('\n')
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        WorkingText { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
