use crate::batch::SkippedDocument;
use crate::classifier::ParsedRecord;

pub struct Summary {
    extracted: usize,
    skipped: Vec<(String, String)>,
    categories: Vec<(String, usize)>,
    records: usize,
}

impl Summary {
    pub fn new(extracted: usize, skipped: &[SkippedDocument], records: &[ParsedRecord]) -> Self {
        Summary {
            extracted,
            skipped: skipped
                .iter()
                .map(|s| (s.filename.clone(), s.error.to_string()))
                .collect(),
            categories: category_counts(records),
            records: records.len(),
        }
    }

    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("## Seeding Summary\n");
        out.push_str(&format!(
            "- Documents extracted: {}\n- Documents skipped: {}\n- Records generated: {}\n",
            self.extracted,
            self.skipped.len(),
            self.records
        ));

        if !self.categories.is_empty() {
            out.push_str("\n### Records by category\n");
            for (category, count) in &self.categories {
                out.push_str(&format!(
                    "- {}: {} ({:.1}%)\n",
                    category,
                    count,
                    percent(*count, self.records)
                ));
            }
        }

        if !self.skipped.is_empty() {
            out.push_str("\n### Skipped documents\n");
            for (filename, reason) in &self.skipped {
                out.push_str(&format!("- {}: {}\n", filename, reason));
            }
        }

        out
    }
}

/// Counts per category, in the order categories first appear.
fn category_counts(records: &[ParsedRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for r in records {
        match counts.iter_mut().find(|(c, _)| *c == r.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((r.category.clone(), 1)),
        }
    }
    counts
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
