use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::classifier::{escape_literal, ParsedRecord};
use crate::raw_store::ensure_parent;

pub const DEFAULT_SCRIPT_OUTPUT: &str = "server/src/scripts/seedExtractedProblems.ts";

const HEADER: &str = "import mongoose from 'mongoose';
import dotenv from 'dotenv';
import Problem from '../models/Problem';
import connectDB from '../config/db';

dotenv.config();

const problems = [
";

const FOOTER: &str = "];

const seedProblems = async () => {
    try {
        await connectDB();

        console.log('Clearing existing problems...');
        await Problem.deleteMany({});

        console.log('Seeding new problems...');
        await Problem.insertMany(problems);

        console.log('Problems seeded successfully!');
        process.exit(0);
    } catch (error) {
        console.error('Error seeding problems:', error);
        process.exit(1);
    }
};

seedProblems();
";

/// Render the seeding script that replaces the `problems` collection.
pub fn render(records: &[ParsedRecord]) -> String {
    let mut out = String::from(HEADER);
    for r in records {
        out.push_str("    {\n");
        out.push_str(&format!("        title: \"{}\",\n", escape_literal(&r.title)));
        out.push_str(&format!("        category: \"{}\",\n", r.category));
        // Already escaped by the classifier.
        out.push_str(&format!("        description: \"{}\",\n", r.description));
        out.push_str(&format!("        difficulty: \"{}\",\n", r.difficulty));
        out.push_str(&format!("        tags: {}\n", tag_list(&r.tags)));
        out.push_str("    },\n");
    }
    out.push_str(FOOTER);
    out
}

pub fn write(path: &Path, records: &[ParsedRecord]) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, render(records))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), records = records.len(), "Wrote seeding script");
    Ok(())
}

fn tag_list(tags: &[String]) -> String {
    let quoted: Vec<String> = tags
        .iter()
        .map(|t| format!("\"{}\"", escape_literal(t)))
        .collect();
    format!("[{}]", quoted.join(", "))
}
