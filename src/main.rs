mod batch;
mod classifier;
mod docx;
mod raw_store;
mod seed_script;
mod settings;
mod summary;
#[cfg(test)]
mod testutil;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use batch::ExtractionBatch;
use raw_store::RawDocument;
use settings::Settings;
use summary::Summary;

#[derive(Parser)]
#[command(
    name = "problem_seeder",
    about = "Turn problem-statement .docx files into a database seeding script"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract paragraph text from every .docx in a directory
    Extract {
        /// Directory holding the .docx files (default: SEED_INPUT_DIR or ".")
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Where to write the extracted text JSON
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Classify previously extracted text and write the seeding script
    Generate {
        /// Extracted text JSON produced by `extract`
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Where to write the seeding script
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Extract + generate in one pipeline
    Run {
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Intermediate extracted text JSON
        #[arg(short, long)]
        raw: Option<PathBuf>,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Extract and classify a single document, printing the record as JSON
    Inspect { file: PathBuf },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load().context("Invalid SEED_* configuration")?;
    info!(?settings, "Starting problem seeder");

    match cli.command {
        Commands::Extract { dir, out } => {
            let dir = dir.unwrap_or(settings.input_dir);
            let out = out.unwrap_or(settings.raw_output);
            let batch = extract_phase(&dir)?;
            raw_store::save(&out, &batch.documents)?;
            print!("{}", Summary::new(batch.documents.len(), &batch.skipped, &[]).render_markdown());
        }
        Commands::Generate { input, out } => {
            let input = input.unwrap_or(settings.raw_output);
            let out = out.unwrap_or(settings.script_output);
            let docs = raw_store::load(&input)?;
            generate_phase(&docs, &[], &out)?;
        }
        Commands::Run { dir, raw, out } => {
            let dir = dir.unwrap_or(settings.input_dir);
            let raw = raw.unwrap_or(settings.raw_output);
            let out = out.unwrap_or(settings.script_output);

            let batch = extract_phase(&dir)?;
            raw_store::save(&raw, &batch.documents)?;
            generate_phase(&batch.documents, &batch.skipped, &out)?;
        }
        Commands::Inspect { file } => {
            let content = docx::extract_text(&file)
                .with_context(|| format!("Failed to extract {}", file.display()))?;
            let filename = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let record = classifier::classify(&RawDocument { filename, content });
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        info!("Done in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}

fn extract_phase(dir: &Path) -> anyhow::Result<ExtractionBatch> {
    let paths = batch::discover(dir)?;
    info!(dir = %dir.display(), documents = paths.len(), "Extracting");

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );
    Ok(batch::extract_all(&paths, &pb))
}

fn generate_phase(
    docs: &[RawDocument],
    skipped: &[batch::SkippedDocument],
    out: &Path,
) -> anyhow::Result<()> {
    let records = classifier::classify_all(docs);
    seed_script::write(out, &records)?;
    print!("{}", Summary::new(docs.len(), skipped, &records).render_markdown());
    Ok(())
}
