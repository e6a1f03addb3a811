//! CLI command implementations

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::reader::{self, DocumentFormat};
use crate::summarizer::{self, Language, RankedSentence, Summarizer};

/// Lines of the generated sample transcript
pub const SAMPLE_TRANSCRIPT: [&str; 6] = [
    "Speaker 1: Hello everyone, and welcome to today's meeting.",
    "[00:00:15] Speaker 2: Let's discuss the new project proposal.",
    "Speaker 1: Main points include expanding market reach and optimizing workflows.",
    "Speaker 3: What about the budget allocation for this expansion?",
    "Speaker 2: Significant portion for marketing and product development.",
    "Speaker 1: Goal is a 20% increase in engagement in two quarters.",
];

/// Options of the `summarize` command
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    pub input: PathBuf,
    pub sentences: Option<usize>,
    pub language: Option<String>,
    pub output: Option<PathBuf>,
    pub generate_sample: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    input: String,
    language: Language,
    sentences: &'a [RankedSentence],
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

/// Summarize a single document
pub fn summarize_file(settings: &Settings, options: SummarizeOptions) -> Result<()> {
    let sentences = options
        .sentences
        .unwrap_or(settings.summary.sentences)
        .max(1);
    let language = options
        .language
        .unwrap_or_else(|| settings.summary.language.clone());
    let input = options.input;

    let is_docx = matches!(
        DocumentFormat::from_path(&input),
        Ok(DocumentFormat::WordProcessor)
    );

    if is_docx && !input.exists() {
        if options.generate_sample {
            write_sample(&input)?;
        } else {
            anyhow::bail!(
                "DOCX not found: {}. Use --generate-sample to create a sample here.",
                input.display()
            );
        }
    }

    if options.json {
        let text = if is_docx {
            summarizer::read_document_text(&input)?
        } else {
            Some(reader::read_document(&input)?)
        };

        let engine = Summarizer::new(&language);
        let (selected, message) = match text {
            Some(text) => (engine.select(&text, sentences), None),
            None => (Vec::new(), Some(summarizer::EMPTY_DOCUMENT_MESSAGE)),
        };

        let report = SummaryReport {
            input: input.display().to_string(),
            language: engine.language(),
            sentences: &selected,
            message,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let summary = if is_docx {
        summarizer::summarize_document(&input, sentences, &language)?
    } else {
        let text = reader::read_document(&input)?;
        summarizer::summarize(&text, sentences, &language)
    };

    match options.output {
        Some(path) => {
            write_summary(&path, &summary)?;
            println!("Summary written to: {}", path.display());
        }
        None => println!("{}", summary),
    }

    Ok(())
}

/// Summarize every .docx of a folder into `<stem>_summary.docx` files.
///
/// Files are processed on the blocking pool; a failing file is logged and
/// skipped.
pub async fn run_batch(
    settings: &Settings,
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    sentences: Option<usize>,
) -> Result<()> {
    let input_dir = input_dir.unwrap_or_else(|| settings.batch.input_dir.clone());
    let output_dir = output_dir.unwrap_or_else(|| settings.batch.output_dir.clone());
    let sentences = sentences.unwrap_or(settings.summary.sentences).max(1);
    let language = settings.summary.language.clone();

    for dir in [&input_dir, &output_dir] {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let docx_files = find_docx_files(&input_dir)?;
    if docx_files.is_empty() {
        tracing::info!("No .docx files found in {}", input_dir.display());
        println!("No .docx files found in {}", input_dir.display());
        return Ok(());
    }

    let mut tasks = JoinSet::new();
    for path in docx_files.iter().cloned() {
        let output_dir = output_dir.clone();
        let language = language.clone();
        tasks.spawn_blocking(move || {
            tracing::info!("Processing DOCX: {}", path.display());
            let result = summarize_to_docx(&path, &output_dir, sentences, &language);
            (path, result)
        });
    }

    let mut outcomes = Vec::with_capacity(docx_files.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(outcome) => outcomes.push(outcome),
            Err(err) => tracing::error!("Summary task failed: {}", err),
        }
    }
    outcomes.sort_by(|a, b| a.0.cmp(&b.0));

    for (path, result) in &outcomes {
        match result {
            Ok(summary_path) => {
                tracing::info!("Wrote summary DOCX: {}", summary_path.display())
            }
            Err(err) => tracing::error!("Failed to process {}: {:#}", path.display(), err),
        }
    }

    println!(
        "Processed {} file(s). Summaries are in {}",
        docx_files.len(),
        output_dir.display()
    );

    Ok(())
}

/// Write the sample meeting transcript
pub fn write_sample(path: &Path) -> Result<()> {
    reader::write_paragraphs(path, &SAMPLE_TRANSCRIPT)
        .with_context(|| format!("Failed to write sample DOCX: {}", path.display()))?;
    tracing::info!("Created sample DOCX at {}", path.display());
    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DoctorFormat {
    format: &'static str,
    status: &'static str,
    detail: &'static str,
}

#[derive(Serialize)]
struct DoctorReport {
    version: &'static str,
    formats: Vec<DoctorFormat>,
    language: String,
    language_supported: bool,
    sentences: usize,
    log_dir: String,
    notes: Vec<String>,
}

/// Report which formats this build reads and which settings are active
pub fn run_doctor(settings: &Settings, json: bool) -> Result<()> {
    let report = collect_doctor_report(settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("recap doctor ({})", report.version);
    println!(
        "language: {}{}",
        report.language,
        if report.language_supported {
            ""
        } else {
            " (unsupported)"
        }
    );
    println!("sentences: {}", report.sentences);
    println!("logs: {}", report.log_dir);
    println!();

    for format in &report.formats {
        println!("{:<6} {:<8} {}", format.format, format.status, format.detail);
    }

    if !report.notes.is_empty() {
        println!();
        for note in &report.notes {
            println!("{}", note);
        }
    }

    Ok(())
}

fn collect_doctor_report(settings: &Settings) -> DoctorReport {
    let formats: Vec<DoctorFormat> = DocumentFormat::all()
        .into_iter()
        .map(|format| DoctorFormat {
            format: format.label(),
            status: if format.is_available() {
                "ok"
            } else {
                "missing"
            },
            detail: match format {
                DocumentFormat::PlainText => "built in",
                DocumentFormat::WordProcessor => "requires the `docx` feature",
                DocumentFormat::Pdf => "requires the `pdf` feature",
            },
        })
        .collect();

    let language_supported = Language::parse(&settings.summary.language).is_some();

    let mut notes = Vec::new();
    if !language_supported {
        notes.push(format!(
            "warning: no resources for language '{}'; english rules will be used.",
            settings.summary.language
        ));
    }
    for format in &formats {
        if format.status != "ok" {
            notes.push(format!(
                "hint: rebuild with `--features {}` to read .{} files.",
                format.format, format.format
            ));
        }
    }

    DoctorReport {
        version: crate::VERSION,
        formats,
        language: settings.summary.language.clone(),
        language_supported,
        sentences: settings.summary.sentences,
        log_dir: settings.log_dir().display().to_string(),
        notes,
    }
}

// Helper functions

fn find_docx_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory: {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        let is_docx = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"));
        if is_docx && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn summarize_to_docx(
    path: &Path,
    output_dir: &Path,
    sentences: usize,
    language: &str,
) -> Result<PathBuf> {
    let summary = summarizer::summarize_document(path, sentences, language)?;

    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("Input file has no usable name")?;
    let summary_path = output_dir.join(format!("{}_summary.docx", stem));

    let lines: Vec<&str> = summary.lines().collect();
    reader::write_paragraphs(&summary_path, &lines)?;

    Ok(summary_path)
}

fn write_summary(path: &Path, summary: &str) -> Result<()> {
    if matches!(
        DocumentFormat::from_path(path),
        Ok(DocumentFormat::WordProcessor)
    ) {
        let lines: Vec<&str> = summary.lines().collect();
        reader::write_paragraphs(path, &lines)?;
    } else {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, format!("{}\n", summary))
            .with_context(|| format!("Failed to write summary: {}", path.display()))?;
    }

    Ok(())
}
