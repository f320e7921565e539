//! Command-line resume extractor
//!
//! Thin front end over the cvextract pipeline: extract one or more resume
//! documents and print the recognized candidate fields, as a human-readable
//! summary or as JSON for downstream tooling.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use cvextract_backend::{ExtractionResult, ResumeExtractor};
use cvextract_core::DocumentFormat;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "cvextract",
    version,
    about = "Extract candidate fields (name, email, phone) from resume documents",
    long_about = "Extracts plain text from PDF/DOCX resumes and applies heuristic \
                  pattern matching to recover a candidate's name, email address, and \
                  phone number. Matching is best-effort; the text prefix is printed \
                  as a manual-review fallback."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract candidate fields from one or more resume files
    Extract {
        /// Resume files (.pdf or .docx)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Emit one JSON object per file instead of the summary
        #[arg(long)]
        json: bool,

        /// Dump the raw extracted text instead of recognized fields
        #[arg(long, conflicts_with = "json")]
        text: bool,
    },

    /// List supported document formats
    Formats {
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },
}

/// JSON shape for `extract --json`, one object per input file.
#[derive(Serialize)]
struct ExtractReport<'a> {
    file: String,
    format: DocumentFormat,
    name: Option<&'a str>,
    email: Option<&'a str>,
    phone: Option<&'a str>,
    text_prefix: &'a str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { files, json, text } => run_extract(&files, json, text),
        Commands::Formats { json } => {
            run_formats(json);
            Ok(())
        }
    }
}

fn run_extract(files: &[PathBuf], json: bool, text: bool) -> Result<()> {
    let extractor = ResumeExtractor::new();
    let mut failures = 0usize;

    for file in files {
        match extractor.process_file(file) {
            Ok(result) => {
                if json {
                    print_json(file, &result)?;
                } else if text {
                    print!("{}", result.text);
                } else {
                    print_summary(file, &result);
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {e}", "error:".red().bold(), file.display());
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} file(s) failed");
    }
    Ok(())
}

fn print_json(file: &Path, result: &ExtractionResult) -> Result<()> {
    let report = ExtractReport {
        file: file.display().to_string(),
        format: result.format,
        name: result.info.name.as_deref(),
        email: result.info.email.as_deref(),
        phone: result.info.phone.as_deref(),
        text_prefix: &result.info.text_prefix,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_summary(file: &Path, result: &ExtractionResult) {
    println!(
        "{} ({}, {} ms)",
        file.display().to_string().bold(),
        result.format,
        result.elapsed.as_millis()
    );
    print_field("name", result.info.name.as_deref());
    print_field("email", result.info.email.as_deref());
    print_field("phone", result.info.phone.as_deref());
    if result.info.name.is_none() || result.info.email.is_none() || result.info.phone.is_none()
    {
        // Fallback hint for manual correction
        println!("  {:<6} {:?}", "prefix".cyan(), result.info.text_prefix);
    }
    println!();
}

fn print_field(label: &str, value: Option<&str>) {
    match value {
        Some(v) => println!("  {:<6} {v}", label.cyan()),
        None => println!("  {:<6} {}", label.cyan(), "(not found)".dimmed()),
    }
}

fn run_formats(json: bool) {
    if json {
        let formats: Vec<_> = DocumentFormat::all()
            .iter()
            .map(|f| {
                serde_json::json!({
                    "format": f,
                    "extensions": f.extensions(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&formats).expect("static format list serializes")
        );
    } else {
        println!("{}", "Supported formats:".bold());
        for format in DocumentFormat::all() {
            let exts: Vec<String> = format
                .extensions()
                .iter()
                .map(|e| format!(".{e}"))
                .collect();
            println!("  {:<5} {}", format.to_string().cyan(), exts.join(", "));
        }
    }
}
