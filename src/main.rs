//! CLI entry point for the course evaluation rater.
//!
//! Provides subcommands for reporting on every evaluation export for a year
//! and for summarizing a single export.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use course_evals::analyzers::analyzer::{analyze, build_report, summarize_file};
use course_evals::loader::discover_eval_files;
use course_evals::output::{format_course, format_latex, format_report, to_json};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "course_evals")]
#[command(about = "Summarize course evaluation exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report on every evaluation CSV for a year
    Report {
        /// Directory containing evaluation CSVs
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Only include files whose name contains this token
        #[arg(short, long, default_value = "2025")]
        year: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Summarize a single evaluation CSV
    Course {
        /// Path to the evaluation CSV
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Console sections followed by the LaTeX fragment
    Text,
    /// LaTeX fragment only
    Latex,
    /// Structured JSON
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/course_evals.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("course_evals.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { dir, year, format } => {
            let files = discover_eval_files(&dir, &year)?;
            if files.is_empty() {
                warn!(dir = %dir.display(), year = %year, "No evaluation files found");
                println!("No {year} evaluation files found.");
                return Ok(());
            }

            info!(count = files.len(), year = %year, "Analyzing evaluation files");
            let report = analyze(&files, &year)?;

            match format {
                Format::Text => print!("{}", format_report(&report)),
                Format::Latex => print!("{}", format_latex(&report)),
                Format::Json => println!("{}", to_json(&report)?),
            }
        }
        Commands::Course { file, format } => {
            let summary = summarize_file(&file)?;

            match format {
                Format::Text => print!("{}", format_course(&summary.report())),
                Format::Latex => print!("{}", format_latex(&build_report(&[summary], ""))),
                Format::Json => println!("{}", serde_json::to_string_pretty(&summary.report())?),
            }
        }
    }

    Ok(())
}
