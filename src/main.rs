//! Photo Metadata Privacy Analyzer - Command-Line Interface
//! Author: kartik4091
//! Created: 2025-06-06
//!
//! Analyzes one or more images and prints a privacy report per image.
//! Exit status: 0 when every image was analyzed, 2 when any image could not
//! be decoded, 1 on configuration or I/O failure.

use std::path::PathBuf;
use std::process;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command, ValueEnum};
use futures::future::try_join_all;
use photo_pii::{
    AnalyzerConfig, LabelledResponse, Logger, Pipeline, ReportFormat, ReportGenerator,
};
use tracing::{debug, error, info};

const EXIT_IO: i32 = 1;
const EXIT_EXTRACTION: i32 = 2;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// JSON report (default)
    Json,
    /// Plain text report
    Text,
    /// Markdown report
    Markdown,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Text => ReportFormat::PlainText,
            OutputFormat::Markdown => ReportFormat::Markdown,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages (default)
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and all messages
    Debug,
    /// Trace and all messages (most verbose)
    Trace,
}

impl LogLevel {
    fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let log_level = matches
        .get_one::<LogLevel>("verbose")
        .copied()
        .unwrap_or(LogLevel::Warn);
    Logger::with_level(log_level.as_filter()).init();

    match run(&matches).await {
        Ok(code) => process::exit(code),
        Err(message) => {
            error!("{}", message);
            eprintln!("error: {}", message);
            process::exit(EXIT_IO);
        }
    }
}

async fn run(matches: &ArgMatches) -> Result<i32, String> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => AnalyzerConfig::from_file(path)
            .map_err(|e| format!("Failed to load config {}: {}", path.display(), e))?,
        None => AnalyzerConfig::default(),
    };
    let pipeline = Pipeline::new(config).map_err(|e| e.to_string())?;
    debug!(?pipeline, "Pipeline ready");

    let images: Vec<PathBuf> = matches
        .get_many::<PathBuf>("images")
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default();
    let inputs = read_inputs(&images).await?;

    info!(count = inputs.len(), "Analyzing images");
    let batch = tokio::task::spawn_blocking(move || pipeline.analyze_batch(inputs))
        .await
        .map_err(|e| format!("Analysis task failed: {}", e))?;

    let any_failed = batch.iter().any(|item| item.response.is_error());
    let labelled: Vec<LabelledResponse> = batch
        .into_iter()
        .map(|item| LabelledResponse::new(item.path_or_id, item.response))
        .collect();

    let format: ReportFormat = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(OutputFormat::Json)
        .into();

    match matches.get_one::<PathBuf>("output") {
        Some(path) => {
            ReportGenerator::generate(&labelled, format, path)
                .await
                .map_err(|e| format!("Failed to write report {}: {}", path.display(), e))?;
            info!("Report written to {}", path.display());
        }
        None => {
            let rendered = ReportGenerator::render(&labelled, format).map_err(|e| e.to_string())?;
            println!("{}", rendered);
        }
    }

    Ok(if any_failed { EXIT_EXTRACTION } else { 0 })
}

async fn read_inputs(paths: &[PathBuf]) -> Result<Vec<(String, Vec<u8>)>, String> {
    try_join_all(paths.iter().map(|path| async move {
        tokio::fs::read(path)
            .await
            .map(|bytes| (path.display().to_string(), bytes))
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))
    }))
    .await
}

fn build_cli() -> Command {
    Command::new("photo-pii")
        .version(env!("CARGO_PKG_VERSION"))
        .author("kartik4091")
        .about("Detects privacy-sensitive metadata embedded in photos")
        .long_about(
            "Extracts embedded tag data (EXIF, GPS) and container text from images and reports \
             location, timestamp, device, personal and network information with an overall risk level.",
        )
        .arg(
            Arg::new("images")
                .value_name("IMAGES")
                .help("Image files to analyze")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append)
                .num_args(1..)
                .required(true),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_parser(value_parser!(OutputFormat))
                .default_value("json")
                .help("Report format"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Write the report to a file instead of stdout"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file (JSON/YAML)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .value_parser(value_parser!(LogLevel))
                .default_value("warn")
                .help("Set logging verbosity (RUST_LOG overrides)"),
        )
}
