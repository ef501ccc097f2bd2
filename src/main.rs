// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use serde::Serialize;

use dir_count::{METRIC_KEY, VERSION, WalkOptionsBuilder};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "dir_count",
    version = VERSION,
    about = "Count directory entries the way the vfs.dir.count metric does"
)]
struct Args {
    /// Metric key to evaluate
    #[arg(long, default_value = METRIC_KEY)]
    key: String,

    /// Follow symbolic links while walking
    #[arg(long)]
    follow_links: bool,

    /// Stay on the filesystem of the root directory
    #[arg(long)]
    same_file_system: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    format: OutputFormat,

    /// Log level; RUST_LOG is used when omitted
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Print the supported metric keys and exit
    #[arg(long)]
    list_metrics: bool,

    /// path, include regex, exclude regex, include types, exclude types,
    /// max depth, min size, max size, min age, max age, exclude dir regex
    #[arg(value_name = "PARAMS", allow_negative_numbers = true)]
    params: Vec<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    key: &'a str,
    value: u64,
}

fn setup_logging(level: Option<LogLevel>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level.into());
    }
    builder.format_timestamp(None).init();
}

fn run(args: &Args) -> Result<String> {
    if args.list_metrics {
        let lines: Vec<String> = dir_count::metrics()
            .iter()
            .map(|(key, description)| format!("{key}\t{description}"))
            .collect();
        return Ok(lines.join("\n"));
    }

    let options = WalkOptionsBuilder::default()
        .follow_links(args.follow_links)
        .same_file_system(args.same_file_system)
        .build()?;
    let value = dir_count::export_with(&args.key, &args.params, &options)?;

    match args.format {
        OutputFormat::Plain => Ok(value.to_string()),
        OutputFormat::Json => serde_json::to_string(&Report { key: &args.key, value })
            .context("failed to encode JSON report"),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.log_level);

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
