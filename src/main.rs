mod analysis;
mod detection;
mod engine;
mod loader;
mod models;
mod report;
mod types;

use std::fs::{create_dir_all, File};
use std::io::stderr;
use std::path::PathBuf;
use std::process::exit;
use std::sync::Mutex;

use anyhow::Result;
use chrono::Local;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::detection::DetectorConfig;
use crate::engine::AnalysisEngine;
use crate::report::write_report;

const DEFAULT_OUTPUT_DIR: &str = "output";
const LOG_DIR: &str = "logs";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cardops-insight [input].csv [output_dir:optional] [log_level:optional]");
        eprintln!("Default output directory: {DEFAULT_OUTPUT_DIR}");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: info)");
        exit(1);
    }

    let path = &args[1];
    let output_dir = args.get(2)
        .map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::INFO);

    setup_logging(log_level);

    let engine = AnalysisEngine::new(DetectorConfig::default());

    let outcome = match engine.run(path).await {
        Ok(outcome) => outcome,
        Err(error) => {
            error!("Unable to analyse [{path}]: {error}");
            exit(1);
        }
    };

    let paths = match write_report(&outcome.summary, &outcome.anomalies(), &output_dir) {
        Ok(paths) => paths,
        Err(error) => {
            error!("Unable to write the report to [{}]: {error}", output_dir.display());
            exit(1);
        }
    };

    info!("Report generated: [{}] and [{}]", paths.summary.display(), paths.anomalies.display());

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    //NOTE: The file log always records debug output, independent of the console level
    let file_log = match create_log_file() {
        Ok(file) => Some(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_filter(LevelFilter::DEBUG)
        ),
        Err(error) => {
            eprintln!("Unable to create a log file in '{LOG_DIR}', logging to the console only: {error}");
            None
        }
    };

    tracing_subscriber::registry()
        .with(terminal_log)
        .with(file_log)
        .init();
}

fn create_log_file() -> std::io::Result<File> {
    create_dir_all(LOG_DIR)?;

    let stamp = Local::now().format("%Y%m%d_%H%M%S");

    File::create(PathBuf::from(LOG_DIR).join(format!("log_{stamp}.log")))
}
