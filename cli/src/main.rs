//! bloodtest
//!
//! Desktop harness around the native analysis library:
//! `bloodtest <bloodTestImagePath>`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bloodtest_core::result::TestResult;
use bloodtest_native::{native_analyzer, NativeMat};
use clap::{Parser, ValueEnum};
use serde_json::{json, Map, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit code for unreadable images and failed analyses.
const FAILURE_EXIT: u8 = 255;

#[derive(Parser, Debug)]
#[command(name = "bloodtest")]
#[command(about = "Analyze a blood test image and print the measured values")]
struct Cli {
    /// Path of the blood test image
    image: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter (e.g. `debug`). Falls back to RUST_LOG, then `warn`
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(result: &TestResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(result.render()),
        OutputFormat::Json => {
            let samples: Map<String, Value> = result
                .concentrations()
                .map(|(sample, value)| (sample.to_string(), json!(value)))
                .collect();
            let report = json!({
                "values": result.values,
                "samples": samples,
                "qc1_variation": result.qc1_variation,
                "qc2_variation": result.qc2_variation,
            });
            Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let image = NativeMat::read(&cli.image)?;
    let result = native_analyzer()
        .analyze(&image)
        .with_context(|| format!("analysis of {} failed", cli.image.display()))?;
    info!(image = %cli.image.display(), "analysis finished");
    render(&result, cli.format)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(FAILURE_EXIT)
        }
    }
}
