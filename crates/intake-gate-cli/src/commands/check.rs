//! Check command - evaluate photographs against the intake gate.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use intake_gate_adapters::FsImageSource;
use intake_gate_core::{
    EvaluationRecord, GateConfig, ImageSource, ProgressEvent, ProgressSink, QualityGate,
    VerdictOutput,
};
use tracing::{debug, info};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{JsonOutput, ProgressBar};

/// Output format for records.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON Lines (one JSON object per line)
    #[default]
    Jsonl,
    /// Single JSON array
    Json,
}

/// Parse and validate a threshold value (0.0-1.0).
fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0.0..=1.0"))
    }
}

/// Shared arguments for photograph evaluation.
#[derive(Args, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Files or directories to evaluate
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Minimum width in pixels
    #[arg(long, value_name = "PIXELS")]
    pub min_width: Option<u32>,

    /// Minimum height in pixels
    #[arg(long, value_name = "PIXELS")]
    pub min_height: Option<u32>,

    /// Blur score at or below which a photograph counts as blurry (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub blur_threshold: Option<f64>,

    /// Quality score required for acceptance (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub accept_threshold: Option<f64>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,
}

impl CheckArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Canonical gate defaults
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    #[must_use]
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        // Recursive: config applies only if CLI --recursive not passed
        if !args.recursive {
            args.recursive = config.general.recursive.unwrap_or(false);
        }

        // Gate thresholds: CLI > config (gate_config provides the fallback)
        args.min_width = args.min_width.or(config.gate.min_width);
        args.min_height = args.min_height.or(config.gate.min_height);
        args.blur_threshold = args.blur_threshold.or(config.gate.blur_threshold);
        args.accept_threshold = args.accept_threshold.or(config.gate.accept_threshold);

        // Output format: CLI > config
        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_ref()
                .and_then(|s| match s.as_str() {
                    "json" => Some(OutputFormat::Json),
                    "jsonl" => Some(OutputFormat::Jsonl),
                    _ => None,
                });
        }

        // Boolean output options: CLI flag wins, then config
        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        args
    }

    /// Gate thresholds with fallback to the canonical defaults.
    fn gate_config(&self) -> GateConfig {
        let defaults = GateConfig::default();
        GateConfig {
            min_width: self.min_width.unwrap_or(defaults.min_width),
            min_height: self.min_height.unwrap_or(defaults.min_height),
            blur_threshold: self.blur_threshold.unwrap_or(defaults.blur_threshold),
            accept_threshold: self.accept_threshold.unwrap_or(defaults.accept_threshold),
            ..defaults
        }
    }

    /// Output format with fallback to JSONL.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Jsonl)
    }
}

/// Result of running the check command.
#[allow(dead_code)] // Fields exposed for programmatic use
pub struct CheckResult {
    /// Number of photographs evaluated.
    pub processed: usize,
    /// Number of inputs skipped (unreadable or undecodable).
    pub skipped: usize,
    /// Number of evaluated photographs that were rejected.
    pub rejected: usize,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the check command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &CheckArgs) -> Result<CheckResult> {
    info!("Running check command on {} paths", args.paths.len());

    if args.paths.is_empty() {
        anyhow::bail!("No paths specified");
    }

    let source = FsImageSource::new(args.paths.clone(), args.recursive);
    let total = source.count_hint();

    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());
    let progress_bar = ProgressBar::new(total.map(|t| t as u64), args.quiet, show_progress);

    let output = JsonOutput::stdout();

    let gate = QualityGate::new(args.gate_config());
    debug!(config = ?gate.config(), "gate configured");

    process_images(&source, &gate, &output, &progress_bar, args)
}

/// Evaluate every image the source yields.
fn process_images(
    source: &FsImageSource,
    gate: &QualityGate,
    output: &JsonOutput,
    progress: &ProgressBar,
    args: &CheckArgs,
) -> Result<CheckResult> {
    let total = source.count_hint();
    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut rejected = 0usize;
    let mut all_records: Vec<EvaluationRecord> = Vec::new();

    for (index, image_result) in source.images().enumerate() {
        let raw = match image_result {
            Ok(raw) => raw,
            Err(e) => {
                // Note: error message contains the path via anyhow context
                progress.on_event(ProgressEvent::Skipped {
                    path: format!("input {index}"),
                    reason: e.to_string(),
                });
                skipped += 1;
                continue;
            }
        };

        progress.on_event(ProgressEvent::Started {
            path: raw.path.clone(),
            index,
            total,
        });

        // A decode or processing failure is a terminal failure for that
        // input, never a rejected verdict; report it distinctly and move on.
        let verdict = match gate.evaluate(&raw.bytes) {
            Ok(verdict) => verdict,
            Err(e) => {
                progress.on_event(ProgressEvent::Skipped {
                    path: raw.path.clone(),
                    reason: format!("{} error: {e}", e.kind()),
                });
                skipped += 1;
                continue;
            }
        };

        if !verdict.accepted {
            rejected += 1;
        }

        let record = EvaluationRecord {
            path: raw.path,
            timestamp: rfc3339_timestamp(),
            verdict,
        };

        progress.on_event(ProgressEvent::Completed {
            record: record.clone(),
        });

        match args.format() {
            OutputFormat::Jsonl => {
                output.write(&record)?;
            }
            OutputFormat::Json => {
                all_records.push(record);
            }
        }

        processed += 1;
    }

    if matches!(args.format(), OutputFormat::Json) {
        output.write_array(&all_records, args.pretty)?;
    }

    output.flush()?;

    progress.on_event(ProgressEvent::Finished {
        processed,
        skipped,
        rejected,
    });

    let exit_code = if rejected > 0 {
        ExitCode::Rejected
    } else {
        ExitCode::Success
    };

    Ok(CheckResult {
        processed,
        skipped,
        rejected,
        exit_code,
    })
}

/// Generate ISO 8601 UTC timestamp (RFC 3339 format).
fn rfc3339_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}
