//! CLI command definitions and handlers.

pub mod check;

use clap::{Parser, Subcommand};

/// Intake Gate - Photograph intake quality assessment
#[derive(Parser)]
#[command(name = "intake-gate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared check arguments (paths, thresholds, flags).
    #[command(flatten)]
    pub check: check::CheckArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate photographs against the intake quality gate
    Check(check::CheckArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every evaluated photograph was accepted.
    Success,
    /// At least one photograph was rejected.
    Rejected,
    /// A runtime error aborted the run.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::from(0),
            ExitCode::Rejected => Self::from(1),
            ExitCode::Error => Self::from(2),
        }
    }
}
