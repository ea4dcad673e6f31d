//! Command-line interface layer.
//!
//! Parses arguments, dispatches to the command handlers and maps their
//! outcome to a process exit status.

pub mod args;
mod commands;
pub mod report;

use std::process::ExitCode;

use anyhow::Result;

pub use args::{Arguments, Command};
use commands::{bump::bump, check::check, generate::generate, init::init, new::new};

use crate::logging::init_logging;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, nothing to report
/// - `Failure` (1): Invalid templates were found, or a precondition failed
/// - `Error` (2): Internal error (I/O, config parse error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    init_logging(args.verbose());

    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(ExitStatus::Success.into());
    };

    let status = match command {
        Command::Generate(args) => generate(&args)?,
        Command::Check(args) => check(&args)?,
        Command::Bump(cmd) => bump(&cmd)?,
        Command::New(cmd) => new(&cmd)?,
        Command::Init => init()?,
    };

    Ok(status.into())
}
