//! Command-line host for the annotation engine.

use std::process::ExitCode;

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command, OutputFormat};
pub use commands::annotate::AnnotatedFile;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = match args.command {
        Some(Command::Annotate(cmd)) => commands::annotate::annotate(cmd)?,
        Some(Command::Locate(cmd)) => commands::locate::locate(cmd)?,
        Some(Command::SelectLocale(cmd)) => commands::select_locale::select_locale(cmd)?,
        Some(Command::Init(cmd)) => commands::init::init(cmd)?,
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    };

    Ok(status.into())
}
