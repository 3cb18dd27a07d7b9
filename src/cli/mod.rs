//! Command-line interface layer.
//!
//! Kept apart from the resolver so docview can be used as a library; all
//! file reading and printing happens here.

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command, OutputFormat, ResolveCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Resolve(cmd)) => commands::resolve::resolve(&cmd),
        Some(Command::Init) => commands::init::init(),
        None => Ok(ExitStatus::Success),
    }
}
