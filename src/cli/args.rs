//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `resolve`: Resolve documentation metadata for declaration files
//! - `init`: Write a default `.docviewrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Resolve(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve titles, names, descriptions and required flags
    Resolve(ResolveCommand),
    /// Create a .docviewrc.json with the default settings
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Declaration files, or directories searched for `*.json` declaration files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Configuration file (default: nearest .docviewrc.json)
    #[arg(long, env = "DOCVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show which source produced each value
    #[arg(long)]
    pub explain: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
