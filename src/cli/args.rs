//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `annotate`: Show translations for quoted translation paths in source files
//! - `locate`: Print where a translation key is declared
//! - `select-locale`: Register a translation file in the `.lingua` config
//! - `init`: Create a default `.lingua` config

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Annotate(cmd)) => cmd.common.verbose,
            Some(Command::Locate(cmd)) => cmd.common.verbose,
            Some(Command::SelectLocale(cmd)) => cmd.common.verbose,
            Some(Command::Init(cmd)) => cmd.common.verbose,
            None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to start the .lingua lookup from (defaults to the current directory)
    #[arg(long, env = "LINGUA_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Annotated source excerpts
    Text,
    /// Both annotation layers per file as JSON
    Json,
}

#[derive(Debug, Args)]
pub struct AnnotateCommand {
    /// Files to annotate (default: every file matching `analysisExtensions`)
    pub files: Vec<PathBuf>,

    /// Language to annotate with (default: `defaultLanguage`, then the first translation file)
    #[arg(long)]
    pub lang: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also mark quoted paths that have no translation
    #[arg(long)]
    pub show_potential: bool,

    /// Only show translations on hover, never inline
    #[arg(long)]
    pub no_inline: bool,

    /// Truncate translations longer than this many characters
    #[arg(long)]
    pub max_length: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LocateCommand {
    /// Translation key, quotes and stray dots are ignored
    pub key: String,

    /// Language file to search (default: `defaultLanguage`, then the first translation file)
    #[arg(long)]
    pub lang: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SelectLocaleCommand {
    /// Translation JSON file
    pub file: PathBuf,

    /// Language held by the file (e.g. `de` or `en`)
    #[arg(long)]
    pub locale: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show translations for quoted translation paths in source files
    Annotate(AnnotateCommand),
    /// Print the file and line where a translation key is declared
    Locate(LocateCommand),
    /// Register a translation file for a language in .lingua
    SelectLocale(SelectLocaleCommand),
    /// Initialize a new .lingua configuration file
    Init(InitCommand),
}
