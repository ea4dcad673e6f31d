//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Regenerate the template registry (`emails/index.ts`)
//! - `check`: Validate template files against the scaffolding conventions
//! - `bump`: Print the release type (`minor`, `patch` or `none`)
//! - `new`: Scaffold a new template file
//! - `init`: Write a default `.mailgenrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
            Some(Command::Generate(args)) | Some(Command::Check(args)) => args.verbose,
            Some(Command::Bump(cmd)) => cmd.common.verbose,
            Some(Command::New(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all project commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory to start the config file search from (defaults to the working directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Templates root, relative to the project root (overrides config file)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct BumpCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Base branch to compare against
    #[arg(long, env = "GITHUB_BASE_REF")]
    pub base_ref: Option<String>,
}

#[derive(Debug, Args)]
pub struct NewCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Email context and action, e.g. "offer update" or "order placed"
    pub name: String,

    /// Folder under the templates root
    #[arg(long, default_value = crate::scaffold::DEFAULT_DOMAIN)]
    pub domain: String,

    /// Preview text shown in email clients (defaults to the name)
    #[arg(long)]
    pub preview: Option<String>,

    /// Path appended to the base URL for the call-to-action button
    #[arg(long)]
    pub button_path: Option<String>,

    /// Overwrite an existing template file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the typed template registry from the templates directory
    Generate(CommonArgs),
    /// Check templates against naming conventions and registry membership
    Check(CommonArgs),
    /// Classify the change against the base branch as minor, patch or none
    Bump(BumpCommand),
    /// Scaffold a new email template
    New(NewCommand),
    /// Initialize a new .mailgenrc.json configuration file
    Init,
}
