//! CLI argument definitions.
//!
//! This module defines the host CLI ([`Cli`]) and the option set of the
//! `metadata` command ([`MetadataOptions`]). The host passes the command's
//! arguments through untouched so the command parses its own options.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// tracectl - Control tracing sessions.
#[derive(Debug, Parser)]
#[command(name = "tracectl")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress informational messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Directory holding the rc file (defaults to the user's home)
    #[arg(long, value_name = "DIR", env = "TRACECTL_HOME")]
    pub home: Option<PathBuf>,

    /// Simple listing of commands
    #[arg(long)]
    pub list_commands: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the metadata of a tracing session
    #[command(disable_help_flag = true)]
    Metadata(PassthroughArgs),
}

/// Raw arguments handed to a command that parses its own options.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PassthroughArgs {
    /// Command options and action
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl PassthroughArgs {
    /// Argument vector with the command name at index 0.
    pub fn argv(&self, command: &str) -> Vec<String> {
        std::iter::once(command.to_string())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// Options of the `metadata` command.
///
/// Flags may appear before or after the action; everything that is not an
/// option lands in `residual`, action name first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "metadata")]
#[command(disable_help_flag = true, args_override_self = true)]
pub struct MetadataOptions {
    /// Show this help
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Simple listing of options
    #[arg(long)]
    pub list_options: bool,

    /// Simple listing of actions
    #[arg(long)]
    pub list_commands: bool,

    /// Apply to session name
    #[arg(short, long, value_name = "NAME", allow_hyphen_values = true)]
    pub session: Option<String>,

    /// Action name followed by its arguments
    #[arg(value_name = "ACTION")]
    pub residual: Vec<String>,
}
