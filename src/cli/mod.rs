//! Command-line interface for tracectl.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap's derive macros
//! - [`options`] - Option parsing, usage and listings of the `metadata` command
//! - [`actions`] - Action registry and dispatch
//! - [`commands`] - Command implementations
//! - [`outcome`] - Translation of results into exit codes and diagnostics

pub mod actions;
pub mod args;
pub mod commands;
pub mod options;
pub mod outcome;

pub use actions::{ActionContext, ActionDispatcher, ActionEntry, ActionHandler, ActionRegistry};
pub use args::{Cli, Commands, MetadataOptions, PassthroughArgs};
pub use commands::{
    Command, CommandDispatcher, CommandResult, MetadataCommand, MetadataServices,
};
pub use options::{parse_options, ParseOutcome};
pub use outcome::CommandOutcome;
