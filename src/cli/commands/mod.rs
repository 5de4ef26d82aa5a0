//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes the host
//! subcommand to its implementation. Commands with sub-actions (like
//! `metadata`) route further through an
//! [`ActionRegistry`](crate::cli::actions::ActionRegistry).

pub mod dispatcher;
pub mod metadata;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use metadata::{MetadataCommand, MetadataServices};
