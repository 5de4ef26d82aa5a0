//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing host subcommands

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use clap::CommandFactory;

use crate::cli::args::{Cli, Commands};
use crate::config::ClientConfig;
use crate::control::{SessiondClient, TraceControl};
use crate::error::{Result, TracectlError};
use crate::session::{RcSessionResolver, SessionResolver};
use crate::ui::{Target, UserInterface};

use super::metadata::{MetadataCommand, MetadataServices};

/// Trait for command implementations.
///
/// Each host subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] on success, or the error that ended the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches host commands to their implementations.
pub struct CommandDispatcher {
    home: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher. `home` overrides the home directory.
    pub fn new(home: Option<PathBuf>) -> Self {
        Self { home }
    }

    /// Get the home directory override.
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the host subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if cli.list_commands {
            ui.write_text(&host_command_names(), Target::Stdout);
            return Ok(CommandResult::success());
        }

        match &cli.command {
            Some(Commands::Metadata(args)) => {
                let services = DaemonServices::new(self.home());
                let cmd = MetadataCommand::new(args.argv("metadata"), &services);
                cmd.execute(ui)
            }
            None => {
                let help = Cli::command().render_help().to_string();
                ui.write_text(&format!("{help}\n"), Target::Stderr);
                Err(TracectlError::Usage {
                    message: "No command given".to_string(),
                })
            }
        }
    }
}

/// Rc file resolver and daemon client, built from the client
/// configuration on first use.
struct DaemonServices<'h> {
    home: Option<&'h Path>,
    connected: OnceCell<(RcSessionResolver, SessiondClient)>,
}

impl<'h> DaemonServices<'h> {
    fn new(home: Option<&'h Path>) -> Self {
        Self {
            home,
            connected: OnceCell::new(),
        }
    }

    fn connected(&self) -> Result<&(RcSessionResolver, SessiondClient)> {
        if let Some(connected) = self.connected.get() {
            return Ok(connected);
        }
        let config = ClientConfig::resolve(self.home)?;
        Ok(self.connected.get_or_init(|| {
            (
                RcSessionResolver::new(config.rc_path()),
                SessiondClient::new(config.socket_path()),
            )
        }))
    }
}

impl MetadataServices for DaemonServices<'_> {
    fn resolver(&self) -> Result<&dyn SessionResolver> {
        Ok(&self.connected()?.0)
    }

    fn control(&self) -> Result<&dyn TraceControl> {
        Ok(&self.connected()?.1)
    }
}

/// Host command names, one per line.
fn host_command_names() -> String {
    Cli::command()
        .get_subcommands()
        .map(|cmd| format!("{}\n", cmd.get_name()))
        .collect()
}
