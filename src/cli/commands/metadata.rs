//! Metadata command implementation.
//!
//! `tracectl metadata [OPTION] ACTION` acts on the metadata of one session.
//! The session is `--session NAME` or, failing that, the ambient session
//! from the rc file.

use crate::cli::actions::{ActionContext, ActionDispatcher, ActionEntry, ActionRegistry};
use crate::cli::options::{self, ParseOutcome};
use crate::control::TraceControl;
use crate::error::{Result, TracectlError};
use crate::session::{SessionContext, SessionResolver};
use crate::ui::{Target, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Actions of the `metadata` command.
pub static METADATA_ACTIONS: ActionRegistry = ActionRegistry::new(&[ActionEntry {
    name: "regenerate",
    summary: "Regenerate and overwrite the metadata of the session.",
    handler: regenerate,
}]);

fn regenerate(ctx: &mut ActionContext<'_>, args: &[String]) -> Result<CommandResult> {
    if args.len() > 1 {
        ctx.ui
            .warning(&format!("Ignoring extra arguments: {}", args[1..].join(" ")));
    }

    let status = ctx.control.regenerate_metadata(ctx.session_name);
    if status != 0 {
        return Err(TracectlError::Service { code: status });
    }

    ctx.ui.message(&format!(
        "Metadata successfully regenerated for session {}",
        ctx.session_name
    ));
    Ok(CommandResult::success())
}

/// Session lookup and daemon access for the metadata command.
///
/// Only requested once an action is about to run; help and listings work
/// without any configuration.
pub trait MetadataServices {
    /// Source of the ambient session.
    fn resolver(&self) -> Result<&dyn SessionResolver>;

    /// Session daemon access.
    fn control(&self) -> Result<&dyn TraceControl>;
}

/// The metadata command implementation.
pub struct MetadataCommand<'a> {
    argv: Vec<String>,
    services: &'a dyn MetadataServices,
}

impl<'a> MetadataCommand<'a> {
    /// Create a new metadata command.
    ///
    /// `argv` holds the command name at index 0, then the raw arguments.
    pub fn new(argv: Vec<String>, services: &'a dyn MetadataServices) -> Self {
        Self { argv, services }
    }

    /// Get the command arguments.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}

impl Command for MetadataCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let usage = options::usage(&METADATA_ACTIONS);

        let options = match options::parse_options(&self.argv) {
            Ok(ParseOutcome::Run(options)) => options,
            Ok(ParseOutcome::Help) => {
                ui.write_text(&usage, Target::Stdout);
                return Ok(CommandResult::success());
            }
            Ok(ParseOutcome::ListOptions) => {
                ui.write_text(&options::list_options(), Target::Stdout);
                return Ok(CommandResult::success());
            }
            Ok(ParseOutcome::ListCommands) => {
                ui.write_text(&options::list_commands(&METADATA_ACTIONS), Target::Stdout);
                return Ok(CommandResult::success());
            }
            Err(err) => {
                ui.write_text(&usage, Target::Stderr);
                return Err(err);
            }
        };

        let control = self.services.control()?;
        let resolver = self.services.resolver()?;
        let session = SessionContext::resolve(options.session.as_deref(), resolver)?;
        tracing::debug!(
            session = session.name(),
            ambient = session.is_owned(),
            "Resolved session"
        );

        let dispatcher = ActionDispatcher::new(&METADATA_ACTIONS, usage);
        let mut ctx = ActionContext {
            session_name: session.name(),
            control,
            ui,
        };
        dispatcher.dispatch(&options.residual, &mut ctx)
    }
}
