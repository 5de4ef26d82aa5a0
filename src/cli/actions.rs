//! Action registry and dispatch.
//!
//! A command with sub-actions declares them once in a static
//! [`ActionRegistry`]. Adding an action means adding one [`ActionEntry`]
//! and its handler function; [`ActionDispatcher`] needs no change.

use crate::cli::commands::CommandResult;
use crate::control::TraceControl;
use crate::error::{Result, TracectlError};
use crate::ui::{Target, UserInterface};

/// Everything a handler may use while running.
pub struct ActionContext<'a> {
    /// Session the action applies to.
    pub session_name: &'a str,
    /// Session daemon access.
    pub control: &'a dyn TraceControl,
    /// Output.
    pub ui: &'a mut dyn UserInterface,
}

/// Handler signature. `args` is the residual argument vector, action name
/// at index 0.
pub type ActionHandler = fn(&mut ActionContext<'_>, &[String]) -> Result<CommandResult>;

/// One named action.
#[derive(Debug, Clone, Copy)]
pub struct ActionEntry {
    /// Name matched against the first residual argument.
    pub name: &'static str,
    /// One-line description shown in usage.
    pub summary: &'static str,
    /// Function run when the action is selected.
    pub handler: ActionHandler,
}

/// Fixed, ordered set of actions.
#[derive(Debug)]
pub struct ActionRegistry {
    entries: &'static [ActionEntry],
}

impl ActionRegistry {
    /// Create a registry over a static table.
    pub const fn new(entries: &'static [ActionEntry]) -> Self {
        Self { entries }
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &'static [ActionEntry] {
        self.entries
    }

    /// Action names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Case-sensitive exact lookup.
    pub fn find(&self, name: &str) -> Option<&'static ActionEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

/// Routes a residual argument vector to its action.
pub struct ActionDispatcher<'r> {
    registry: &'r ActionRegistry,
    usage: String,
}

impl<'r> ActionDispatcher<'r> {
    /// Create a dispatcher. `usage` is printed when no action is given.
    pub fn new(registry: &'r ActionRegistry, usage: String) -> Self {
        Self { registry, usage }
    }

    /// Run the action named by `argv[0]`.
    ///
    /// - empty `argv`: usage on stderr, [`TracectlError::Usage`]
    /// - unknown name: [`TracectlError::UndefinedAction`]
    /// - otherwise: whatever the handler returns
    pub fn dispatch(&self, argv: &[String], ctx: &mut ActionContext<'_>) -> Result<CommandResult> {
        let Some(name) = argv.first() else {
            ctx.ui.write_text(&self.usage, Target::Stderr);
            return Err(TracectlError::Usage {
                message: "Missing action".to_string(),
            });
        };

        match self.registry.find(name) {
            Some(entry) => {
                tracing::debug!(
                    action = entry.name,
                    argc = argv.len(),
                    session = ctx.session_name,
                    "Dispatching action"
                );
                (entry.handler)(ctx, argv)
            }
            None => Err(TracectlError::UndefinedAction { name: name.clone() }),
        }
    }
}
