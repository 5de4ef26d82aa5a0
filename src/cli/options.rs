//! Option parsing for the `metadata` command.
//!
//! Parsing is delegated to clap, with one ordering rule layered on top:
//! options are taken in command-line order, so the first of `--help`,
//! `--list-options` or `--list-commands` decides the early exit, and an
//! early-exit flag seen before a bad token still wins over the parse error.
//!
//! Usage and listing texts are generated from the clap definition and the
//! action registry, so adding an option or an action updates them.

use clap::error::{ContextKind, ContextValue};
use clap::{Arg, CommandFactory, FromArgMatches};

use crate::cli::actions::ActionRegistry;
use crate::cli::args::MetadataOptions;
use crate::error::{Result, TracectlError};

/// Result of option parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// `-h` / `--help`: print usage and stop.
    Help,
    /// `--list-options`: print the option names and stop.
    ListOptions,
    /// `--list-commands`: print the action names and stop.
    ListCommands,
    /// Proceed to session resolution and dispatch.
    Run(MetadataOptions),
}

impl ParseOutcome {
    fn for_flag(id: &str) -> Option<Self> {
        match id {
            "help" => Some(Self::Help),
            "list_options" => Some(Self::ListOptions),
            "list_commands" => Some(Self::ListCommands),
            _ => None,
        }
    }
}

/// Parse the command's argument vector (command name at index 0).
///
/// Unrecognized options and options missing their value fail with
/// [`TracectlError::InvalidOption`]; an empty vector fails with
/// [`TracectlError::Usage`].
pub fn parse_options(argv: &[String]) -> Result<ParseOutcome> {
    if argv.is_empty() {
        return Err(TracectlError::Usage {
            message: "Missing command arguments".to_string(),
        });
    }

    let matches = match MetadataOptions::command().try_get_matches_from(argv) {
        Ok(matches) => matches,
        Err(err) => {
            let cutoff = offending_index(&err, argv).unwrap_or(argv.len());
            if let Some(outcome) = first_early_exit(&argv[1..cutoff]) {
                tracing::debug!("Early exit flag precedes parse error: {:?}", err.kind());
                return Ok(outcome);
            }
            return Err(TracectlError::InvalidOption {
                message: describe_parse_error(&err),
            });
        }
    };

    if let Some(outcome) = first_early_exit(&argv[1..]) {
        return Ok(outcome);
    }

    let options = MetadataOptions::from_arg_matches(&matches).map_err(|err| {
        TracectlError::InvalidOption {
            message: describe_parse_error(&err),
        }
    })?;
    Ok(ParseOutcome::Run(options))
}

/// Position in `argv` of the token clap rejected, if it can be located.
fn offending_index(err: &clap::Error, argv: &[String]) -> Option<usize> {
    let Some(ContextValue::String(bad)) = err.get(ContextKind::InvalidArg) else {
        return None;
    };
    argv.iter().enumerate().skip(1).find_map(|(i, token)| {
        let exact = token == bad;
        let with_value = token
            .strip_prefix(bad.as_str())
            .is_some_and(|rest| rest.starts_with('='));
        (exact || with_value).then_some(i)
    })
}

/// First early-exit flag among raw tokens, in command-line order.
///
/// Stops at `--`. The token after an option taking a value is that value,
/// never a flag.
fn first_early_exit(tokens: &[String]) -> Option<ParseOutcome> {
    let command = MetadataOptions::command();
    let mut tokens = tokens.iter().take_while(|token| token.as_str() != "--");
    while let Some(token) = tokens.next() {
        let Some(arg) = command.get_arguments().find(|arg| spells(arg, token)) else {
            continue;
        };
        if let Some(outcome) = ParseOutcome::for_flag(arg.get_id().as_str()) {
            return Some(outcome);
        }
        if arg.get_action().takes_values() {
            tokens.next();
        }
    }
    None
}

fn spells(arg: &Arg, token: &str) -> bool {
    if let Some(long) = token.strip_prefix("--") {
        return arg.get_long() == Some(long);
    }
    match token.strip_prefix('-').map(|rest| rest.chars().collect::<Vec<_>>()) {
        Some(chars) if chars.len() == 1 => arg.get_short() == Some(chars[0]),
        _ => false,
    }
}

fn describe_parse_error(err: &clap::Error) -> String {
    let reason = err.kind().as_str().unwrap_or("invalid arguments");
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => format!("{reason}: {arg}"),
        _ => reason.to_string(),
    }
}

/// Usage text of the `metadata` command.
pub fn usage(registry: &ActionRegistry) -> String {
    let mut text = String::from("usage: tracectl metadata [OPTION] ACTION\n\nActions:\n");
    for entry in registry.entries() {
        text.push_str(&format!("   {}\n      {}\n", entry.name, entry.summary));
    }

    text.push_str("\nOptions:\n");
    for arg in MetadataOptions::command()
        .get_arguments()
        .filter(|arg| !arg.is_positional())
    {
        let short = arg
            .get_short()
            .map(|c| format!("-{c}, "))
            .unwrap_or_else(|| "    ".to_string());
        let mut spelling = format!("{short}--{}", arg.get_long().unwrap_or_default());
        if let Some(names) = arg.get_value_names() {
            for name in names {
                spelling.push_str(&format!(" {name}"));
            }
        }
        let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
        text.push_str(&format!("  {spelling:<25}{help}.\n"));
    }
    text.push('\n');
    text
}

/// Machine-readable option listing: every long then short spelling, one per line.
pub fn list_options() -> String {
    let mut text = String::new();
    for arg in MetadataOptions::command()
        .get_arguments()
        .filter(|arg| !arg.is_positional())
    {
        if let Some(long) = arg.get_long() {
            text.push_str(&format!("--{long}\n"));
        }
        if let Some(short) = arg.get_short() {
            text.push_str(&format!("-{short}\n"));
        }
    }
    text
}

/// Action names, one per line, in registry order.
pub fn list_commands(registry: &ActionRegistry) -> String {
    registry.names().map(|name| format!("{name}\n")).collect()
}
