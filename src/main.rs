//! tracectl CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracectl::cli::{Cli, CommandDispatcher, CommandOutcome};
use tracectl::ui::{OutputMode, TerminalUI};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `-v` flags (info, debug, trace)
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries only command output.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tracectl=warn")),
        1 => EnvFilter::new("tracectl=info"),
        2 => EnvFilter::new("tracectl=debug"),
        _ => EnvFilter::new("tracectl=trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::debug!("tracectl starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut ui = TerminalUI::new(output_mode, !cli.no_color);

    let dispatcher = CommandDispatcher::new(cli.home.clone());
    let outcome = CommandOutcome::from_result(dispatcher.dispatch(&cli, &mut ui));
    outcome.report(&mut ui);
    outcome.process_exit_code()
}
