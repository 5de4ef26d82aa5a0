//! Library integration tests.

use tracectl::TracectlError;

#[test]
fn error_types_are_public() {
    let err = TracectlError::UndefinedAction {
        name: "test".into(),
    };
    assert!(err.to_string().contains("test"));
    assert_eq!(err.exit_status(), tracectl::error::CMD_UNDEFINED);
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> tracectl::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use tracectl::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["tracectl", "metadata", "-s", "s1", "regenerate"]);

    if let Some(Commands::Metadata(args)) = cli.command {
        assert_eq!(args.argv("metadata"), ["metadata", "-s", "s1", "regenerate"]);
    } else {
        panic!("Expected Metadata command");
    }
}

#[test]
fn service_status_descriptions_are_public() {
    use tracectl::control::{describe_status, ErrorCode};

    assert_eq!(
        describe_status(ErrorCode::NoSessiond.as_status()),
        "No session daemon is available"
    );
    assert_eq!(describe_status(-9999), "Unknown error code");
}

#[test]
fn outcome_maps_service_codes_verbatim() {
    use tracectl::cli::CommandOutcome;

    let outcome = CommandOutcome::from_result(Err(TracectlError::Service { code: -23 }));
    assert_eq!(outcome.exit_code, -23);
    assert_eq!(outcome.diagnostic.as_deref(), Some("Session name not found"));
}
