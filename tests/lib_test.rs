//! Library integration tests.

use harvester::HarvesterError;

#[test]
fn error_types_are_public() {
    let err = HarvesterError::InvalidTask {
        task: "weather".into(),
        message: "URL is empty".into(),
    };
    assert!(err.to_string().contains("weather"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> harvester::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use harvester::cli::{Cli, Commands};

    let cli = Cli::parse_from(["harvester", "due", "--json", "--at", "06:00"]);

    if let Some(Commands::Due(args)) = cli.command {
        assert!(args.json);
        assert_eq!(args.at.map(|c| c.to_string()), Some("06:00".to_string()));
    } else {
        panic!("Expected Due command");
    }
}

#[test]
fn free_is_due_function() {
    assert!(harvester::schedule::is_due("0h", 13, 37));
    assert!(!harvester::schedule::is_due("-0h", 0, 0));
}
