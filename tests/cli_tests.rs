//! CLI module tests
//!
//! Tests for command-line interface parsing and configuration processing.

use clap::error::ErrorKind;
use hypervisor_nics::cli::*;
use hypervisor_nics::config::get_default_config;
use hypervisor_nics::output::OutputFormat;

fn parse(args: &[&str]) -> clap::ArgMatches {
    build_command()
        .try_get_matches_from(args)
        .expect("arguments should parse")
}

#[test]
fn test_list_nics_default_format() {
    let matches = parse(&["hypervisor-nics", "list-nics"]);
    let config = process_cli_config(&matches, get_default_config()).unwrap();

    assert_eq!(matches.subcommand_name(), Some(LIST_NICS));
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_format_flag_values() {
    let cases = [
        ("value", OutputFormat::Value),
        ("json", OutputFormat::Json),
        ("json-indent", OutputFormat::JsonIndent),
    ];

    for (flag, expected) in cases {
        let matches = parse(&["hypervisor-nics", "list-nics", "--format", flag]);
        let config = process_cli_config(&matches, get_default_config()).unwrap();
        assert_eq!(config.output.format, expected, "format flag {}", flag);
    }

    let matches = parse(&["hypervisor-nics", "list-nics", "-f", "value"]);
    let config = process_cli_config(&matches, get_default_config()).unwrap();
    assert_eq!(config.output.format, OutputFormat::Value);
}

#[test]
fn test_invalid_format_rejected() {
    let result = build_command().try_get_matches_from(["hypervisor-nics", "list-nics", "-f", "yaml"]);
    assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_subcommand_required() {
    let result = build_command().try_get_matches_from(["hypervisor-nics"]);
    assert!(result.is_err());

    let result = build_command().try_get_matches_from(["hypervisor-nics", "list-routes"]);
    assert!(result.is_err());
}

#[test]
fn test_flag_overrides_config_format() {
    let mut config = get_default_config();
    config.output.format = OutputFormat::Value;

    let matches = parse(&["hypervisor-nics", "list-nics"]);
    let merged = process_cli_config(&matches, config.clone()).unwrap();
    assert_eq!(merged.output.format, OutputFormat::Value);

    let matches = parse(&["hypervisor-nics", "list-nics", "-f", "json-indent"]);
    let merged = process_cli_config(&matches, config).unwrap();
    assert_eq!(merged.output.format, OutputFormat::JsonIndent);
}

#[test]
fn test_verbose_flag() {
    let matches = parse(&["hypervisor-nics", "-v", "list-nics"]);
    let config = process_cli_config(&matches, get_default_config()).unwrap();
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_path() {
    let matches = parse(&["hypervisor-nics", "--config", "/etc/nics.yaml", "list-nics"]);
    assert_eq!(config_path(&matches), Some("/etc/nics.yaml"));

    let matches = parse(&["hypervisor-nics", "list-nics"]);
    assert_eq!(config_path(&matches), None);
}

#[test]
fn test_invalid_log_level_in_config() {
    let mut config = get_default_config();
    config.logging.level = "loud".to_string();

    let matches = parse(&["hypervisor-nics", "list-nics"]);
    assert!(process_cli_config(&matches, config).is_err());
}

#[test]
fn test_validate_log_level() {
    for level in ["trace", "debug", "info", "warn", "error", "off"] {
        assert!(validate_log_level(level).is_ok(), "{} should be valid", level);
    }
    assert!(validate_log_level("verbose").is_err());
}

#[test]
fn test_verbose_beats_rust_log() {
    let directive = log_filter_directive(true, Some("warn".to_string()), "info");
    assert_eq!(directive, "debug");

    let matches = parse(&["hypervisor-nics", "list-nics", "--verbose"]);
    assert!(verbose_requested(&matches));
    let directive = log_filter_directive(verbose_requested(&matches), Some("error".to_string()), "info");
    assert_eq!(directive, "debug");
}

#[test]
fn test_rust_log_beats_configured_level() {
    assert_eq!(log_filter_directive(false, Some("warn".to_string()), "info"), "warn");
    assert_eq!(log_filter_directive(false, None, "info"), "info");
    assert_eq!(log_filter_directive(false, Some("  ".to_string()), "error"), "error");

    let matches = parse(&["hypervisor-nics", "list-nics"]);
    assert!(!verbose_requested(&matches));
}
