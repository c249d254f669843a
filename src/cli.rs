//! Command-line interface handling
//!
//! This module handles CLI argument parsing and merging of the parsed
//! arguments into the loaded configuration, keeping main.rs focused on
//! orchestration.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

use crate::config::Config;
use crate::constants::{defaults, error_messages, formats};
use crate::error::{ConfigError, Result};
use crate::output::OutputFormat;

pub const LIST_NICS: &str = "list-nics";

/// Build the command tree
pub fn build_command() -> Command {
    Command::new("hypervisor-nics")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Set of utilities for managing the hypervisor")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase output verbosity")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("YAML configuration file path")
                .global(true),
        )
        .subcommand(
            Command::new(LIST_NICS)
                .about("List nics that are candidates for use by the OVN/OVS subsystem")
                .long_about(
                    "List nics that are candidates for use by the OVN/OVS subsystem.\n\n\
                     The selected nic will be used by OVS to provide external connectivity to the VMs.",
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help(format!("Output format (default: {})", defaults::OUTPUT_FORMAT))
                        .value_parser([formats::VALUE, formats::JSON, formats::JSON_INDENT]),
                ),
        )
}

/// Parse command line arguments and return matches
pub fn parse_arguments() -> ArgMatches {
    build_command().get_matches()
}

/// Config file path given on the command line, if any
pub fn config_path(matches: &ArgMatches) -> Option<&str> {
    matches.get_one::<String>("config").map(String::as_str)
}

/// `-v` given before or after the subcommand
pub fn verbose_requested(matches: &ArgMatches) -> bool {
    matches.get_flag("verbose")
        || matches
            .subcommand()
            .is_some_and(|(_, sub_matches)| sub_matches.get_flag("verbose"))
}

/// Process CLI arguments and merge with config
pub fn process_cli_config(matches: &ArgMatches, mut config: Config) -> Result<Config> {
    if verbose_requested(matches) {
        config.logging.level = defaults::VERBOSE_LOG_LEVEL.to_string();
    }
    validate_log_level(&config.logging.level)?;

    if let Some((LIST_NICS, sub_matches)) = matches.subcommand() {
        if let Some(format) = sub_matches.get_one::<String>("format") {
            config.output.format = OutputFormat::from_str(format)?;
        }
    }

    Ok(config)
}

/// Filter directive for the log subscriber. `--verbose` beats `RUST_LOG`,
/// which beats the configured level.
pub fn log_filter_directive(verbose: bool, rust_log: Option<String>, level: &str) -> String {
    if verbose {
        return defaults::VERBOSE_LOG_LEVEL.to_string();
    }
    rust_log
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| level.to_string())
}

/// Check that a configured level names a tracing level
pub fn validate_log_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level).map_err(|_| {
        ConfigError::InvalidValue {
            field: "logging.level".to_string(),
            value: level.to_string(),
            reason: error_messages::INVALID_LOG_LEVEL.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::get_default_config;

    #[test]
    fn test_verbose_after_subcommand() {
        let matches = build_command()
            .try_get_matches_from(["hypervisor-nics", "list-nics", "-v"])
            .unwrap();
        let config = process_cli_config(&matches, get_default_config()).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_command_definition_is_consistent() {
        build_command().debug_assert();
    }
}
