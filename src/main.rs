//! # hypervisor-nics - Main Application Entry Point

use std::process;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hypervisor_nics::cli::{
    config_path, log_filter_directive, parse_arguments, process_cli_config, verbose_requested,
    LIST_NICS,
};
use hypervisor_nics::commands::list_nics;
use hypervisor_nics::config::{load_config, Config, ConfigSource};
use hypervisor_nics::error::Result;
use hypervisor_nics::snapshot::IpCommandProvider;

// Logs go to stderr so stdout only carries the report
fn setup_logging(verbose: bool, level: &str) {
    let directive = log_filter_directive(verbose, std::env::var("RUST_LOG").ok(), level);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(directive))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn initialize_configuration(matches: &clap::ArgMatches) -> Result<(Config, ConfigSource)> {
    let (base_config, source) = load_config(config_path(matches))?;
    Ok((process_cli_config(matches, base_config)?, source))
}

fn run_application() -> Result<()> {
    let matches = parse_arguments();

    let (config, source) = initialize_configuration(&matches)?;
    setup_logging(verbose_requested(&matches), &config.logging.level);
    info!("{}", source);
    debug!("Using configuration: {:?}", config);
    debug!("Effective output format: {}", config.output.format);

    if matches.subcommand_name() == Some(LIST_NICS) {
        let provider = IpCommandProvider::from_config(&config.snapshot);
        let rendered = list_nics(&provider, config.output.format)?;
        println!("{}", rendered);
    }

    Ok(())
}

fn main() {
    if let Err(e) = run_application() {
        error!("Application error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
