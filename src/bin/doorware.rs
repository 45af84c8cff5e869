//! Doorware CLI Binary
//!
//! Command-line interface for the door-hardware catalog importer.

use clap::Parser;
use doorware::logging;
use doorware::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Resolve configuration before logging so the logging section applies
    let context = match CliContext::new(cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let logging_config = context.logging_config(&cli);
    if let Err(e) = logging::init_logging(Some(&logging_config)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    // Execute command
    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
