//! Main entry point for the confgen CLI.
//!
//! Reads a YAML or JSON configuration document, infers its schema, and
//! writes a Rust module with matching serde struct declarations. With
//! `--watch` the process keeps running and regenerates the module on
//! every change to the document.

mod cli;
mod error;

use std::thread;
use std::time::Duration;

use clap::Parser;
use confgen::{generate, watch_changes, Logger};

use cli::Cli;
use error::CliError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = confgen::init_logger(cli.verbose, cli.quiet);

    // Execute and set the exit code
    match run(&cli, &logger) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli, logger: &Logger) -> Result<(), CliError> {
    validate_name(&cli.name)?;

    logger.debug(&format!(
        "Generating from {} into {}",
        cli.file.display(),
        cli.output.display()
    ));
    let written = generate(&cli.file, &cli.output, &cli.name)?;

    // The written path is the command's output (shell-friendly)
    println!("{}", written.display());

    if cli.watch {
        regenerate_on_change(cli, logger)?;
    }

    Ok(())
}

/// Regenerates the module on every change to the document, until the
/// process is interrupted.
fn regenerate_on_change(cli: &Cli, logger: &Logger) -> Result<(), CliError> {
    let file = cli.file.clone();
    let output = cli.output.clone();
    let name = cli.name.clone();
    let quiet = cli.quiet;
    let watch_logger = Logger::new(logger.level());

    let _watcher = watch_changes(&cli.file, move || match generate(&file, &output, &name) {
        Ok(written) => {
            if !quiet {
                eprintln!("Regenerated {}", written.display());
            }
        }
        // A broken intermediate state of the document is reported but
        // does not terminate the watch.
        Err(e) => watch_logger.error(&format!("Regeneration failed: {e}")),
    })?;

    if !cli.quiet {
        eprintln!("Watching {} for changes (Ctrl-C to stop)", cli.file.display());
    }
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}

/// The name seeds a Rust type name and the output file stem, so it has
/// to start with a letter and stay within identifier-friendly
/// characters.
fn validate_name(name: &str) -> Result<(), CliError> {
    let mut chars = name.chars();
    let starts_alphabetic = chars.next().is_some_and(char::is_alphabetic);
    let rest_valid = chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if starts_alphabetic && rest_valid {
        Ok(())
    } else {
        Err(CliError::InvalidArguments(format!(
            "name must start with a letter and contain only letters, digits, '_', '-' or '.', got {name:?}"
        )))
    }
}
