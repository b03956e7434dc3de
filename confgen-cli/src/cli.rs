//! CLI structure and argument definitions.
//!
//! This module defines the command-line surface using clap's derive
//! macros. The tool is a single command with flags, no subcommands.

use clap::Parser;
use std::path::PathBuf;

/// Command-line tool for generating Rust config structs from
/// configuration documents.
#[derive(Parser)]
#[command(name = "confgen")]
#[command(
    version,
    about = "Generate Rust config structs from YAML or JSON documents",
    long_about = None
)]
pub struct Cli {
    /// Configuration document to read (YAML or JSON)
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Directory the generated module is written to
    #[arg(
        long,
        value_name = "DIR",
        default_value = "generated",
        env = "CONFGEN_OUTPUT"
    )]
    pub output: PathBuf,

    /// Top-level name: seeds the root type name and the output file stem
    #[arg(
        long,
        value_name = "NAME",
        default_value = "config",
        env = "CONFGEN_NAME"
    )]
    pub name: String,

    /// Keep running and regenerate whenever the document changes
    #[arg(long)]
    pub watch: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,
}
