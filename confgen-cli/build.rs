//! Build script for confgen-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying flags, update both files.
fn build_cli() -> Command {
    Command::new("confgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate Rust config structs from YAML or JSON documents")
        .long_about(
            "Reads a configuration document, infers a typed schema from its shape, \
             and writes a Rust module with matching serde struct declarations",
        )
        .arg(
            Arg::new("file")
                .long("file")
                .help("Configuration document to read (YAML or JSON)")
                .value_name("PATH")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Directory the generated module is written to")
                .value_name("DIR")
                .default_value("generated")
                .env("CONFGEN_OUTPUT"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .help("Top-level name: seeds the root type name and the output file stem")
                .value_name("NAME")
                .default_value("config")
                .env("CONFGEN_NAME"),
        )
        .arg(
            Arg::new("watch")
                .long("watch")
                .help("Keep running and regenerate whenever the document changes")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(clap::ArgAction::SetTrue),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate the confgen.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("confgen.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
