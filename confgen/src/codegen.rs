//! Rendering inferred schemas as Rust source.
//!
//! The emitter is a pure function of the schema: records render root
//! first, then sorted by name, with fields in the order inference fixed
//! for them. Equal schemas therefore render byte for byte identically,
//! no matter how the source document ordered its keys.
//!
//! Generated structs derive serde traits plus `Default` and carry a
//! struct-level `#[serde(default)]`, so keys missing from a document at
//! load time fall back to zero values instead of failing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::schema::{RecordType, Schema};

/// Renders a schema as one Rust module.
///
/// `source_name` appears in the generated header and should be the bare
/// file name of the document, keeping output independent of where the
/// tree was checked out.
///
/// # Examples
///
/// ```
/// use confgen::codegen::render;
/// use confgen::schema::Schema;
///
/// let doc = serde_yaml::from_str("port: 8080\n").unwrap();
/// let schema = Schema::infer(&doc, "config")?;
/// let code = render(&schema, "config.yaml");
///
/// assert!(code.contains("pub struct Config {"));
/// assert!(code.contains("pub Port: i64,"));
/// # Ok::<(), confgen::Error>(())
/// ```
#[must_use]
pub fn render(schema: &Schema, source_name: &str) -> String {
    let mut lines = vec![
        format!("//! Generated by confgen from `{source_name}`. DO NOT EDIT."),
        String::new(),
        "#![allow(non_snake_case)]".to_string(),
        String::new(),
        "use serde::{Deserialize, Serialize};".to_string(),
    ];

    for record in schema.records() {
        lines.push(String::new());
        render_record(&mut lines, record);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_record(lines: &mut Vec<String>, record: &RecordType) {
    if record.path.is_empty() {
        lines.push("/// Root record of the configuration document.".to_string());
    } else {
        lines.push(format!("/// Record at `{}`.", record.path.join(".")));
    }
    lines.push("#[derive(Debug, Clone, Default, Serialize, Deserialize)]".to_string());
    lines.push("#[serde(default)]".to_string());

    if record.fields.is_empty() {
        lines.push(format!("pub struct {} {{}}", record.name));
        return;
    }

    lines.push(format!("pub struct {} {{", record.name));
    for (i, field) in record.fields.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("    /// Key `{}`.", field.source_key));
        lines.push(format!("    #[serde(rename = {:?})]", field.source_key));
        lines.push(format!("    pub {}: {},", field.name, field.ty.rust_type()));
    }
    lines.push("}".to_string());
}

/// Writes rendered code to `<output_dir>/<file_stem>.rs`, creating the
/// directory if needed, and returns the written path.
///
/// # Errors
///
/// Returns [`Error::OutputWrite`] when the directory cannot be created
/// or the file cannot be written.
pub fn write_module(output_dir: &Path, file_stem: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| Error::OutputWrite {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(format!("{file_stem}.rs"));
    fs::write(&path, contents).map_err(|source| Error::OutputWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
