//! End-to-end code generation from a document on disk.

use std::path::{Path, PathBuf};

use crate::codegen::{render, write_module};
use crate::document::read_document;
use crate::error::Result;
use crate::schema::Schema;

/// Generates Rust config structs from a configuration document.
///
/// Reads the document at `document_path`, infers its schema with
/// `top_level` naming the root record, renders the declarations, and
/// writes them to `<output_dir>/<top_level>.rs`. Returns the written
/// path.
///
/// Aside from the final write this is a pure function of the document
/// and the name, so concurrent calls writing to distinct outputs do not
/// interfere with each other.
///
/// # Errors
///
/// Returns an error when the document cannot be read or parsed, when
/// its root is not a mapping, or when the output cannot be written.
///
/// # Examples
///
/// ```no_run
/// use confgen::generate;
/// use std::path::Path;
///
/// let written = generate(Path::new("config.yaml"), Path::new("generated"), "config")?;
/// assert!(written.ends_with("config.rs"));
/// # Ok::<(), confgen::Error>(())
/// ```
pub fn generate(document_path: &Path, output_dir: &Path, top_level: &str) -> Result<PathBuf> {
    let document = read_document(document_path)?;
    let schema = Schema::infer(&document, top_level)?;

    // The header names the file, not the full path, so output does not
    // depend on where the document happens to live.
    let source_name = document_path.file_name().map_or_else(
        || document_path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    let code = render(&schema, &source_name);

    let written = write_module(output_dir, top_level, &code)?;
    log::info!(
        "Generated {} record type(s) from {} at {}",
        schema.record_count(),
        document_path.display(),
        written.display()
    );
    Ok(written)
}
