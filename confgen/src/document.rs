//! Document reading for schema inference and typed loading.
//!
//! Documents are parsed into [`serde_yaml::Value`] trees regardless of
//! their on-disk format, so the rest of the library works against a
//! single tree representation. YAML mappings preserve key order and the
//! parser rejects duplicate keys, which the inference engine relies on.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{Error, Result};

/// Reads and parses a configuration document.
///
/// The format is chosen by file extension: `yml` and `yaml` are parsed
/// as YAML, `json` as JSON. Extension matching is case-insensitive.
///
/// # Errors
///
/// Returns [`Error::DocumentRead`] if the file cannot be read,
/// [`Error::DocumentParse`] if its contents do not parse, and
/// [`Error::UnsupportedFormat`] for any other extension.
///
/// # Examples
///
/// ```no_run
/// use confgen::document::read_document;
/// use std::path::Path;
///
/// let doc = read_document(Path::new("config.yaml"))?;
/// assert!(doc.is_mapping());
/// # Ok::<(), confgen::Error>(())
/// ```
pub fn read_document(path: &Path) -> Result<Value> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let contents = fs::read_to_string(path).map_err(|source| Error::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;

    match extension.as_str() {
        "yml" | "yaml" => serde_yaml::from_str(&contents).map_err(|e| Error::DocumentParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
        "json" => serde_json::from_str(&contents).map_err(|e| Error::DocumentParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
        _ => Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        }),
    }
}

/// Renders a mapping key as the string it names a field by.
///
/// Keys are usually strings, but YAML permits any scalar. Numbers and
/// booleans are used in their canonical spelling. Null, sequence, and
/// mapping keys cannot name a field and are rejected.
///
/// # Errors
///
/// Returns [`Error::InvalidDocument`] for non-scalar or null keys.
pub(crate) fn key_string(key: &Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(Error::InvalidDocument {
            reason: format!("mapping key {key:?} is not a scalar"),
        }),
    }
}
