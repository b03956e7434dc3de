//! Typed loading of configuration documents.
//!
//! Loading deserializes a document straight into a caller-supplied type,
//! normally one generated by this library. Null entries are dropped
//! before deserialization, so a key a document mentions but leaves empty
//! behaves exactly like an absent key: the target keeps its default.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::Value;

use crate::document::read_document;
use crate::error::{Error, Result};

/// Loads a configuration document into a value of type `T`.
///
/// # Errors
///
/// Returns a document error when the file cannot be read or parsed, and
/// [`Error::LoadMapping`] when the document does not fit `T`.
///
/// # Examples
///
/// ```no_run
/// use serde::Deserialize;
/// use std::path::Path;
///
/// #[derive(Debug, Default, Deserialize)]
/// #[serde(default)]
/// struct Config {
///     port: i64,
/// }
///
/// let config: Config = confgen::load(Path::new("config.yaml"))?;
/// # Ok::<(), confgen::Error>(())
/// ```
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let document = read_document(path)?;
    serde_yaml::from_value(strip_nulls(document)).map_err(|e| Error::LoadMapping {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Loads a configuration document into an existing value.
///
/// The target is replaced only when the whole load succeeds; on any
/// error it is left exactly as it was.
///
/// # Errors
///
/// Same conditions as [`load`].
pub fn load_into<T: DeserializeOwned>(path: &Path, target: &mut T) -> Result<()> {
    *target = load(path)?;
    Ok(())
}

/// Drops null mapping entries and null sequence items, recursively, and
/// looks through YAML tags.
fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Mapping(mapping) => Value::Mapping(
            mapping
                .into_iter()
                .map(|(key, value)| (key, strip_nulls(value)))
                .filter(|(_, value)| !value.is_null())
                .collect(),
        ),
        Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(strip_nulls)
                .filter(|item| !item.is_null())
                .collect(),
        ),
        Value::Tagged(tagged) => strip_nulls(tagged.value),
        other => other,
    }
}
