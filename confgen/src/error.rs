//! Error types for the confgen library.
//!
//! This module provides a comprehensive error hierarchy for all operations
//! in the confgen library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a confgen error.
///
/// # Examples
///
/// ```
/// use confgen::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("GeneralServer".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the confgen library.
///
/// This enum encompasses all possible error conditions that can occur
/// while reading documents, inferring schemas, generating code, and
/// keeping loaded values in sync with files on disk.
#[derive(Debug, Error)]
pub enum Error {
    /// The source document could not be read from disk.
    #[error("cannot read document {}: {source}", path.display())]
    DocumentRead {
        /// The document path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The source document could not be parsed.
    #[error("cannot parse document {}: {reason}", path.display())]
    DocumentParse {
        /// The document path that could not be parsed.
        path: PathBuf,
        /// The parser's description of the failure.
        reason: String,
    },

    /// The document has an extension no parser is registered for.
    #[error("unsupported document format '{extension}' for {}", path.display())]
    UnsupportedFormat {
        /// The document path.
        path: PathBuf,
        /// The unrecognized extension (empty when the path has none).
        extension: String,
    },

    /// The document parsed but its shape cannot produce a schema.
    #[error("invalid document: {reason}")]
    InvalidDocument {
        /// The reason the document shape is unusable.
        reason: String,
    },

    /// The generated code could not be written to the output location.
    #[error("cannot write generated code to {}: {source}", path.display())]
    OutputWrite {
        /// The output path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A document could not be deserialized into the requested target type.
    #[error("cannot load {} into target type: {reason}", path.display())]
    LoadMapping {
        /// The document path being loaded.
        path: PathBuf,
        /// The deserializer's description of the mismatch.
        reason: String,
    },

    /// The filesystem watcher could not be created or registered.
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),
}

impl Error {
    /// Check if error came from reading or parsing the source document.
    ///
    /// # Examples
    ///
    /// ```
    /// use confgen::Error;
    ///
    /// let err = Error::InvalidDocument {
    ///     reason: "root is not a mapping".to_string(),
    /// };
    /// assert!(err.is_document_error());
    /// ```
    #[must_use]
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            Self::DocumentRead { .. }
                | Self::DocumentParse { .. }
                | Self::UnsupportedFormat { .. }
                | Self::InvalidDocument { .. }
        )
    }

    /// Check if error indicates a document that did not fit the target type.
    ///
    /// # Examples
    ///
    /// ```
    /// use confgen::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::LoadMapping {
    ///     path: PathBuf::from("config.yaml"),
    ///     reason: "expected a sequence".to_string(),
    /// };
    /// assert!(err.is_mapping_error());
    /// ```
    #[must_use]
    pub fn is_mapping_error(&self) -> bool {
        matches!(self, Self::LoadMapping { .. })
    }
}
