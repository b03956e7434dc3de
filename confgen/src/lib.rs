#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # confgen
//!
//! A library for inferring typed schemas from configuration documents
//! and generating matching Rust structs.
//!
//! Point [`generate`] at a YAML or JSON document and it infers a record
//! type for every mapping in the tree, then writes serde-ready struct
//! declarations mirroring the document's shape. The same documents can
//! be loaded directly into those types with [`load`], and kept in sync
//! with the file on disk with [`watch`].
//!
//! ## Core Types
//!
//! - [`Schema`], [`RecordType`], [`TypeNode`]: the inferred data model
//! - [`ConfigWatcher`]: handle to a live reload watch
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use confgen::codegen::render;
//! use confgen::schema::Schema;
//!
//! let doc = serde_yaml::from_str("\
//! general:
//!   ws_listen_port: 9311
//! ").unwrap();
//!
//! let schema = Schema::infer(&doc, "config").unwrap();
//! let code = render(&schema, "config.yaml");
//!
//! assert!(code.contains("pub struct General {"));
//! assert!(code.contains("pub WsListenPort: i64,"));
//! ```

pub mod codegen;
pub mod document;
pub mod error;
pub mod generator;
pub mod ident;
pub mod loader;
pub mod logging;
pub mod schema;
pub mod watcher;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use generator::generate;
pub use loader::{load, load_into};
pub use logging::{init_logger, LogLevel, Logger};
pub use schema::{Field, RecordType, ScalarKind, Schema, TypeNode};
pub use watcher::{watch, watch_changes, ConfigWatcher};
