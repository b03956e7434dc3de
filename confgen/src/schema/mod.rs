//! Schema inference: from parsed documents to named record types.
//!
//! This module turns a configuration document into a [`Schema`], a set
//! of named records mirroring the document's nesting:
//!
//! - every mapping becomes a [`RecordType`], named by camel-casing its
//!   path segments (`general.server` becomes `GeneralServer`); the root
//!   record is named from the caller's top-level name
//! - scalars classify into the four [`ScalarKind`] categories
//! - sequences unify their items into one element type, widening to the
//!   string kind whenever items disagree
//!
//! # Determinism
//!
//! Records are registered by structural path and fields are ordered by
//! derived name, so two equivalent documents, even with reordered keys,
//! infer equal schemas. Names are derived purely from paths, with no
//! renumbering: distinct paths that happen to derive the same name both
//! survive, and key hygiene is left to the document author.
//!
//! # Examples
//!
//! ```
//! use confgen::schema::{ScalarKind, Schema, TypeNode};
//!
//! let doc = serde_yaml::from_str("\
//! redis:
//!   addrs:
//!     - 127.0.0.1:6379
//!   password: secret
//! ").unwrap();
//!
//! let schema = Schema::infer(&doc, "config")?;
//! let redis = schema.record_at(&["redis".to_string()]).unwrap();
//!
//! assert_eq!(redis.name, "Redis");
//! assert_eq!(redis.fields[0].name, "Addrs");
//! assert_eq!(
//!     redis.fields[0].ty,
//!     TypeNode::Sequence(Box::new(TypeNode::Scalar(ScalarKind::Str)))
//! );
//! # Ok::<(), confgen::Error>(())
//! ```

mod infer;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use types::{Field, RecordType, ScalarKind, Schema, TypeNode};
