//! Data model for inferred schemas.

use std::collections::BTreeMap;

/// Primitive scalar categories distinguished by inference.
///
/// There is no optional or nullable kind. Null values classify as
/// [`ScalarKind::Str`] and rely on generated defaults at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Text, plus anything inference could not classify more precisely.
    Str,
    /// Signed 64-bit integers, including whole-valued floats.
    Int,
    /// Floating point numbers with a fractional part.
    Float,
    /// Booleans.
    Bool,
}

impl ScalarKind {
    /// The Rust type this kind renders as in generated code.
    ///
    /// # Examples
    ///
    /// ```
    /// use confgen::schema::ScalarKind;
    ///
    /// assert_eq!(ScalarKind::Int.rust_type(), "i64");
    /// assert_eq!(ScalarKind::Str.rust_type(), "String");
    /// ```
    #[must_use]
    pub const fn rust_type(self) -> &'static str {
        match self {
            Self::Str => "String",
            Self::Int => "i64",
            Self::Float => "f64",
            Self::Bool => "bool",
        }
    }
}

/// The inferred type of a field.
///
/// Records are referenced by name only; their bodies live in the
/// enclosing [`Schema`] and are never embedded inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    /// A primitive scalar.
    Scalar(ScalarKind),
    /// A homogeneous sequence with the given element type.
    Sequence(Box<TypeNode>),
    /// A reference to a named record in the same schema.
    Record(String),
}

impl TypeNode {
    /// The Rust type expression this node renders as in generated code.
    ///
    /// # Examples
    ///
    /// ```
    /// use confgen::schema::{ScalarKind, TypeNode};
    ///
    /// let ty = TypeNode::Sequence(Box::new(TypeNode::Scalar(ScalarKind::Str)));
    /// assert_eq!(ty.rust_type(), "Vec<String>");
    /// ```
    #[must_use]
    pub fn rust_type(&self) -> String {
        match self {
            Self::Scalar(kind) => kind.rust_type().to_string(),
            Self::Sequence(element) => format!("Vec<{}>", element.rust_type()),
            Self::Record(name) => name.clone(),
        }
    }
}

/// A single field of an inferred record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The key exactly as it appears in the document.
    pub source_key: String,
    /// The derived identifier used in generated code.
    pub name: String,
    /// The inferred field type.
    pub ty: TypeNode,
}

/// A named record type inferred from a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordType {
    /// The generated type name.
    pub name: String,
    /// The structural path from the root; empty for the root record.
    pub path: Vec<String>,
    /// Fields sorted by derived name, source key as tie-break.
    pub fields: Vec<Field>,
}

/// A complete inferred schema: the root record plus every nested record,
/// keyed by structural path.
///
/// A schema is built fresh per inference run and holds everything the
/// emitter needs. Equal documents produce equal schemas regardless of
/// mapping key order.
///
/// # Examples
///
/// ```
/// use confgen::schema::Schema;
///
/// let doc = serde_yaml::from_str("server:\n  port: 8080\n").unwrap();
/// let schema = Schema::infer(&doc, "config")?;
///
/// assert_eq!(schema.root().name, "Config");
/// assert_eq!(schema.record_count(), 2);
/// # Ok::<(), confgen::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    root: RecordType,
    nested: BTreeMap<Vec<String>, RecordType>,
}

impl Schema {
    pub(crate) fn new(root: RecordType, nested: BTreeMap<Vec<String>, RecordType>) -> Self {
        Self { root, nested }
    }

    /// The root record, named after the top-level name.
    #[must_use]
    pub const fn root(&self) -> &RecordType {
        &self.root
    }

    /// All records in emission order: the root first, then nested records
    /// sorted by name (path as tie-break, since distinct paths may derive
    /// the same name).
    #[must_use]
    pub fn records(&self) -> Vec<&RecordType> {
        let mut nested: Vec<&RecordType> = self.nested.values().collect();
        nested.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));

        let mut records = Vec::with_capacity(nested.len() + 1);
        records.push(&self.root);
        records.extend(nested);
        records
    }

    /// Looks up a nested record by its structural path.
    #[must_use]
    pub fn record_at(&self, path: &[String]) -> Option<&RecordType> {
        if path.is_empty() {
            Some(&self.root)
        } else {
            self.nested.get(path)
        }
    }

    /// Total number of records, the root included.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.nested.len() + 1
    }
}
