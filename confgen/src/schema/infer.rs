//! Schema inference over parsed document trees.
//!
//! Inference walks the document once, depth first. Every mapping
//! encountered on the way becomes a named record registered under its
//! structural path, and every value contributes a [`TypeNode`]. Sequences
//! unify their item types into a single element type, widening to the
//! string kind whenever items disagree. The walk carries no state beyond
//! the registry it is building, so equal documents always produce equal
//! schemas.

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::document::key_string;
use crate::error::{Error, Result};
use crate::ident::{camel_case, root_type_name};
use crate::schema::types::{Field, RecordType, ScalarKind, Schema, TypeNode};

impl Schema {
    /// Infers a schema from a parsed document.
    ///
    /// `top_level` names the root record (via
    /// [`root_type_name`](crate::ident::root_type_name)); nested records
    /// are named by their path segments, the root excluded, so a mapping
    /// under `general.server` becomes `GeneralServer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDocument`] if the document root is not a
    /// mapping or a mapping key is not a scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use confgen::schema::Schema;
    ///
    /// let doc = serde_yaml::from_str("general:\n  server:\n    port: \":9311\"\n").unwrap();
    /// let schema = Schema::infer(&doc, "config")?;
    ///
    /// let names: Vec<&str> = schema.records().iter().map(|r| r.name.as_str()).collect();
    /// assert_eq!(names, ["Config", "General", "GeneralServer"]);
    /// # Ok::<(), confgen::Error>(())
    /// ```
    pub fn infer(document: &Value, top_level: &str) -> Result<Self> {
        let mapping = match untag(document) {
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(Error::InvalidDocument {
                    reason: format!("document root is {}, not a mapping", shape_name(other)),
                })
            }
        };

        let mut inferencer = Inferencer {
            top_level,
            nested: BTreeMap::new(),
        };
        let root = inferencer.merge_mappings(&[mapping], &[])?;
        Ok(Self::new(root, inferencer.nested))
    }
}

/// Per-invocation inference state: the registry of nested records built
/// so far. Discarded once the schema is assembled.
struct Inferencer<'a> {
    top_level: &'a str,
    nested: BTreeMap<Vec<String>, RecordType>,
}

impl Inferencer<'_> {
    /// Unifies every value observed at one structural path into a single
    /// type. An empty set of observations unifies to the string kind,
    /// which is also what any disagreement widens to.
    fn unify(&mut self, values: &[&Value], path: &[String]) -> Result<TypeNode> {
        let mut mappings = Vec::new();
        let mut sequences = Vec::new();
        let mut scalars = Vec::new();
        for value in values {
            match untag(value) {
                Value::Mapping(m) => mappings.push(m),
                Value::Sequence(s) => sequences.push(s),
                scalar => scalars.push(scalar),
            }
        }

        if !mappings.is_empty() && sequences.is_empty() && scalars.is_empty() {
            let record = self.merge_mappings(&mappings, path)?;
            let name = record.name.clone();
            self.nested.insert(path.to_vec(), record);
            return Ok(TypeNode::Record(name));
        }

        if !sequences.is_empty() && mappings.is_empty() && scalars.is_empty() {
            let items: Vec<&Value> = sequences.iter().flat_map(|s| s.iter()).collect();
            let element = self.unify(&items, path)?;
            return Ok(TypeNode::Sequence(Box::new(element)));
        }

        if mappings.is_empty() && sequences.is_empty() {
            return Ok(TypeNode::Scalar(unify_scalars(&scalars)));
        }

        // Mixed shapes at one path carry no single structure.
        Ok(TypeNode::Scalar(ScalarKind::Str))
    }

    /// Merges one or more mappings observed at the same path into a
    /// record: the field set is the union of their keys, and each field's
    /// type is the unification of that key's values across all of them.
    fn merge_mappings(&mut self, mappings: &[&Mapping], path: &[String]) -> Result<RecordType> {
        let mut by_key: BTreeMap<String, Vec<&Value>> = BTreeMap::new();
        for mapping in mappings {
            for (key, value) in mapping.iter() {
                by_key.entry(key_string(key)?).or_default().push(value);
            }
        }

        let mut fields = Vec::with_capacity(by_key.len());
        for (source_key, values) in &by_key {
            let mut field_path = path.to_vec();
            field_path.push(source_key.clone());
            let ty = self.unify(values, &field_path)?;
            fields.push(Field {
                source_key: source_key.clone(),
                name: camel_case(source_key),
                ty,
            });
        }
        fields.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.source_key.cmp(&b.source_key)));

        Ok(RecordType {
            name: self.record_name(path),
            path: path.to_vec(),
            fields,
        })
    }

    fn record_name(&self, path: &[String]) -> String {
        if path.is_empty() {
            root_type_name(self.top_level)
        } else {
            path.iter().map(|segment| camel_case(segment)).collect()
        }
    }
}

/// Unifies scalar observations: one shared kind survives, anything else
/// widens to the string kind. Empty input also yields the string kind,
/// which gives empty sequences their `Vec<String>` element type.
fn unify_scalars(scalars: &[&Value]) -> ScalarKind {
    let mut kinds = scalars.iter().map(|v| classify_scalar(v));
    match kinds.next() {
        Some(first) if kinds.all(|k| k == first) => first,
        Some(_) => ScalarKind::Str,
        None => ScalarKind::Str,
    }
}

fn classify_scalar(value: &Value) -> ScalarKind {
    match value {
        Value::Bool(_) => ScalarKind::Bool,
        Value::Number(n) => classify_number(n),
        _ => ScalarKind::Str,
    }
}

/// Whole-valued floats classify as integers, so `2.0` and `2` infer the
/// same type. Everything outside i64, and anything non-finite, stays a
/// float.
#[allow(clippy::cast_precision_loss)]
fn classify_number(number: &serde_yaml::Number) -> ScalarKind {
    if number.is_i64() || number.is_u64() {
        return ScalarKind::Int;
    }
    let float = number.as_f64().unwrap_or(f64::NAN);
    if float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float < i64::MAX as f64
    {
        ScalarKind::Int
    } else {
        ScalarKind::Float
    }
}

/// Looks through YAML tags to the tagged value itself.
fn untag(value: &Value) -> &Value {
    let mut current = value;
    while let Value::Tagged(tagged) = current {
        current = &tagged.value;
    }
    current
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
