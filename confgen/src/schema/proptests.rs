//! Property-based tests for schema inference and rendering.
//!
//! These pin down the determinism guarantees: equal documents infer
//! equal schemas and render identical bytes, whatever order mapping
//! keys arrive in.

use proptest::prelude::*;
use serde_yaml::{Mapping, Value};

use crate::codegen::render;
use crate::ident::{camel_case, root_type_name};
use crate::schema::Schema;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e9..1.0e9f64).prop_map(Value::from),
        "[a-z0-9 :/.]{0,12}".prop_map(Value::String),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::btree_map(key_strategy(), inner, 0..4).prop_map(to_mapping),
        ]
    })
}

fn document_strategy() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(key_strategy(), value_strategy(), 1..5).prop_map(to_mapping)
}

/// Trees of mappings and scalars only. Sequences are excluded because a
/// mixed-shape sequence deliberately widens to a string and drops its
/// mapping items, which would break key-coverage assertions.
fn mapping_tree_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map(key_strategy(), inner, 0..4)
            .prop_map(to_mapping)
            .boxed()
    })
}

fn mapping_document_strategy() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(key_strategy(), mapping_tree_strategy(), 1..5).prop_map(to_mapping)
}

fn flat_document_entries() -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::btree_map(key_strategy(), scalar_strategy(), 1..8)
        .prop_map(|m| m.into_iter().filter(|(k, _)| k != "section").collect())
}

fn to_mapping(entries: std::collections::BTreeMap<String, Value>) -> Value {
    Value::Mapping(
        entries
            .into_iter()
            .map(|(k, v)| (Value::String(k), v))
            .collect::<Mapping>(),
    )
}

/// Collects every mapping key in the document, at any depth.
fn collect_keys(value: &Value, keys: &mut Vec<String>) {
    match value {
        Value::Mapping(mapping) => {
            for (key, child) in mapping {
                if let Value::String(s) = key {
                    keys.push(s.clone());
                }
                collect_keys(child, keys);
            }
        }
        Value::Sequence(items) => {
            for item in items {
                collect_keys(item, keys);
            }
        }
        _ => {}
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // camel_case is idempotent
    #[test]
    fn camel_case_idempotent(raw in "[a-zA-Z0-9_.-]{0,16}") {
        let once = camel_case(&raw);
        prop_assert_eq!(camel_case(&once), once);
    }

    // camel_case output never contains separator characters
    #[test]
    fn camel_case_strips_separators(raw in "[a-zA-Z0-9_.-]{0,16}") {
        prop_assert!(!camel_case(&raw).contains(['_', '-', '.']));
    }

    // root_type_name is idempotent, the config-suffix rule included
    #[test]
    fn root_type_name_idempotent(raw in "[a-zA-Z0-9_.-]{0,16}") {
        let once = root_type_name(&raw);
        prop_assert_eq!(root_type_name(&once), once);
    }

    // Inferring the same document twice yields equal schemas
    #[test]
    fn inference_is_deterministic(doc in document_strategy()) {
        let a = Schema::infer(&doc, "config").unwrap();
        let b = Schema::infer(&doc, "config").unwrap();
        prop_assert_eq!(a, b);
    }

    // Mapping key order does not affect the inferred schema
    #[test]
    fn inference_ignores_key_order(entries in flat_document_entries(), nested in value_strategy()) {
        let mut forward = Mapping::new();
        forward.insert(Value::String("section".to_string()), nested.clone());
        for (k, v) in &entries {
            forward.insert(Value::String(k.clone()), v.clone());
        }

        let mut reverse = Mapping::new();
        for (k, v) in entries.iter().rev() {
            reverse.insert(Value::String(k.clone()), v.clone());
        }
        reverse.insert(Value::String("section".to_string()), nested);

        let a = Schema::infer(&Value::Mapping(forward), "config").unwrap();
        let b = Schema::infer(&Value::Mapping(reverse), "config").unwrap();
        prop_assert_eq!(a, b);
    }

    // Rendering is byte-deterministic
    #[test]
    fn rendering_is_deterministic(doc in document_strategy()) {
        let schema = Schema::infer(&doc, "config").unwrap();
        prop_assert_eq!(render(&schema, "doc.yaml"), render(&schema, "doc.yaml"));
    }

    // Every key of a mapping-only document becomes a field of some record
    #[test]
    fn every_key_becomes_a_field(doc in mapping_document_strategy()) {
        let schema = Schema::infer(&doc, "config").unwrap();

        let mut keys = Vec::new();
        collect_keys(&doc, &mut keys);

        for key in keys {
            let found = schema
                .records()
                .iter()
                .any(|record| record.fields.iter().any(|f| f.source_key == key));
            prop_assert!(found, "key {:?} missing from all records", key);
        }
    }

    // The root record is always emitted under the derived root name
    #[test]
    fn rendered_output_declares_root(doc in document_strategy(), name in "[a-z][a-z_]{0,10}") {
        let schema = Schema::infer(&doc, &name).unwrap();
        let code = render(&schema, "doc.yaml");
        prop_assert!(code.contains(&format!("pub struct {} ", root_type_name(&name))));
    }
}
