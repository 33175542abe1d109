// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Resources
//!
//! Identity, key canonicalization, namevar aliasing and document
//! round-trips checked over generated inputs.

use cim_resource::{Reference, Resource, Value};
use proptest::prelude::*;

use crate::fixtures::type_registry;

// ============================================================================
// Strategies
// ============================================================================

/// Type names, optionally namespaced
fn kind() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}(::[a-z][a-z0-9_]{0,8})?"
}

/// Non-empty titles, including path-like ones
fn title() -> impl Strategy<Value = String> {
    "[A-Za-z0-9/_. -]{1,20}"
}

/// Parameter names other than the `name` alias
fn parameter_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}".prop_filter("name is an alias", |name| name != "name")
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e9..1.0e9f64).prop_map(Value::from),
        "[ -~]{0,16}".prop_map(Value::from),
    ]
}

fn reference() -> impl Strategy<Value = Reference> {
    (kind(), title()).prop_map(|(kind, title)| {
        Reference::new(kind, title).expect("strategies produce non-empty parts")
    })
}

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        scalar(),
        reference().prop_map(Value::from),
        prop::collection::vec(prop_oneof![scalar(), reference().prop_map(Value::from)], 0..4)
            .prop_map(Value::List),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Type and title come back unchanged and the ref matches the reference
    #[test]
    fn prop_identity(kind in kind(), title in title()) {
        let resource = Resource::new(kind.clone(), title.clone()).unwrap();

        prop_assert_eq!(resource.kind(), kind.as_str());
        prop_assert_eq!(resource.title(), title.as_str());
        prop_assert_eq!(resource.to_ref(), Reference::new(kind, title).unwrap().to_string());
    }

    /// Writes through any casing are visible through any other casing
    #[test]
    fn prop_key_case_insensitive(name in parameter_name(), value in value()) {
        let mut resource = Resource::new("file", "/tmp/x").unwrap();
        resource.set(name.to_uppercase(), value.clone());

        let got = resource.get(name.as_str());
        prop_assert_eq!(got.as_deref(), Some(&value));
        prop_assert!(resource.contains_key(name.to_uppercase()));
    }

    /// `name` and the namevar are two spellings of one slot
    #[test]
    fn prop_namevar_alias(path in title()) {
        let types = type_registry();

        let mut via_name = Resource::with_types("mytype", "whatever", &types).unwrap();
        via_name.set("name", path.clone());
        let got = via_name.get("myvar");
        prop_assert_eq!(got.as_deref(), Some(&Value::from(path.clone())));

        let mut via_namevar = Resource::with_types("mytype", "whatever", &types).unwrap();
        via_namevar.set("myvar", path.clone());
        let got = via_namevar.get("name");
        prop_assert_eq!(got.as_deref(), Some(&Value::from(path)));
    }

    /// Mutating the copy returned by `to_map` never reaches the resource
    #[test]
    fn prop_to_map_is_detached(name in parameter_name(), before in value(), after in value()) {
        let mut resource = Resource::new("file", "/tmp/x").unwrap();
        resource.set(name.as_str(), before.clone());

        let mut map = resource.to_map();
        map.insert(name.as_str(), after);
        map.remove("name");

        let got = resource.get(name.as_str());
        prop_assert_eq!(got.as_deref(), Some(&before));
    }

    /// Encoding then decoding preserves type, title and every parameter
    #[test]
    fn prop_document_round_trip(
        kind in kind(),
        title in title(),
        params in prop::collection::vec((parameter_name(), value()), 0..6),
    ) {
        let mut resource = Resource::new(kind, title).unwrap();
        for (name, value) in params {
            resource.set(name, value);
        }

        let decoded = Resource::from_json(&resource.to_json().unwrap()).unwrap();

        prop_assert_eq!(decoded.kind(), resource.kind());
        prop_assert_eq!(decoded.title(), resource.title());
        prop_assert_eq!(decoded.parameters(), resource.parameters());
    }

    /// Non-finite floats are refused instead of encoding as null
    #[test]
    fn prop_non_finite_float_rejected(
        name in parameter_name(),
        x in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
    ) {
        let mut resource = Resource::new("file", "/tmp/x").unwrap();
        resource.set(name, x);

        prop_assert!(resource.to_json().is_err());
    }
}
