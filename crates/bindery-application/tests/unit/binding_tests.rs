//! Tests for binding extraction and priority grouping

use std::sync::Arc;

use bindery_application::binding::{BindingExtractor, group_by_priority};
use bindery_application::registry::{LocatorRegistry, TransformerRegistry};
use bindery_domain::error::Error;
use bindery_domain::ports::Transformer;
use bindery_domain::record::{Interface, Record, RecordType};
use bindery_domain::types::interface_identity;
use bindery_domain::value::Value;
use bindery_providers::locator::DirectProvider;

pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

bindery_domain::record! {
    #[derive(Default)]
    struct Target {
        #[tag(bind = "kind=setting;in=debug;cacheable")]
        debug: bool,
        #[tag(bind = "in=config.port,required,default=8080")]
        port: i64,
        clock: Interface<dyn Clock>,
        plain: String,
        #[tag(bind = "kind=setting,in=verbose", xform = "bool,strict=true")]
        verbose: bool,
        #[tag(xform = "string")]
        untouched: String,
    }
}

bindery_domain::record! {
    #[derive(Default)]
    struct Blank {
        #[tag(bind = "cacheable")]
        value: i64,
    }
}

bindery_domain::record! {
    #[derive(Default)]
    struct BadTransformerName {
        #[tag(bind = "in=name", xform = "nope")]
        name: String,
    }
}

bindery_domain::record! {
    #[derive(Default)]
    struct RejectedTransformer {
        #[tag(bind = "in=name", xform = "int")]
        name: String,
    }
}

bindery_domain::record! {
    #[derive(Default)]
    struct Prioritized {
        #[tag(bind = "kind=third,in=d")]
        d: i64,
        #[tag(bind = "kind=first,in=a")]
        a: i64,
        #[tag(bind = "kind=second,in=c")]
        c: i64,
        #[tag(bind = "kind=also_first,in=b")]
        b: i64,
    }
}

fn extract(record_type: &RecordType) -> bindery_domain::Result<Vec<bindery_application::Binding>> {
    let transformers = TransformerRegistry::with_builtins();
    BindingExtractor::new("bind", "xform", "interface", &transformers, None).extract(record_type)
}

// ============================================================================
// Extraction Tests
// ============================================================================

#[test]
fn test_extract_parses_annotations() {
    let bindings = extract(&Target::record_type()).unwrap();
    let paths: Vec<&str> = bindings.iter().map(|b| b.path()).collect();
    assert_eq!(paths, vec!["debug", "port", "clock", "verbose"]);

    let debug = &bindings[0];
    assert_eq!(debug.location().kind, "setting");
    assert_eq!(debug.location().input, "debug");
    assert!(debug.is_cacheable());
    assert!(!debug.is_required());
    assert!(debug.provider().is_none());

    let port = &bindings[1];
    assert_eq!(port.location().kind, "state");
    assert_eq!(port.location().input, "config.port");
    assert!(port.is_required());
    assert_eq!(port.default_value(), Some(&Value::Int(8080)));
}

#[test]
fn test_interface_field_is_auto_bound() {
    let bindings = extract(&Target::record_type()).unwrap();
    let clock = bindings.iter().find(|b| b.path() == "clock").unwrap();
    assert_eq!(clock.location().kind, "interface");
    assert_eq!(clock.location().input, interface_identity::<dyn Clock>());
    assert!(!clock.is_cacheable());
}

#[test]
fn test_transformer_is_built_with_config() {
    let bindings = extract(&Target::record_type()).unwrap();
    let verbose = bindings.iter().find(|b| b.path() == "verbose").unwrap();
    assert_eq!(verbose.transformer().map(|t| t.name()), Some("bool"));
    assert_eq!(
        verbose.transform_config().and_then(|c| c.get("strict")),
        Some("true")
    );
}

#[test]
fn test_transformer_without_binding_is_ignored() {
    let bindings = extract(&Target::record_type()).unwrap();
    assert!(bindings.iter().all(|b| b.path() != "untouched"));
}

#[test]
fn test_empty_location_fails() {
    let err = extract(&Blank::record_type()).unwrap_err();
    assert!(matches!(&err, Error::EmptyLocation { path } if path == "value"));
}

#[test]
fn test_unknown_transformer_names_field() {
    let err = extract(&BadTransformerName::record_type()).unwrap_err();
    assert!(
        matches!(&err, Error::UnknownTransformer { name, path } if name == "nope" && path == "name")
    );
    assert!(err.is_configuration());
}

#[test]
fn test_transformer_rejecting_destination_fails() {
    let err = extract(&RejectedTransformer::record_type()).unwrap_err();
    assert!(
        matches!(&err, Error::TransformerCreation { name, path, .. } if name == "int" && path == "name")
    );
}

#[test]
fn test_custom_tag_names() {
    let transformers = TransformerRegistry::with_builtins();
    let bindings = BindingExtractor::new("inject", "convert", "iface", &transformers, None)
        .extract(&Target::record_type())
        .unwrap();
    // Only the interface field is bound when no field uses the custom key
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].location().kind, "iface");
}

// ============================================================================
// Grouping Tests
// ============================================================================

fn priority_registry() -> LocatorRegistry {
    let registry = LocatorRegistry::new();
    for (kind, priority) in [("first", 1), ("also_first", 1), ("second", 2), ("third", 3)] {
        registry
            .register(Arc::new(DirectProvider::new(kind, Value::Null, priority)))
            .unwrap();
    }
    registry
}

#[test]
fn test_grouping_is_stable_by_priority() {
    let bindings = extract(&Prioritized::record_type()).unwrap();
    let groups = group_by_priority(bindings, &priority_registry()).unwrap();

    let paths: Vec<Vec<&str>> = groups
        .iter()
        .map(|group| group.iter().map(|b| b.path()).collect())
        .collect();
    assert_eq!(paths, vec![vec!["a", "b"], vec!["c"], vec!["d"]]);

    let priorities: Vec<Option<i32>> = groups.iter().map(|g| g[0].priority()).collect();
    assert_eq!(priorities, vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn test_grouping_is_deterministic() {
    let registry = priority_registry();
    let first = group_by_priority(extract(&Prioritized::record_type()).unwrap(), &registry).unwrap();
    let second =
        group_by_priority(extract(&Prioritized::record_type()).unwrap(), &registry).unwrap();
    let flatten = |groups: &Vec<Vec<bindery_application::Binding>>| -> Vec<&'static str> {
        groups.iter().flatten().map(|b| b.path()).collect()
    };
    assert_eq!(flatten(&first), flatten(&second));
}

#[test]
fn test_grouping_unknown_kind_names_kind_and_path() {
    let bindings = extract(&Prioritized::record_type()).unwrap();
    let err = group_by_priority(bindings, &LocatorRegistry::new()).unwrap_err();
    assert!(matches!(&err, Error::UnknownKind { kind, path } if kind == "third" && path == "d"));
    let message = err.to_string();
    assert!(message.contains("third") && message.contains("path: d"), "{message}");
}
