//! Tests for the locator and transformer registries
//!
//! The providers crate is linked through the fixtures module, so the
//! built-in transformer slice is populated.

use std::sync::Arc;

use bindery_application::registry::{LocatorRegistry, TransformerRegistry, list_transformers};
use bindery_domain::error::Error;
use bindery_domain::ports::{FnTransformerFactory, LocatorProvider, Transformer, TransformerFactory};
use bindery_domain::tags::TagValues;
use bindery_domain::types::TypeDesc;
use bindery_providers::locator::{MapProvider, StructProvider};
use bindery_providers::transformer::StringTransformer;

// ============================================================================
// Locator Registry Tests
// ============================================================================

#[test]
fn test_register_and_lookup() {
    let registry = LocatorRegistry::new();
    registry
        .register(Arc::new(StructProvider::new("state", "", 0)))
        .unwrap();

    let provider = registry.lookup("state").expect("state provider");
    assert_eq!(provider.kind(), "state");
    assert_eq!(provider.priority(), 0);
    assert!(registry.lookup("missing").is_none());
}

#[test]
fn test_register_rejects_duplicate_kind() {
    let registry = LocatorRegistry::new();
    registry
        .register(Arc::new(StructProvider::new("state", "", 0)))
        .unwrap();

    let err = registry
        .register(Arc::new(MapProvider::new("state", "settings", 5)))
        .unwrap_err();

    assert!(matches!(&err, Error::DuplicateKind { kind } if kind == "state"));
    assert!(err.is_configuration());
    // The first registration is kept
    assert_eq!(registry.lookup("state").unwrap().priority(), 0);
}

#[test]
fn test_unregister_frees_kind() {
    let registry = LocatorRegistry::new();
    registry
        .register(Arc::new(MapProvider::new("setting", "settings", 1)))
        .unwrap();

    assert!(registry.unregister("setting").is_some());
    assert!(registry.unregister("setting").is_none());
    assert!(registry.is_empty());
    registry
        .register(Arc::new(MapProvider::new("setting", "other", 2)))
        .unwrap();
    assert_eq!(registry.lookup("setting").unwrap().priority(), 2);
}

#[test]
fn test_kinds_are_sorted() {
    let registry = LocatorRegistry::new();
    for kind in ["setting", "instance", "state"] {
        registry
            .register(Arc::new(MapProvider::new(kind, "settings", 0)))
            .unwrap();
    }
    assert_eq!(registry.kinds(), vec!["instance", "setting", "state"]);
    assert_eq!(registry.len(), 3);
}

// ============================================================================
// Transformer Registry Tests
// ============================================================================

#[test]
fn test_builtins_are_linked() {
    let names: Vec<&str> = list_transformers().iter().map(|(name, _)| *name).collect();
    for expected in ["bool", "int", "string"] {
        assert!(
            names.contains(&expected),
            "{expected} should be registered. Available: {names:?}"
        );
    }
}

#[test]
fn test_with_builtins_installs_every_entry() {
    let registry = TransformerRegistry::with_builtins();
    let names = registry.names();
    assert!(names.iter().any(|n| n == "bool"));
    assert!(names.iter().any(|n| n == "int"));
    assert!(names.iter().any(|n| n == "string"));
    assert!(TransformerRegistry::new().is_empty());
}

#[test]
fn test_install_builtins_keeps_custom_factory() {
    let registry = TransformerRegistry::new();
    let custom: Arc<dyn TransformerFactory> =
        Arc::new(FnTransformerFactory::new("bool", StringTransformer::create));
    registry.register("bool", Arc::clone(&custom));

    registry.install_builtins();

    let installed = registry.lookup("bool").unwrap();
    assert!(Arc::ptr_eq(&installed, &custom));
}

#[test]
fn test_builtin_factory_validates_destination() {
    let registry = TransformerRegistry::with_builtins();
    let factory = registry.lookup("int").unwrap();
    let config = TagValues::default();

    let transformer = factory
        .create(&config, &TypeDesc::Number(bindery_domain::NumberKind::I64), None)
        .unwrap();
    assert_eq!(transformer.name(), "int");

    assert!(factory.create(&config, &TypeDesc::String, None).is_err());
    assert!(
        factory
            .create(&config, &TypeDesc::Number(bindery_domain::NumberKind::U8), None)
            .is_err()
    );
}

#[test]
fn test_unregister_transformer() {
    let registry = TransformerRegistry::with_builtins();
    assert!(registry.unregister("string").is_some());
    assert!(registry.lookup("string").is_none());
}
