//! Tests for dynamic values

use std::sync::Arc;

use bindery_domain::value_map;
use bindery_domain::{Instance, Value};

trait Store: Send + Sync {
    fn name(&self) -> &str;
}

struct Memory;

impl Store for Memory {
    fn name(&self) -> &str {
        "memory"
    }
}

#[test]
fn test_lookup_walks_maps_and_pointers() {
    let value = value_map! {
        "db" => Value::ptr(value_map! { "url" => "postgres://", "pool" => 4_i64 }),
        "cache" => Value::Ptr(None),
    };

    assert_eq!(value.lookup("db.pool"), Some(&Value::Int(4)));
    assert_eq!(value.lookup("db.missing"), None);
    assert_eq!(value.lookup("cache.size"), None);
    assert_eq!(value.lookup(""), Some(&value));
}

#[test]
fn test_follow_stops_at_nil() {
    let nested = Value::ptr(Value::ptr(Value::Bool(true)));
    assert_eq!(nested.follow(), Some(&Value::Bool(true)));
    assert_eq!(Value::Ptr(None).follow(), None);
    assert_eq!(Value::Int(1).follow(), Some(&Value::Int(1)));
}

#[test]
fn test_numeric_views() {
    assert_eq!(Value::Uint(7).as_i64(), Some(7));
    assert_eq!(Value::Uint(u64::MAX).as_i64(), None);
    assert_eq!(Value::Int(-2).as_f64(), Some(-2.0));
    assert!(Value::Float(0.5).is_numeric());
    assert!(!Value::Bool(true).is_numeric());
}

#[test]
fn test_display_matches_plain_text() {
    assert_eq!(Value::from("text").to_string(), "text");
    assert_eq!(Value::Null.to_string(), "<nil>");
    assert_eq!(Value::ptr(Value::Int(3)).to_string(), "3");
    assert_eq!(
        Value::List(vec![Value::Int(1), Value::Bool(false)]).to_string(),
        "[1 false]"
    );
    assert_eq!(value_map! { "a" => 1_i64 }.to_string(), "map[a:1]");
}

#[test]
fn test_from_json() {
    let value = Value::from(serde_json::json!({"name": "svc", "ports": [80, 443], "ratio": 0.5}));
    assert_eq!(value.lookup("name"), Some(&Value::from("svc")));
    assert_eq!(
        value.lookup("ports"),
        Some(&Value::List(vec![Value::Int(80), Value::Int(443)]))
    );
    assert_eq!(value.lookup("ratio"), Some(&Value::Float(0.5)));
}

#[test]
fn test_instance_keeps_identity_and_object() {
    let store: Arc<dyn Store> = Arc::new(Memory);
    let value = Value::instance(Arc::clone(&store));
    let instance = value.as_instance().unwrap();

    assert_eq!(instance.identity(), std::any::type_name::<dyn Store>());
    let recovered = instance.downcast::<dyn Store>().unwrap();
    assert_eq!(recovered.name(), "memory");
    assert!(Arc::ptr_eq(&recovered, &store));
    assert!(instance.downcast::<Memory>().is_none());
}

#[test]
fn test_instances_compare_by_object() {
    let first = Instance::new(Arc::new(Memory) as Arc<dyn Store>);
    let same = first.clone();
    let other = Instance::new(Arc::new(Memory) as Arc<dyn Store>);

    assert!(first.same_object(&same));
    assert!(!first.same_object(&other));
}
