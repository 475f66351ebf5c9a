//! Tests for value coercion

use std::sync::Arc;

use bindery_application::coercion::{coerce, is_assignable, zero_value};
use bindery_domain::error::Error;
use bindery_domain::types::{NumberKind, TypeDesc, interface_identity};
use bindery_domain::value::Value;

trait Greeter: Send + Sync {}

struct Plain;

impl Greeter for Plain {}

fn f64_desc() -> TypeDesc {
    TypeDesc::Number(NumberKind::F64)
}

fn i64_desc() -> TypeDesc {
    TypeDesc::Number(NumberKind::I64)
}

#[test]
fn test_integer_into_float_is_exact() {
    assert_eq!(coerce(&f64_desc(), Value::Int(3)).unwrap(), Value::Float(3.0));
    assert_eq!(
        coerce(&TypeDesc::Number(NumberKind::F32), Value::Uint(16_777_216)).unwrap(),
        Value::Float(16_777_216.0)
    );
}

#[test]
fn test_value_into_pointer_is_boxed() {
    let dest = TypeDesc::ptr(i64_desc());
    assert_eq!(coerce(&dest, Value::Int(5)).unwrap(), Value::ptr(Value::Int(5)));
}

#[test]
fn test_pointer_boxing_checks_pointee() {
    let dest = TypeDesc::ptr(TypeDesc::String);
    let err = coerce(&dest, Value::Bool(true)).unwrap_err();
    assert!(matches!(err, Error::Incompatible { .. }));
}

#[test]
fn test_nil_pointer_into_value_is_zero() {
    assert_eq!(coerce(&i64_desc(), Value::Ptr(None)).unwrap(), Value::Int(0));
    assert_eq!(coerce(&TypeDesc::Bool, Value::Ptr(None)).unwrap(), Value::Bool(false));
    assert_eq!(
        coerce(&TypeDesc::String, Value::Null).unwrap(),
        Value::String(String::new())
    );
}

#[test]
fn test_pointer_into_value_is_dereferenced() {
    let value = Value::ptr(Value::String("abc".into()));
    assert_eq!(
        coerce(&TypeDesc::String, value).unwrap(),
        Value::String("abc".into())
    );
}

#[test]
fn test_sequence_elements_are_coerced() {
    let dest = TypeDesc::seq(f64_desc());
    let value = Value::List(vec![Value::Int(1), Value::ptr(Value::Float(2.0)), Value::Null]);
    assert_eq!(
        coerce(&dest, value).unwrap(),
        Value::List(vec![Value::Float(1.0), Value::Float(2.0), Value::Float(0.0)])
    );

    let dest = TypeDesc::seq(TypeDesc::ptr(TypeDesc::String));
    let value = Value::List(vec![Value::String("a".into())]);
    assert_eq!(
        coerce(&dest, value).unwrap(),
        Value::List(vec![Value::ptr(Value::String("a".into()))])
    );
}

#[test]
fn test_sequence_element_failure_names_index() {
    let dest = TypeDesc::seq(i64_desc());
    let value = Value::List(vec![Value::Int(1), Value::Bool(true)]);
    let err = coerce(&dest, value).unwrap_err();
    assert!(matches!(err, Error::SequenceElement { index: 1, .. }));
}

#[test]
fn test_anything_into_string_is_stringified() {
    assert_eq!(coerce(&TypeDesc::String, Value::Int(42)).unwrap(), Value::String("42".into()));
    assert_eq!(
        coerce(&TypeDesc::String, Value::Bool(true)).unwrap(),
        Value::String("true".into())
    );
    let dest = TypeDesc::seq(TypeDesc::String);
    assert_eq!(
        coerce(&dest, Value::List(vec![Value::Float(1.5)])).unwrap(),
        Value::List(vec![Value::String("1.5".into())])
    );
}

#[test]
fn test_incompatible_names_both_types() {
    let err = coerce(&TypeDesc::Bool, Value::String("yes".into())).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("bool") && message.contains("String"), "{message}");
}

#[test]
fn test_map_into_record_is_assignable() {
    let value = Value::Map(Default::default());
    assert!(is_assignable(&TypeDesc::Record("Config"), &value));
    assert!(!is_assignable(&TypeDesc::Record("Config"), &Value::Int(1)));
}

#[test]
fn test_instance_matches_interface_identity() {
    let greeter: Arc<dyn Greeter> = Arc::new(Plain);
    let value = Value::instance(greeter);
    let dest = TypeDesc::Interface(interface_identity::<dyn Greeter>());
    assert_eq!(coerce(&dest, value.clone()).unwrap(), value);

    let concrete = Value::instance(Arc::new(Plain));
    assert!(coerce(&dest, concrete).is_err());
}

#[test]
fn test_zero_values() {
    assert_eq!(zero_value(&TypeDesc::Number(NumberKind::U16)), Value::Uint(0));
    assert_eq!(zero_value(&f64_desc()), Value::Float(0.0));
    assert_eq!(zero_value(&TypeDesc::ptr(TypeDesc::Bool)), Value::Ptr(None));
    assert_eq!(zero_value(&TypeDesc::seq(TypeDesc::Bool)), Value::List(Vec::new()));
}
