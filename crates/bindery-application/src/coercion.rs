//! Type coercion
//!
//! Converts resolved values into values assignable to a destination field's
//! declared [`TypeDesc`]:
//!
//! | Destination | Value | Result |
//! |-------------|-------|--------|
//! | any | assignable | unchanged |
//! | `Option<T>` | non-pointer assignable to `T` | boxed |
//! | non-pointer | pointer | dereferenced, nil yields the zero value |
//! | `Vec<T>` | list | element-wise coercion |
//! | numeric | numeric | converted through `f64`, then narrowed |
//! | `String` | anything | display text |

use bindery_domain::error::{Error, Result};
use bindery_domain::types::{NumberKind, TypeDesc};
use bindery_domain::value::Value;

/// Coerce `value` into a value assignable to `dest`
pub fn coerce(dest: &TypeDesc, value: Value) -> Result<Value> {
    if value.is_null() {
        return Ok(zero_value(dest));
    }
    if is_assignable(dest, &value) {
        return Ok(value);
    }
    match (dest, value) {
        (TypeDesc::Ptr(inner), value) if !value.is_ptr() => {
            if !is_assignable(inner, &value) {
                return Err(Error::incompatible(inner, value.kind_name()));
            }
            Ok(Value::ptr(value))
        }
        (dest, Value::Ptr(pointee)) => match pointee {
            None => Ok(zero_value(dest)),
            Some(inner) if is_assignable(dest, &inner) => Ok(*inner),
            Some(inner) => Err(Error::incompatible(dest, inner.kind_name())),
        },
        (TypeDesc::Seq(elem), Value::List(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                coerce(elem, item).map_err(|e| Error::SequenceElement {
                    index,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        (TypeDesc::Number(kind), value) if value.is_numeric() => Ok(convert_number(*kind, &value)),
        (TypeDesc::String, value) => Ok(Value::String(value.to_string())),
        (dest, value) => Err(Error::incompatible(dest, value.kind_name())),
    }
}

/// Whether `value` can be stored in a `dest` slot as is
pub fn is_assignable(dest: &TypeDesc, value: &Value) -> bool {
    match (dest, value) {
        (TypeDesc::Any, _) => true,
        (TypeDesc::Ptr(_) | TypeDesc::Interface(_) | TypeDesc::Object(_), Value::Null) => true,
        (TypeDesc::Bool, Value::Bool(_)) => true,
        (TypeDesc::Number(kind), Value::Int(i)) => kind.holds_int(*i),
        (TypeDesc::Number(kind), Value::Uint(u)) => kind.holds_uint(*u),
        (TypeDesc::Number(kind), Value::Float(_)) => kind.is_float(),
        (TypeDesc::String, Value::String(_)) => true,
        (TypeDesc::Ptr(_), Value::Ptr(None)) => true,
        (TypeDesc::Ptr(inner), Value::Ptr(Some(pointee))) => is_assignable(inner, pointee),
        (TypeDesc::Seq(elem), Value::List(items)) => items.iter().all(|v| is_assignable(elem, v)),
        (TypeDesc::Map(elem), Value::Map(entries)) => {
            entries.values().all(|v| is_assignable(elem, v))
        }
        (TypeDesc::Record(_), Value::Map(_)) => true,
        (TypeDesc::Object(identity) | TypeDesc::Interface(identity), Value::Instance(instance)) => {
            instance.identity() == *identity
        }
        _ => false,
    }
}

/// Zero value of `dest`
pub fn zero_value(dest: &TypeDesc) -> Value {
    match dest {
        TypeDesc::Bool => Value::Bool(false),
        TypeDesc::Number(kind) if kind.is_float() => Value::Float(0.0),
        TypeDesc::Number(kind) if kind.is_unsigned() => Value::Uint(0),
        TypeDesc::Number(_) => Value::Int(0),
        TypeDesc::String => Value::String(String::new()),
        TypeDesc::Ptr(_) => Value::Ptr(None),
        TypeDesc::Seq(_) => Value::List(Vec::new()),
        TypeDesc::Map(_) | TypeDesc::Record(_) => Value::Map(Default::default()),
        TypeDesc::Any | TypeDesc::Object(_) | TypeDesc::Interface(_) => Value::Null,
    }
}

/// Numeric conversion through an `f64` intermediate
///
/// Narrowing saturates at the bounds of the destination kind.
fn convert_number(kind: NumberKind, value: &Value) -> Value {
    let x = value.as_f64().unwrap_or_default();
    match kind {
        NumberKind::I8 => Value::Int(x as i8 as i64),
        NumberKind::I16 => Value::Int(x as i16 as i64),
        NumberKind::I32 => Value::Int(x as i32 as i64),
        NumberKind::I64 => Value::Int(x as i64),
        NumberKind::Isize => Value::Int(x as isize as i64),
        NumberKind::U8 => Value::Uint(x as u8 as u64),
        NumberKind::U16 => Value::Uint(x as u16 as u64),
        NumberKind::U32 => Value::Uint(x as u32 as u64),
        NumberKind::U64 => Value::Uint(x as u64),
        NumberKind::Usize => Value::Uint(x as usize as u64),
        NumberKind::F32 => Value::Float(x as f32 as f64),
        NumberKind::F64 => Value::Float(x),
    }
}
