//! Field value conversions

use crate::error::{Error, Result};
use crate::types::{NumberKind, TypeDesc, interface_identity};
use crate::value::{Instance, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// A type that can live in a record field
///
/// `from_value` is strict: it expects a value already coerced to the
/// declared type and only narrows numbers that fit.
pub trait FieldValue: Sized {
    /// Declared type
    fn type_desc() -> TypeDesc;

    /// Current value
    fn to_value(&self) -> Value;

    /// Build from a value of the declared type
    fn from_value(value: Value) -> Result<Self>;

    /// Value reached by walking `path` into this value
    ///
    /// `None` when a segment is missing or a nil pointer is crossed. Maps,
    /// pointers and records walk in place and only convert the leaf.
    fn value_at(&self, path: &[&str]) -> Option<Value> {
        if path.is_empty() {
            return Some(self.to_value());
        }
        self.to_value().walk(path.iter().copied()).cloned()
    }
}

fn mismatch<T>(expected: TypeDesc, value: &Value) -> Result<T> {
    Err(Error::incompatible(expected, value.kind_name()))
}

impl FieldValue for bool {
    fn type_desc() -> TypeDesc {
        TypeDesc::Bool
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => mismatch(Self::type_desc(), &other),
        }
    }
}

macro_rules! integer_field {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(impl FieldValue for $t {
            fn type_desc() -> TypeDesc {
                TypeDesc::Number(NumberKind::$kind)
            }

            fn to_value(&self) -> Value {
                Value::from(*self)
            }

            fn from_value(value: Value) -> Result<Self> {
                let converted = match &value {
                    Value::Int(i) => <$t>::try_from(*i).ok(),
                    Value::Uint(u) => <$t>::try_from(*u).ok(),
                    _ => None,
                };
                match converted {
                    Some(v) => Ok(v),
                    None => mismatch(Self::type_desc(), &value),
                }
            }
        })*
    };
}

integer_field!(
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize,
);

impl FieldValue for f32 {
    fn type_desc() -> TypeDesc {
        TypeDesc::Number(NumberKind::F32)
    }

    fn to_value(&self) -> Value {
        Value::Float(*self as f64)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value.as_f64() {
            Some(x) => Ok(x as f32),
            None => mismatch(Self::type_desc(), &value),
        }
    }
}

impl FieldValue for f64 {
    fn type_desc() -> TypeDesc {
        TypeDesc::Number(NumberKind::F64)
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value.as_f64() {
            Some(x) => Ok(x),
            None => mismatch(Self::type_desc(), &value),
        }
    }
}

impl FieldValue for String {
    fn type_desc() -> TypeDesc {
        TypeDesc::String
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => mismatch(Self::type_desc(), &other),
        }
    }
}

impl FieldValue for Value {
    fn type_desc() -> TypeDesc {
        TypeDesc::Any
    }

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }

    fn value_at(&self, path: &[&str]) -> Option<Value> {
        self.walk(path.iter().copied()).cloned()
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::ptr(T::type_desc())
    }

    fn to_value(&self) -> Value {
        Value::Ptr(self.as_ref().map(|v| Box::new(v.to_value())))
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null | Value::Ptr(None) => Ok(None),
            Value::Ptr(Some(inner)) => T::from_value(*inner).map(Some),
            other => mismatch(Self::type_desc(), &other),
        }
    }

    fn value_at(&self, path: &[&str]) -> Option<Value> {
        match (self, path) {
            (_, []) => Some(self.to_value()),
            (None, _) => None,
            (Some(inner), _) => inner.value_at(path),
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::seq(T::type_desc())
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::List(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    T::from_value(item).map_err(|e| Error::SequenceElement {
                        index,
                        source: Box::new(e),
                    })
                })
                .collect(),
            other => mismatch(Self::type_desc(), &other),
        }
    }

    fn value_at(&self, path: &[&str]) -> Option<Value> {
        path.is_empty().then(|| self.to_value())
    }
}

fn map_entries<T: FieldValue>(value: Value) -> Result<Vec<(String, T)>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Map(entries) => entries
            .into_iter()
            .map(|(k, v)| T::from_value(v).map(|v| (k, v)))
            .collect(),
        other => mismatch(TypeDesc::map(T::type_desc()), &other),
    }
}

impl<T: FieldValue> FieldValue for HashMap<String, T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::map(T::type_desc())
    }

    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }

    fn from_value(value: Value) -> Result<Self> {
        Ok(map_entries(value)?.into_iter().collect())
    }

    fn value_at(&self, path: &[&str]) -> Option<Value> {
        match path {
            [] => Some(self.to_value()),
            [key, rest @ ..] => self.get(*key)?.value_at(rest),
        }
    }
}

impl<T: FieldValue> FieldValue for BTreeMap<String, T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::map(T::type_desc())
    }

    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }

    fn from_value(value: Value) -> Result<Self> {
        Ok(map_entries(value)?.into_iter().collect())
    }

    fn value_at(&self, path: &[&str]) -> Option<Value> {
        match path {
            [] => Some(self.to_value()),
            [key, rest @ ..] => self.get(*key)?.value_at(rest),
        }
    }
}

impl<T: Send + Sync + 'static> FieldValue for Arc<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::object::<T>()
    }

    fn to_value(&self) -> Value {
        Value::Instance(Instance::new(self.clone()))
    }

    fn from_value(value: Value) -> Result<Self> {
        match value.as_instance().and_then(Instance::downcast::<T>) {
            Some(arc) => Ok(arc),
            None => mismatch(Self::type_desc(), &value),
        }
    }
}

/// Slot for a trait-object dependency
///
/// Fields of this type are auto-bound to the interface locator under
/// [`interface_identity::<T>()`](crate::types::interface_identity).
///
/// ```ignore
/// pub logger: Interface<dyn Logger>,
/// ```
pub struct Interface<T: ?Sized>(Option<Arc<T>>);

impl<T: ?Sized> Interface<T> {
    /// Filled slot
    pub fn new(value: Arc<T>) -> Self {
        Self(Some(value))
    }

    /// Injected implementation, if any
    pub fn get(&self) -> Option<&Arc<T>> {
        self.0.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn take(&mut self) -> Option<Arc<T>> {
        self.0.take()
    }
}

impl<T: ?Sized> Default for Interface<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T: ?Sized> Clone for Interface<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: ?Sized + 'static> fmt::Debug for Interface<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interface")
            .field("identity", &interface_identity::<T>())
            .field("set", &self.is_set())
            .finish()
    }
}

impl<T: ?Sized + Send + Sync + 'static> FieldValue for Interface<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::interface::<T>()
    }

    fn to_value(&self) -> Value {
        match &self.0 {
            Some(arc) => Value::Instance(Instance::new(arc.clone())),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null | Value::Ptr(None) => Ok(Self(None)),
            Value::Instance(instance) => match instance.downcast::<T>() {
                Some(arc) => Ok(Self(Some(arc))),
                None => Err(Error::incompatible(Self::type_desc(), instance.identity())),
            },
            other => mismatch(Self::type_desc(), &other),
        }
    }
}
