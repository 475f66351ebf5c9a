//! Dynamic values
//!
//! [`Value`] is what flows between locators, the cache, transformers and
//! destination records. Shared objects travel as [`Instance`] handles; they
//! are process-local and never persisted.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A dynamically typed value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Untyped nil
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    /// Pointer; `None` is the nil pointer
    Ptr(Option<Box<Value>>),
    /// Shared process-local object
    #[serde(skip)]
    Instance(Instance),
}

impl Value {
    /// Box `value` behind a non-nil pointer
    pub fn ptr(value: Value) -> Self {
        Self::Ptr(Some(Box::new(value)))
    }

    /// Shared object value
    pub fn instance<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self::Instance(Instance::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_ptr(&self) -> bool {
        matches!(self, Self::Ptr(_))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Uint(_) | Self::Float(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Uint(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    /// Numeric value widened to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Uint(u) => Some(*u as f64),
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Instance(i) => Some(i),
            _ => None,
        }
    }

    /// Follow non-nil pointers; `None` for a nil pointer
    pub fn follow(&self) -> Option<&Value> {
        match self {
            Self::Ptr(None) => None,
            Self::Ptr(Some(inner)) => inner.follow(),
            other => Some(other),
        }
    }

    /// Resolve a dotted path inside nested maps
    ///
    /// Pointers are followed; a nil pointer or a missing key yields `None`.
    /// An empty path returns the value itself.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return Some(self);
        }
        self.walk(path.split('.'))
    }

    /// Follow map keys one segment at a time
    ///
    /// Segments are taken verbatim, so keys may contain dots. No segments
    /// returns the value itself.
    pub fn walk<'s, I>(&self, segments: I) -> Option<&Value>
    where
        I: IntoIterator<Item = &'s str>,
    {
        let mut current = self;
        for segment in segments {
            current = current.follow()?.as_map()?.get(segment)?;
        }
        Some(current)
    }

    /// Short type name used in error messages
    pub fn kind_name(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(_) => "bool".to_string(),
            Self::Int(_) => "i64".to_string(),
            Self::Uint(_) => "u64".to_string(),
            Self::Float(_) => "f64".to_string(),
            Self::String(_) => "String".to_string(),
            Self::List(_) => "Vec<Value>".to_string(),
            Self::Map(_) => "Map<String, Value>".to_string(),
            Self::Ptr(None) => "Option<_>".to_string(),
            Self::Ptr(Some(inner)) => format!("Option<{}>", inner.kind_name()),
            Self::Instance(instance) => format!("Arc<{}>", instance.identity()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null | Self::Ptr(None) => f.write_str("<nil>"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("map[")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                f.write_str("]")
            }
            Self::Ptr(Some(inner)) => write!(f, "{inner}"),
            Self::Instance(instance) => f.write_str(instance.identity()),
        }
    }
}

/// Handle to a shared, process-local object
///
/// Wraps an `Arc<T>` (including trait objects such as `Arc<dyn Logger>`)
/// together with the identity of `T`.
#[derive(Clone)]
pub struct Instance {
    identity: &'static str,
    addr: usize,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    /// Wrap a shared object; its identity is the type name of `T`
    pub fn new<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Self {
        let addr = Arc::as_ptr(&value) as *const () as usize;
        Self {
            identity: std::any::type_name::<T>(),
            addr,
            inner: Arc::new(value),
        }
    }

    /// Identity of the wrapped type
    pub fn identity(&self) -> &'static str {
        self.identity
    }

    /// Recover the `Arc<T>` this instance was created from
    pub fn downcast<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.inner.downcast_ref::<Arc<T>>().cloned()
    }

    /// Whether both handles point at the same object
    pub fn same_object(&self, other: &Instance) -> bool {
        self.identity == other.identity && self.addr == other.addr
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.same_object(other)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("identity", &self.identity)
            .field("addr", &format_args!("{:#x}", self.addr))
            .finish()
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Self::Int(value as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Self::Uint(value as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Self::Map(value)
    }
}

impl From<Instance> for Value {
    fn from(value: Instance) -> Self {
        Self::Instance(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Self::Ptr(value.map(|v| Box::new(v.into())))
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Uint(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Build a [`Value::Map`] from `key => value` pairs
#[macro_export]
macro_rules! value_map {
    () => {
        $crate::Value::Map(::std::collections::BTreeMap::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut entries = ::std::collections::BTreeMap::new();
        $(entries.insert(::std::string::String::from($key), $crate::Value::from($value));)+
        $crate::Value::Map(entries)
    }};
}
