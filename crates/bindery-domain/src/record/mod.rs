//! Record introspection
//!
//! The narrow reflection layer the injector works against: a record reports
//! its fields (name, declared [`TypeDesc`], annotations) and exposes
//! get/set by field name. Implementations are normally generated by the
//! [`record!`](crate::record!) macro.
//!
//! ```text
//! RecordType ── fields ──▶ FieldDescriptor { name, type_desc, tags }
//!     │
//! Record::get_field / set_field ◀── Value
//!     │
//! State (dotted-path reads over &dyn Record)
//! ```

mod field;
mod macros;

pub use field::{FieldValue, Interface};

use crate::error::{Error, Result};
use crate::types::TypeDesc;
use crate::value::Value;

/// A record whose fields can be enumerated, read and written at run time
pub trait Record: Send + Sync + 'static {
    /// Field layout of the record type
    fn record_type() -> RecordType
    where
        Self: Sized;

    /// Current value of a top-level field, `None` for an unknown field
    fn get_field(&self, name: &str) -> Option<Value>;

    /// Value at `path` below the top-level field `name`
    ///
    /// Only the leaf is converted. `None` for an unknown field, `Some(None)`
    /// when the path does not lead to a value.
    fn field_value_at(&self, name: &str, path: &[&str]) -> Option<Option<Value>>;

    /// Overwrite a top-level field
    fn set_field(&mut self, name: &str, value: Value) -> Result<()>;

    /// Snapshot of all fields as a [`Value::Map`]
    fn to_value(&self) -> Value;
}

/// Field layout of a record type
#[derive(Debug, Clone)]
pub struct RecordType {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl RecordType {
    pub fn new(name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self { name, fields }
    }

    /// Type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Field by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One field of a record type
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: &'static str,
    type_desc: TypeDesc,
    tags: Vec<(&'static str, &'static str)>,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, type_desc: TypeDesc) -> Self {
        Self {
            name,
            type_desc,
            tags: Vec::new(),
        }
    }

    /// Attach an annotation
    pub fn with_tag(mut self, key: &'static str, value: &'static str) -> Self {
        self.tags.push((key, value));
        self
    }

    /// Field path (the field name for top-level fields)
    pub fn path(&self) -> &'static str {
        self.name
    }

    /// Declared type
    pub fn type_desc(&self) -> &TypeDesc {
        &self.type_desc
    }

    /// Annotation value for `key`
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

/// Read handle over a record instance
///
/// Resolves dotted paths: the first segment must name a field of the record,
/// later segments walk nested records and maps. A nil pointer anywhere on the
/// way, or at the leaf, reads as absent.
#[derive(Clone, Copy)]
pub struct State<'a> {
    record: &'a dyn Record,
}

impl<'a> State<'a> {
    pub fn new(record: &'a dyn Record) -> Self {
        Self { record }
    }

    /// Underlying record
    pub fn record(&self) -> &'a dyn Record {
        self.record
    }

    /// Value at `path`
    ///
    /// `Ok(None)` means the path exists but holds no value. An unknown
    /// top-level field is an error.
    pub fn value(&self, path: &str) -> Result<Option<Value>> {
        if path.is_empty() {
            return Ok(Some(self.record.to_value()));
        }
        let segments: Vec<&str> = path.split('.').collect();
        let leaf = self.walk(path, &segments)?;
        Ok(leaf.filter(|v| !matches!(v, Value::Ptr(None))))
    }

    /// Entry `key` of the map at `path`
    ///
    /// The key is matched verbatim, dots included. `Ok(None)` when the map
    /// is nil, has no such entry, or `path` does not hold a map.
    pub fn entry(&self, path: &str, key: &str) -> Result<Option<Value>> {
        let mut segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
        segments.push(key);
        self.walk(path, &segments)
    }

    fn walk(&self, path: &str, segments: &[&str]) -> Result<Option<Value>> {
        let Some((head, rest)) = segments.split_first() else {
            return Ok(Some(self.record.to_value()));
        };
        self.record
            .field_value_at(head, rest)
            .ok_or_else(|| Error::access(path, format!("unknown field: {head}")))
    }
}

impl std::fmt::Debug for State<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("value", &self.record.to_value())
            .finish()
    }
}
