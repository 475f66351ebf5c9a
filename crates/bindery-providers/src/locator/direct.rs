//! Direct locator
//!
//! Wraps a fixed value as its own source, independent of the session state.
//! Used for constants and for registering shared implementations, e.g. the
//! interface map consulted by auto-bound interface fields.

use bindery_domain::error::Result;
use bindery_domain::ports::{Locator, LocatorProvider};
use bindery_domain::record::{Record, State};
use bindery_domain::value::Value;

/// Provider serving dotted paths of a fixed value
#[derive(Debug, Clone)]
pub struct DirectProvider {
    kind: String,
    value: Value,
    priority: i32,
}

impl DirectProvider {
    pub fn new<K: Into<String>>(kind: K, value: Value, priority: i32) -> Self {
        Self {
            kind: kind.into(),
            value,
            priority,
        }
    }

    /// Provider serving the fields of `record`
    pub fn from_record<K: Into<String>>(kind: K, record: &dyn Record, priority: i32) -> Self {
        Self::new(kind, record.to_value(), priority)
    }

    /// Wrapped value
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl LocatorProvider for DirectProvider {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn locate<'a>(&'a self, _state: State<'a>) -> Result<Box<dyn Locator + 'a>> {
        Ok(Box::new(DirectLocator { provider: self }))
    }
}

struct DirectLocator<'a> {
    provider: &'a DirectProvider,
}

impl Locator for DirectLocator<'_> {
    fn kind(&self) -> &str {
        &self.provider.kind
    }

    fn value(&self, name: &str) -> Result<Option<Value>> {
        Ok(self
            .provider
            .value
            .lookup(name)
            .filter(|v| !matches!(v, Value::Ptr(None)))
            .cloned())
    }
}
