//! Map locator
//!
//! Resolves keys of a map-typed field of the session state, e.g. a
//! `settings: HashMap<String, Value>` field.

use bindery_domain::error::{Error, Result};
use bindery_domain::ports::{Locator, LocatorProvider};
use bindery_domain::record::State;
use bindery_domain::value::Value;
use tracing::trace;

/// Provider resolving keys of a state map field
#[derive(Debug, Clone)]
pub struct MapProvider {
    kind: String,
    field: String,
    priority: i32,
}

impl MapProvider {
    /// Provider for `kind` reading keys of the state field `field`
    pub fn new<K: Into<String>, F: Into<String>>(kind: K, field: F, priority: i32) -> Self {
        Self {
            kind: kind.into(),
            field: field.into(),
            priority,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl LocatorProvider for MapProvider {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn locate<'a>(&'a self, state: State<'a>) -> Result<Box<dyn Locator + 'a>> {
        Ok(Box::new(MapLocator {
            kind: &self.kind,
            field: &self.field,
            state,
        }))
    }
}

/// Reads entries in place; the whole map is only materialized to explain a
/// miss
struct MapLocator<'a> {
    kind: &'a str,
    field: &'a str,
    state: State<'a>,
}

impl MapLocator<'_> {
    fn check_shape(&self) -> Result<()> {
        match self.state.value(self.field)? {
            None => {
                trace!(kind = self.kind, field = self.field, "Map field is nil");
                Ok(())
            }
            Some(value) => match value.follow() {
                Some(Value::Map(_)) | None => Ok(()),
                Some(other) => Err(Error::locator(format!(
                    "expected map at {} but had {}",
                    self.field,
                    other.kind_name()
                ))),
            },
        }
    }
}

impl Locator for MapLocator<'_> {
    fn kind(&self) -> &str {
        self.kind
    }

    fn value(&self, name: &str) -> Result<Option<Value>> {
        if let Some(value) = self.state.entry(self.field, name)? {
            return Ok(Some(value));
        }
        self.check_shape()?;
        Ok(None)
    }
}
