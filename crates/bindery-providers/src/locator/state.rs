//! Struct-state locator
//!
//! Resolves dotted paths against the session state, optionally below a root
//! selector (e.g. root `config` turns `port` into `config.port`).

use bindery_domain::error::Result;
use bindery_domain::ports::{Locator, LocatorProvider};
use bindery_domain::record::State;
use bindery_domain::value::Value;

use crate::constants::PATH_SEPARATOR;

/// Provider resolving paths on the session state
#[derive(Debug, Clone)]
pub struct StructProvider {
    kind: String,
    root: String,
    priority: i32,
}

impl StructProvider {
    /// Provider for `kind` reading below `root` (empty for the state itself)
    pub fn new<K: Into<String>, R: Into<String>>(kind: K, root: R, priority: i32) -> Self {
        Self {
            kind: kind.into(),
            root: root.into(),
            priority,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }
}

impl LocatorProvider for StructProvider {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn locate<'a>(&'a self, state: State<'a>) -> Result<Box<dyn Locator + 'a>> {
        Ok(Box::new(StructLocator {
            kind: &self.kind,
            root: &self.root,
            state,
        }))
    }
}

struct StructLocator<'a> {
    kind: &'a str,
    root: &'a str,
    state: State<'a>,
}

impl StructLocator<'_> {
    fn path(&self, name: &str) -> String {
        match (self.root.is_empty(), name.is_empty()) {
            (true, _) => name.to_string(),
            (false, true) => self.root.to_string(),
            (false, false) => format!("{}{PATH_SEPARATOR}{name}", self.root),
        }
    }
}

impl Locator for StructLocator<'_> {
    fn kind(&self) -> &str {
        self.kind
    }

    fn value(&self, name: &str) -> Result<Option<Value>> {
        self.state.value(&self.path(name))
    }
}
