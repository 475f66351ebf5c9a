//! Locator Provider Registry
//!
//! Maps binding kinds to locator providers. Registration normally happens
//! while the injector is set up; lookups are safe from any thread.

use std::sync::Arc;

use bindery_domain::error::{Error, Result};
use bindery_domain::ports::LocatorProvider;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

/// Kind-keyed registry of [`LocatorProvider`]s
#[derive(Default)]
pub struct LocatorRegistry {
    providers: DashMap<String, Arc<dyn LocatorProvider>>,
}

impl LocatorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `provider` under its kind
    ///
    /// Fails with [`Error::DuplicateKind`] when the kind is taken; the
    /// existing entry is left in place.
    pub fn register(&self, provider: Arc<dyn LocatorProvider>) -> Result<()> {
        let kind = provider.kind().to_string();
        match self.providers.entry(kind) {
            Entry::Occupied(entry) => Err(Error::duplicate_kind(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!(
                    kind = %entry.key(),
                    priority = provider.priority(),
                    "Registered locator provider"
                );
                entry.insert(provider);
                Ok(())
            }
        }
    }

    /// Remove the provider for `kind`, returning it if present
    pub fn unregister(&self, kind: &str) -> Option<Arc<dyn LocatorProvider>> {
        self.providers.remove(kind).map(|(_, provider)| provider)
    }

    /// Provider for `kind`
    pub fn lookup(&self, kind: &str) -> Option<Arc<dyn LocatorProvider>> {
        self.providers.get(kind).map(|entry| Arc::clone(entry.value()))
    }

    /// Registered kinds, sorted
    pub fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.providers.iter().map(|e| e.key().clone()).collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for LocatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocatorRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
