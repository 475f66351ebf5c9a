//! Transformer Factory Registry
//!
//! Built-in transformers register themselves into [`TRANSFORMER_FACTORIES`]
//! at link time and are installed into a [`TransformerRegistry`] with
//! [`TransformerRegistry::with_builtins`]. Custom factories are added with
//! [`TransformerRegistry::register`].

use std::sync::Arc;

use bindery_domain::error::Result;
use bindery_domain::ports::{Embedder, FnTransformerFactory, Transformer, TransformerFactory};
use bindery_domain::tags::TagValues;
use bindery_domain::types::TypeDesc;
use dashmap::DashMap;
use tracing::debug;

/// Registry entry for built-in transformers
///
/// Each built-in registers itself with this entry using
/// `#[linkme::distributed_slice(TRANSFORMER_FACTORIES)]`.
pub struct TransformerEntry {
    /// Name used in field annotations (e.g., "bool", "int", "string")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Builds the transformer for one field
    pub constructor: fn(
        &TagValues,
        &TypeDesc,
        Option<Arc<dyn Embedder>>,
    ) -> Result<Arc<dyn Transformer>>,
}

// Auto-collection via linkme distributed slices - built-ins submit entries at compile time
#[linkme::distributed_slice]
pub static TRANSFORMER_FACTORIES: [TransformerEntry] = [..];

/// List all built-in transformers
///
/// Returns (name, description) tuples sorted by name.
pub fn list_transformers() -> Vec<(&'static str, &'static str)> {
    let mut entries: Vec<(&'static str, &'static str)> = TRANSFORMER_FACTORIES
        .iter()
        .map(|e| (e.name, e.description))
        .collect();
    entries.sort_by_key(|(name, _)| *name);
    entries
}

/// Name-keyed registry of [`TransformerFactory`]s
#[derive(Default)]
pub struct TransformerRegistry {
    factories: DashMap<String, Arc<dyn TransformerFactory>>,
}

impl TransformerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with every linked built-in
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.install_builtins();
        registry
    }

    /// Install linked built-ins whose names are not taken yet
    pub fn install_builtins(&self) {
        for entry in TRANSFORMER_FACTORIES {
            if self.factories.contains_key(entry.name) {
                continue;
            }
            self.factories.insert(
                entry.name.to_string(),
                Arc::new(FnTransformerFactory::new(entry.name, entry.constructor)),
            );
            debug!(name = entry.name, "Installed built-in transformer");
        }
    }

    /// Register `factory` under `name`, replacing any previous factory
    pub fn register<N: Into<String>>(&self, name: N, factory: Arc<dyn TransformerFactory>) {
        let name = name.into();
        debug!(name = %name, "Registered transformer factory");
        self.factories.insert(name, factory);
    }

    /// Remove the factory for `name`, returning it if present
    pub fn unregister(&self, name: &str) -> Option<Arc<dyn TransformerFactory>> {
        self.factories.remove(name).map(|(_, factory)| factory)
    }

    /// Factory for `name`
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn TransformerFactory>> {
        self.factories.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for TransformerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformerRegistry")
            .field("names", &self.names())
            .finish()
    }
}
