//! Transformer ports

use crate::error::Result;
use crate::ports::embedder::Embedder;
use crate::ports::locator::Resolver;
use crate::tags::TagValues;
use crate::types::TypeDesc;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Post-coercion value mapping for one field
pub trait Transformer: Send + Sync {
    /// Registered transformer name
    fn name(&self) -> &str;

    /// Map a coerced value
    fn transform(&self, resolver: &dyn Resolver, input: Value) -> Result<Value>;
}

/// Builds transformers for a destination type and per-field configuration
///
/// Factories validate the destination type up front and fail instead of
/// returning a transformer that could never succeed.
pub trait TransformerFactory: Send + Sync {
    fn create(
        &self,
        config: &TagValues,
        dest: &TypeDesc,
        embedder: Option<Arc<dyn Embedder>>,
    ) -> Result<Arc<dyn Transformer>>;
}

/// Signature of closure-based transformer constructors
pub type TransformerConstructor = dyn Fn(&TagValues, &TypeDesc, Option<Arc<dyn Embedder>>) -> Result<Arc<dyn Transformer>>
    + Send
    + Sync;

/// [`TransformerFactory`] backed by a constructor function
#[derive(Clone)]
pub struct FnTransformerFactory {
    name: String,
    constructor: Arc<TransformerConstructor>,
}

impl FnTransformerFactory {
    pub fn new<N, F>(name: N, constructor: F) -> Self
    where
        N: Into<String>,
        F: Fn(&TagValues, &TypeDesc, Option<Arc<dyn Embedder>>) -> Result<Arc<dyn Transformer>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            constructor: Arc::new(constructor),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TransformerFactory for FnTransformerFactory {
    fn create(
        &self,
        config: &TagValues,
        dest: &TypeDesc,
        embedder: Option<Arc<dyn Embedder>>,
    ) -> Result<Arc<dyn Transformer>> {
        (self.constructor)(config, dest, embedder)
    }
}

impl fmt::Debug for FnTransformerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransformerFactory")
            .field("name", &self.name)
            .finish()
    }
}

/// State shared by most transformer implementations
#[derive(Clone)]
pub struct TransformerBase {
    name: String,
    dest: TypeDesc,
    config: TagValues,
    embedder: Option<Arc<dyn Embedder>>,
}

impl TransformerBase {
    pub fn new<N: Into<String>>(
        name: N,
        dest: &TypeDesc,
        config: &TagValues,
        embedder: Option<Arc<dyn Embedder>>,
    ) -> Self {
        Self {
            name: name.into(),
            dest: dest.clone(),
            config: config.clone(),
            embedder,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Destination type the transformer was built for
    pub fn dest(&self) -> &TypeDesc {
        &self.dest
    }

    /// Per-field configuration
    pub fn config(&self) -> &TagValues {
        &self.config
    }

    pub fn embedder(&self) -> Option<&Arc<dyn Embedder>> {
        self.embedder.as_ref()
    }
}

impl fmt::Debug for TransformerBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformerBase")
            .field("name", &self.name)
            .field("dest", &self.dest)
            .field("config", &self.config.to_string())
            .field("embedder", &self.embedder.is_some())
            .finish()
    }
}
