//! Injector
//!
//! Owns the locator and transformer registries, annotation settings and the
//! per-type binding set memo. Build one with [`Injector::builder`], then open
//! a session per source state with [`Injector::with_state`].
//!
//! ```ignore
//! let injector = Injector::builder()
//!     .with_provider(Arc::new(StructProvider::new("state", "", 0)))
//!     .with_provider(Arc::new(MapProvider::new("setting", "settings", 1)))
//!     .build()?;
//!
//! let mut service = Service::default();
//! injector.with_state::<Service>(&dependencies).inject(&mut service)?;
//! ```

use std::any::TypeId;
use std::sync::Arc;

use bindery_domain::constants::{DEFAULT_BINDING_TAG, DEFAULT_TRANSFORMER_TAG, INTERFACE_KIND};
use bindery_domain::error::Result;
use bindery_domain::ports::{Embedder, LocatorProvider};
use bindery_domain::record::{Record, RecordType, State};
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use tracing::{debug, info};

use crate::binding::{BindingExtractor, BindingSet, group_by_priority};
use crate::context::BindingContext;
use crate::registry::{LocatorRegistry, TransformerRegistry};

type BindingSetCell = Arc<OnceCell<Arc<BindingSet>>>;

/// Binding resolution engine
pub struct Injector {
    locators: Arc<LocatorRegistry>,
    transformers: Arc<TransformerRegistry>,
    binding_tag: String,
    transformer_tag: String,
    interface_kind: String,
    embedder: Option<Arc<dyn Embedder>>,
    binding_sets: DashMap<TypeId, BindingSetCell>,
}

impl Injector {
    /// Injector with default settings and empty locator registry
    pub fn new() -> Self {
        Self::from_parts(InjectorBuilder::default(), Arc::new(LocatorRegistry::new()))
    }

    pub fn builder() -> InjectorBuilder {
        InjectorBuilder::default()
    }

    fn from_parts(builder: InjectorBuilder, locators: Arc<LocatorRegistry>) -> Self {
        let transformers = builder
            .transformers
            .unwrap_or_else(|| Arc::new(TransformerRegistry::new()));
        if builder.builtin_transformers {
            transformers.install_builtins();
        }
        Self {
            locators,
            transformers,
            binding_tag: builder.binding_tag,
            transformer_tag: builder.transformer_tag,
            interface_kind: builder.interface_kind,
            embedder: builder.embedder,
            binding_sets: DashMap::new(),
        }
    }

    /// Locator registry
    pub fn locators(&self) -> &Arc<LocatorRegistry> {
        &self.locators
    }

    /// Transformer registry
    pub fn transformers(&self) -> &Arc<TransformerRegistry> {
        &self.transformers
    }

    pub fn binding_tag(&self) -> &str {
        &self.binding_tag
    }

    pub fn transformer_tag(&self) -> &str {
        &self.transformer_tag
    }

    pub fn interface_kind(&self) -> &str {
        &self.interface_kind
    }

    /// Register an additional locator provider
    pub fn register(&self, provider: Arc<dyn LocatorProvider>) -> Result<()> {
        self.locators.register(provider)
    }

    /// Open an injection session for `T` against `state`
    pub fn with_state<'a, T: Record>(&'a self, state: &'a dyn Record) -> BindingContext<'a, T> {
        BindingContext::new(self, State::new(state))
    }

    /// Binding set of `T`, built on first use
    ///
    /// Construction errors are not memoized; a later call retries.
    pub fn binding_set<T: Record>(&self) -> Result<Arc<BindingSet>> {
        let cell = Arc::clone(
            self.binding_sets
                .entry(TypeId::of::<T>())
                .or_default()
                .value(),
        );
        cell.get_or_try_init(|| self.build_binding_set(T::record_type()).map(Arc::new))
            .map(Arc::clone)
    }

    fn build_binding_set(&self, record_type: RecordType) -> Result<BindingSet> {
        let extractor = BindingExtractor::new(
            &self.binding_tag,
            &self.transformer_tag,
            &self.interface_kind,
            &self.transformers,
            self.embedder.as_ref(),
        );
        let bindings = extractor.extract(&record_type)?;
        let groups = group_by_priority(bindings, &self.locators)?;
        let set = BindingSet::new(groups, record_type);
        debug!(
            record = set.record_type().name(),
            bindings = set.len(),
            groups = set.groups().len(),
            "Built binding set"
        );
        Ok(set)
    }
}

impl Default for Injector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Injector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Injector")
            .field("locators", &self.locators)
            .field("transformers", &self.transformers)
            .field("binding_tag", &self.binding_tag)
            .field("transformer_tag", &self.transformer_tag)
            .field("interface_kind", &self.interface_kind)
            .field("embedder", &self.embedder.is_some())
            .field("binding_sets", &self.binding_sets.len())
            .finish()
    }
}

/// Builder for [`Injector`]
pub struct InjectorBuilder {
    locators: Option<Arc<LocatorRegistry>>,
    providers: Vec<Arc<dyn LocatorProvider>>,
    transformers: Option<Arc<TransformerRegistry>>,
    builtin_transformers: bool,
    binding_tag: String,
    transformer_tag: String,
    interface_kind: String,
    embedder: Option<Arc<dyn Embedder>>,
}

impl Default for InjectorBuilder {
    fn default() -> Self {
        Self {
            locators: None,
            providers: Vec::new(),
            transformers: None,
            builtin_transformers: true,
            binding_tag: DEFAULT_BINDING_TAG.to_string(),
            transformer_tag: DEFAULT_TRANSFORMER_TAG.to_string(),
            interface_kind: INTERFACE_KIND.to_string(),
            embedder: None,
        }
    }
}

impl InjectorBuilder {
    /// Use an existing locator registry
    pub fn with_locators(mut self, registry: Arc<LocatorRegistry>) -> Self {
        self.locators = Some(registry);
        self
    }

    /// Register a locator provider at build time
    pub fn with_provider(mut self, provider: Arc<dyn LocatorProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Register several locator providers at build time
    pub fn with_providers<I>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn LocatorProvider>>,
    {
        self.providers.extend(providers);
        self
    }

    /// Use an existing transformer registry
    pub fn with_transformers(mut self, registry: Arc<TransformerRegistry>) -> Self {
        self.transformers = Some(registry);
        self
    }

    /// Whether linked built-in transformers are installed (default: yes)
    pub fn with_builtin_transformers(mut self, enabled: bool) -> Self {
        self.builtin_transformers = enabled;
        self
    }

    /// Annotation key holding binding instructions
    pub fn with_binding_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.binding_tag = tag.into();
        self
    }

    /// Annotation key holding transformer instructions
    pub fn with_transformer_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.transformer_tag = tag.into();
        self
    }

    /// Kind used for auto-bound interface fields
    pub fn with_interface_kind<S: Into<String>>(mut self, kind: S) -> Self {
        self.interface_kind = kind.into();
        self
    }

    /// Resources handed to transformer factories
    pub fn with_embedder(mut self, embedder: Arc<dyn Embedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Build the injector
    ///
    /// Fails with a duplicate kind error when two providers share a kind.
    pub fn build(mut self) -> Result<Injector> {
        let locators = self
            .locators
            .take()
            .unwrap_or_else(|| Arc::new(LocatorRegistry::new()));
        for provider in std::mem::take(&mut self.providers) {
            locators.register(provider)?;
        }
        let injector = Injector::from_parts(self, locators);
        info!(
            kinds = ?injector.locators.kinds(),
            transformers = ?injector.transformers.names(),
            "Injector ready"
        );
        Ok(injector)
    }
}
