//! Injector bootstrap
//!
//! Builds an [`Injector`] and the optional shared [`ValueCache`] from a
//! [`BinderyConfig`].
//!
//! ```ignore
//! let config = ConfigLoader::new().with_config_path("bindery.toml").load()?;
//! let runtime = InjectorBootstrap::new(config)
//!     .with_provider(Arc::new(DirectProvider::new("interface", interfaces, 0)))
//!     .build()?;
//!
//! runtime.with_state::<Service>(&dependencies).inject(&mut service)?;
//! runtime.shutdown()?;
//! ```

use std::sync::Arc;

use bindery_application::binding::BindingSet;
use bindery_application::cache::ValueCache;
use bindery_application::context::BindingContext;
use bindery_application::injector::Injector;
use bindery_application::registry::TransformerRegistry;
use bindery_domain::error::Result;
use bindery_domain::ports::{Embedder, LocatorProvider};
use bindery_domain::record::Record;
use bindery_domain::value::Value;
use bindery_providers::locator::{DirectProvider, MapProvider, StructProvider};
use tracing::{debug, info};

use crate::config::{BinderyConfig, CacheConfig, ConfigLoader, ProviderConfig};
use crate::snapshot::{load_snapshot, save_snapshot};

/// Locator provider described by a configuration entry
pub fn provider_from_config(config: &ProviderConfig) -> Arc<dyn LocatorProvider> {
    match config {
        ProviderConfig::State {
            kind,
            root,
            priority,
        } => Arc::new(StructProvider::new(kind.as_str(), root.as_str(), *priority)),
        ProviderConfig::Map {
            kind,
            field,
            priority,
        } => Arc::new(MapProvider::new(kind.as_str(), field.as_str(), *priority)),
        ProviderConfig::Direct {
            kind,
            value,
            priority,
        } => Arc::new(DirectProvider::new(
            kind.as_str(),
            Value::from(value.clone()),
            *priority,
        )),
    }
}

/// Builder turning configuration into a ready injector
pub struct InjectorBootstrap {
    config: BinderyConfig,
    providers: Vec<Arc<dyn LocatorProvider>>,
    transformers: Option<Arc<TransformerRegistry>>,
    embedder: Option<Arc<dyn Embedder>>,
}

impl InjectorBootstrap {
    pub fn new(config: BinderyConfig) -> Self {
        Self {
            config,
            providers: Vec::new(),
            transformers: None,
            embedder: None,
        }
    }

    /// Load configuration with `loader` and bootstrap from it
    pub fn from_loader(loader: &ConfigLoader) -> Result<Self> {
        Ok(Self::new(loader.load()?))
    }

    /// Register a provider that cannot be described in configuration
    pub fn with_provider(mut self, provider: Arc<dyn LocatorProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Use an existing transformer registry
    pub fn with_transformers(mut self, registry: Arc<TransformerRegistry>) -> Self {
        self.transformers = Some(registry);
        self
    }

    /// Resources handed to transformer factories
    pub fn with_embedder(mut self, embedder: Arc<dyn Embedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Build the injector and restore the shared cache
    pub fn build(self) -> Result<Runtime> {
        let injector_config = &self.config.injector;
        let mut builder = Injector::builder()
            .with_binding_tag(injector_config.binding_tag.as_str())
            .with_transformer_tag(injector_config.transformer_tag.as_str())
            .with_interface_kind(injector_config.interface_kind.as_str())
            .with_builtin_transformers(injector_config.builtin_transformers)
            .with_providers(injector_config.providers.iter().map(provider_from_config))
            .with_providers(self.providers);
        if let Some(registry) = self.transformers {
            builder = builder.with_transformers(registry);
        }
        if let Some(embedder) = self.embedder {
            builder = builder.with_embedder(embedder);
        }
        let injector = Arc::new(builder.build()?);

        let cache_config = self.config.cache;
        let cache = cache_config.shared.then(|| Arc::new(ValueCache::new()));
        if let (Some(cache), Some(path), true) = (
            &cache,
            &cache_config.snapshot_path,
            cache_config.restore_on_start,
        ) {
            let restored = load_snapshot(cache, path)?;
            debug!(path = %path.display(), restored, "Value cache restore");
        }

        info!(
            shared_cache = cache.is_some(),
            kinds = ?injector.locators().kinds(),
            "Bindery bootstrapped"
        );
        Ok(Runtime {
            injector,
            cache,
            cache_config,
        })
    }
}

/// A bootstrapped injector with its shared cache
#[derive(Debug)]
pub struct Runtime {
    injector: Arc<Injector>,
    cache: Option<Arc<ValueCache>>,
    cache_config: CacheConfig,
}

impl Runtime {
    pub fn injector(&self) -> &Arc<Injector> {
        &self.injector
    }

    /// Shared cache, when configured
    pub fn cache(&self) -> Option<&Arc<ValueCache>> {
        self.cache.as_ref()
    }

    /// Open an injection session, attached to the shared cache if any
    pub fn with_state<'a, T: Record>(&'a self, state: &'a dyn Record) -> BindingContext<'a, T> {
        let context = self.injector.with_state::<T>(state);
        match &self.cache {
            Some(cache) => context.with_cache(Arc::clone(cache)),
            None => context,
        }
    }

    /// Build the binding set of `T` now, surfacing configuration errors early
    pub fn prepare<T: Record>(&self) -> Result<Arc<BindingSet>> {
        self.injector.binding_set::<T>()
    }

    /// Persist the shared cache when configured to
    pub fn shutdown(&self) -> Result<()> {
        if let (Some(cache), Some(path), true) = (
            &self.cache,
            &self.cache_config.snapshot_path,
            self.cache_config.save_on_shutdown,
        ) {
            save_snapshot(cache, path)?;
        }
        Ok(())
    }
}
