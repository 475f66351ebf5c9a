//! Binding context
//!
//! One [`BindingContext`] per injection session: it pairs the injector's
//! registries and memoized binding sets with a source state and a value
//! cache. The cache is private to the session unless the caller shares one
//! with [`BindingContext::with_cache`].

use std::marker::PhantomData;
use std::sync::{Arc, PoisonError};

use bindery_domain::error::{Error, Result};
use bindery_domain::location::Location;
use bindery_domain::ports::Resolver;
use bindery_domain::record::{Record, State};
use bindery_domain::value::Value;
use tracing::{debug, trace};

use crate::binding::Binding;
use crate::cache::ValueCache;
use crate::coercion::coerce;
use crate::injector::Injector;

/// Injection session for destination records of type `T`
pub struct BindingContext<'a, T: Record> {
    injector: &'a Injector,
    state: State<'a>,
    cache: Option<Arc<ValueCache>>,
    _target: PhantomData<fn(&mut T)>,
}

impl<'a, T: Record> BindingContext<'a, T> {
    pub(crate) fn new(injector: &'a Injector, state: State<'a>) -> Self {
        Self {
            injector,
            state,
            cache: Some(Arc::new(ValueCache::new())),
            _target: PhantomData,
        }
    }

    /// Use a cache shared with other sessions
    pub fn with_cache(mut self, cache: Arc<ValueCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Resolve every binding from its source, even cacheable ones
    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    /// Cache attached to this session
    pub fn cache(&self) -> Option<&Arc<ValueCache>> {
        self.cache.as_ref()
    }

    /// Source state of this session
    pub fn state(&self) -> State<'a> {
        self.state
    }

    /// Resolve and write every binding of `T` into `target`
    ///
    /// Groups are processed in ascending priority, bindings in declaration
    /// order. The first failure aborts the call; fields written before it
    /// keep their new values.
    pub fn inject(&self, target: &mut T) -> Result<()> {
        let bindings = self.injector.binding_set::<T>()?;
        for (index, group) in bindings.groups().iter().enumerate() {
            debug!(
                record = bindings.record_type().name(),
                group = index,
                priority = ?group.first().and_then(Binding::priority),
                bindings = group.len(),
                "Resolving binding group"
            );
            for binding in group {
                self.set_destination_value(binding, target)?;
            }
        }
        Ok(())
    }

    fn set_destination_value(&self, binding: &Binding, target: &mut T) -> Result<()> {
        match self.source_value(binding)? {
            Some(value) => target.set_field(binding.path(), value),
            None => {
                trace!(path = binding.path(), "No value found, field left unchanged");
                Ok(())
            }
        }
    }

    fn source_value(&self, binding: &Binding) -> Result<Option<Value>> {
        let cache = match &self.cache {
            Some(cache) if binding.is_cacheable() => cache,
            _ => return self.resolve(binding),
        };
        let path = binding.path();
        if let Some(value) = cache.get(path) {
            trace!(path, "Value cache hit");
            return Ok(Some(value));
        }

        let lock = cache.lock(path);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        // Another session may have stored it while we waited
        if let Some(value) = cache.get(path) {
            trace!(path, "Value cache hit after lock");
            return Ok(Some(value));
        }
        let resolved = self.resolve(binding)?;
        if let Some(value) = &resolved {
            cache.put(path, value.clone());
        }
        Ok(resolved)
    }

    fn resolve(&self, binding: &Binding) -> Result<Option<Value>> {
        let location = binding.location();
        let provider = binding.provider().ok_or_else(|| {
            Error::internal(format!("binding without provider: {}", binding.path()))
        })?;
        let located = provider
            .locate(self.state)
            .and_then(|locator| locator.value(&location.input))
            .map_err(|e| Error::Locate {
                location: location.to_string(),
                source: Box::new(e),
            })?;

        let Some(value) = located.or_else(|| binding.default_value().cloned()) else {
            if binding.is_required() {
                return Err(Error::RequiredValueMissing {
                    location: location.to_string(),
                });
            }
            return Ok(None);
        };

        let value = coerce(binding.dest(), value).map_err(|e| Error::Coercion {
            location: location.to_string(),
            path: binding.path().to_string(),
            source: Box::new(e),
        })?;

        let value = match binding.transformer() {
            Some(transformer) => {
                transformer
                    .transform(self, value)
                    .map_err(|e| Error::Transform {
                        location: location.to_string(),
                        source: Box::new(e),
                    })?
            }
            None => value,
        };
        trace!(path = binding.path(), location = %location, "Resolved binding");
        Ok(Some(value))
    }
}

impl<T: Record> Resolver for BindingContext<'_, T> {
    /// Look a location up directly, bypassing bindings and the cache
    fn value(&self, location: &Location) -> Result<Option<Value>> {
        let provider = self
            .injector
            .locators()
            .lookup(&location.kind)
            .ok_or_else(|| Error::unknown_kind(location.kind.clone(), location.input.clone()))?;
        let locator = provider.locate(self.state)?;
        locator.value(&location.input)
    }
}

impl<T: Record> std::fmt::Debug for BindingContext<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingContext")
            .field("target", &std::any::type_name::<T>())
            .field("cache", &self.cache)
            .finish()
    }
}
