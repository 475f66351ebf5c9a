//! Shared test fixtures

// Force linkme registration of the built-in transformers
extern crate bindery_providers;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use bindery_domain::error::Result;
use bindery_domain::ports::{Locator, LocatorProvider};
use bindery_domain::record::State;
use bindery_domain::value::Value;

bindery_domain::record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Config {
        pub port: i64,
        pub name: String,
    }
}

bindery_domain::record! {
    #[derive(Debug, Default)]
    pub struct Source {
        pub settings: HashMap<String, Value>,
        pub config: Option<Config>,
        pub label: String,
    }
}

impl Source {
    pub fn with_setting(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.settings.insert(key.to_string(), value.into());
        self
    }

    pub fn with_config(mut self, port: i64, name: &str) -> Self {
        self.config = Some(Config {
            port,
            name: name.to_string(),
        });
        self
    }
}

/// Provider serving fixed values and counting lookups
pub struct CountingProvider {
    kind: &'static str,
    priority: i32,
    values: BTreeMap<String, Value>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl CountingProvider {
    pub fn new(kind: &'static str, priority: i32) -> Self {
        Self {
            kind,
            priority,
            values: BTreeMap::new(),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_value(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Sleep inside every lookup
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl LocatorProvider for CountingProvider {
    fn kind(&self) -> &str {
        self.kind
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn locate<'a>(&'a self, _state: State<'a>) -> Result<Box<dyn Locator + 'a>> {
        Ok(Box::new(CountingLocator { provider: self }))
    }
}

struct CountingLocator<'a> {
    provider: &'a CountingProvider,
}

impl Locator for CountingLocator<'_> {
    fn kind(&self) -> &str {
        self.provider.kind
    }

    fn value(&self, name: &str) -> Result<Option<Value>> {
        self.provider.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.provider.delay {
            std::thread::sleep(delay);
        }
        Ok(self.provider.values.get(name).cloned())
    }
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
