//! Value cache
//!
//! Path-keyed store of resolved values with one lazily created mutex per
//! path. Sessions sharing a cache hold the per-path mutex while computing a
//! value, so a path is resolved at most once at a time per cache instance.
//!
//! Snapshots are a flat `path -> value` map encoded with bincode.

use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use bindery_domain::error::{Error, Result};
use bindery_domain::value::Value;
use dashmap::DashMap;
use tracing::debug;

/// Shared per-path lock handle
pub type PathLock = Arc<Mutex<()>>;

/// Process-local cache of resolved values
#[derive(Default)]
pub struct ValueCache {
    values: DashMap<String, Value>,
    locks: DashMap<String, PathLock>,
    // Writers hold it shared, snapshot/clear hold it exclusively
    snapshot: RwLock<()>,
}

impl ValueCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `path`
    pub fn get(&self, path: &str) -> Option<Value> {
        self.values.get(path).map(|entry| entry.value().clone())
    }

    /// Store `value` under `path`
    pub fn put<P: Into<String>>(&self, path: P, value: Value) {
        let _shared = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        self.values.insert(path.into(), value);
    }

    pub fn contains(&self, path: &str) -> bool {
        self.values.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Lock handle for `path`, created on first use
    pub fn lock(&self, path: &str) -> PathLock {
        if let Some(lock) = self.locks.get(path) {
            return Arc::clone(lock.value());
        }
        Arc::clone(self.locks.entry(path.to_string()).or_default().value())
    }

    /// Drop every entry and every per-path lock
    pub fn clear(&self) {
        let _exclusive = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        self.values.clear();
        self.locks.clear();
        debug!("Value cache cleared");
    }

    /// Point-in-time copy of all entries
    pub fn entries(&self) -> BTreeMap<String, Value> {
        let _exclusive = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        self.copy_entries()
    }

    fn copy_entries(&self) -> BTreeMap<String, Value> {
        self.values
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Encode a snapshot of the cache into `writer`
    ///
    /// Entries holding a shared [`Instance`](bindery_domain::Instance) are
    /// process-local and make the save fail.
    pub fn save<W: Write>(&self, writer: W) -> Result<()> {
        let _exclusive = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        let entries = self.copy_entries();
        if let Some(path) = entries
            .iter()
            .find(|(_, value)| holds_instance(value))
            .map(|(path, _)| path)
        {
            return Err(Error::persistence(format!(
                "cannot persist shared instance cached under: {path}"
            )));
        }
        bincode::serialize_into(writer, &entries)
            .map_err(|e| Error::persistence_with_source("failed to encode value cache", e))?;
        debug!(entries = entries.len(), "Value cache saved");
        Ok(())
    }

    /// Merge a snapshot read from `reader` into the cache
    ///
    /// An empty stream is an empty snapshot.
    pub fn load<R: Read>(&self, mut reader: R) -> Result<()> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        if bytes.is_empty() {
            return Ok(());
        }
        let entries: BTreeMap<String, Value> = bincode::deserialize(&bytes)
            .map_err(|e| Error::persistence_with_source("failed to decode value cache", e))?;

        let _exclusive = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        let count = entries.len();
        for (path, value) in entries {
            self.values.insert(path, value);
        }
        debug!(entries = count, "Value cache loaded");
        Ok(())
    }
}

fn holds_instance(value: &Value) -> bool {
    match value {
        Value::Instance(_) => true,
        Value::Ptr(Some(inner)) => holds_instance(inner),
        Value::List(items) => items.iter().any(holds_instance),
        Value::Map(entries) => entries.values().any(holds_instance),
        _ => false,
    }
}

impl std::fmt::Debug for ValueCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueCache")
            .field("entries", &self.values.len())
            .field("locks", &self.locks.len())
            .finish()
    }
}
