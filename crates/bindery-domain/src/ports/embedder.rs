//! Bundled resource handle

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Read-only virtual file set handed to transformer factories
pub trait Embedder: Send + Sync {
    /// File contents, `None` when the file is not bundled
    fn open(&self, path: &str) -> Option<&[u8]>;

    /// Bundled file paths
    fn files(&self) -> Vec<&str>;

    /// File contents as UTF-8
    fn read_to_string(&self, path: &str) -> Result<String> {
        let bytes = self
            .open(path)
            .ok_or_else(|| Error::access(path, "embedded file not found"))?;
        String::from_utf8(bytes.to_vec()).map_err(|e| Error::access(path, e.to_string()))
    }
}

/// In-memory [`Embedder`]
#[derive(Debug, Clone, Default)]
pub struct StaticFiles {
    files: BTreeMap<String, Vec<u8>>,
}

impl StaticFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file
    pub fn with_file<P: Into<String>, B: Into<Vec<u8>>>(mut self, path: P, contents: B) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

impl Embedder for StaticFiles {
    fn open(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    fn files(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }
}
