//! Value cache configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shared value cache configuration
///
/// Without a shared cache every injection session caches privately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Create one cache shared by every session
    pub shared: bool,

    /// Snapshot file of the shared cache
    pub snapshot_path: Option<PathBuf>,

    /// Restore the snapshot when the injector is bootstrapped
    pub restore_on_start: bool,

    /// Write the snapshot on shutdown
    pub save_on_shutdown: bool,
}
