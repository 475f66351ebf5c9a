//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{CacheConfig, InjectorConfig, LoggingConfig};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BinderyConfig {
    /// Injector settings and declared providers
    #[serde(default)]
    pub injector: InjectorConfig,

    /// Shared value cache and its snapshot
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
