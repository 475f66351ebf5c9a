//! Configuration
//!
//! [`BinderyConfig`] is loaded by [`ConfigLoader`] from layered sources:
//! serialized defaults, then a TOML file, then `BINDERY_`-prefixed
//! environment variables.
//!
//! ```toml
//! [injector]
//! binding_tag = "bind"
//!
//! [[injector.providers]]
//! type = "state"
//! kind = "state"
//! priority = 0
//!
//! [[injector.providers]]
//! type = "map"
//! kind = "setting"
//! field = "settings"
//! priority = 1
//!
//! [cache]
//! shared = true
//! snapshot_path = "/var/lib/bindery/cache.bin"
//! ```

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{BinderyConfig, CacheConfig, InjectorConfig, LoggingConfig, ProviderConfig};
