//! Configuration types

mod app;
mod cache;
mod injector;
mod logging;

pub use app::BinderyConfig;
pub use cache::CacheConfig;
pub use injector::{InjectorConfig, ProviderConfig};
pub use logging::LoggingConfig;
