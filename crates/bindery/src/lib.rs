//! # bindery
//!
//! Annotation-driven value binding: the fields of a destination record are
//! filled from pluggable value sources ("locators"), optionally
//! transformed and cached.
//!
//! ## Example
//!
//! ```ignore
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use bindery::{Injector, Interface, Value, record};
//! use bindery::providers::{MapProvider, StructProvider};
//!
//! record! {
//!     #[derive(Default)]
//!     pub struct Dependencies {
//!         pub settings: HashMap<String, Value>,
//!         pub interfaces: HashMap<String, Value>,
//!         pub config: Option<Config>,
//!     }
//! }
//!
//! record! {
//!     #[derive(Default)]
//!     pub struct Service {
//!         #[tag(bind = "kind=setting,in=debug")]
//!         pub debug: bool,
//!         #[tag(bind = "in=config.server_port")]
//!         pub server_port: i64,
//!         pub logger: Interface<dyn Logger>,
//!     }
//! }
//!
//! let injector = Injector::builder()
//!     .with_provider(Arc::new(StructProvider::new("state", "", 0)))
//!     .with_provider(Arc::new(MapProvider::new("setting", "settings", 1)))
//!     .with_provider(Arc::new(MapProvider::new("interface", "interfaces", 1)))
//!     .build()?;
//!
//! let mut service = Service::default();
//! injector.with_state::<Service>(&dependencies).inject(&mut service)?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - values, record introspection, ports and errors
//! - `application` - registries, binding extraction, coercion, cache, injector
//! - `providers` - state/map/direct locators and built-in transformers
//! - `infrastructure` - configuration, logging, snapshots, bootstrap

/// Domain layer - values, record introspection and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use bindery_domain::*;
}

/// Application layer - the injection engine
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use bindery_application::*;
}

/// Built-in locator providers and transformers
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use bindery_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use bindery_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the engine entry points
pub use application::{BindingContext, Injector, InjectorBuilder, ValueCache};
pub use infrastructure::{BinderyConfig, ConfigLoader, InjectorBootstrap, Runtime};
