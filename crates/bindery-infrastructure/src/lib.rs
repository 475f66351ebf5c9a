//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the injection engine.
//!
//! ### Configuration & Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, environment) |
//! | [`bootstrap`] | Injector and shared cache from configuration |
//! | [`constants`] | Centralized infrastructure constants |
//!
//! ### Persistence
//! | Module | Description |
//! |--------|-------------|
//! | [`snapshot`] | Value cache snapshot files |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod snapshot;

pub use bootstrap::{InjectorBootstrap, Runtime};
pub use config::{BinderyConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
pub use snapshot::{load_snapshot, save_snapshot};
