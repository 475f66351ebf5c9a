//! # bindery - Provider Implementations
//!
//! Built-in locator providers and transformers. Each implements a port
//! defined in `bindery-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Locator | `LocatorProvider` | StructProvider, MapProvider, DirectProvider |
//! | Transformer | `TransformerFactory` | string, int, bool |
//!
//! Transformers register themselves into
//! [`TRANSFORMER_FACTORIES`](bindery_application::registry::TRANSFORMER_FACTORIES);
//! linking this crate is enough for
//! [`TransformerRegistry::with_builtins`](bindery_application::registry::TransformerRegistry::with_builtins)
//! to see them.
//!
//! ## Usage
//!
//! ```ignore
//! use bindery_providers::locator::{MapProvider, StructProvider};
//!
//! let injector = Injector::builder()
//!     .with_provider(Arc::new(StructProvider::new("state", "", 0)))
//!     .with_provider(Arc::new(MapProvider::new("setting", "settings", 1)))
//!     .build()?;
//! ```

pub use bindery_domain::error::{Error, Result};
pub use bindery_domain::ports::{Locator, LocatorProvider, Transformer, TransformerFactory};

/// Provider-specific constants
pub mod constants;

/// Locator provider implementations
pub mod locator;

/// Built-in transformers
pub mod transformer;

pub use locator::{DirectProvider, MapProvider, StructProvider};
pub use transformer::{BoolTransformer, IntTransformer, StringTransformer};
