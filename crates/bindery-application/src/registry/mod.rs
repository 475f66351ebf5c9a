//! Registry System
//!
//! Named lookups the injector resolves bindings against.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Registration Flow                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  Locators:     LocatorRegistry::register(provider)              │
//! │                  kind ──▶ Arc<dyn LocatorProvider>              │
//! │                                                                 │
//! │  Transformers: #[linkme::distributed_slice(TRANSFORMER_FACTORIES)]
//! │                static ENTRY: TransformerEntry = ...             │
//! │                              ↓                                  │
//! │                TransformerRegistry::with_builtins()             │
//! │                  name ──▶ Arc<dyn TransformerFactory>           │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a built-in transformer (in bindery-providers)
//!
//! ```ignore
//! use bindery_application::registry::{TransformerEntry, TRANSFORMER_FACTORIES};
//!
//! #[linkme::distributed_slice(TRANSFORMER_FACTORIES)]
//! static BOOL_TRANSFORMER: TransformerEntry = TransformerEntry {
//!     name: "bool",
//!     description: "Parses textual and numeric flags into booleans",
//!     constructor: BoolTransformer::create,
//! };
//! ```

pub mod locator;
pub mod transformer;

pub use locator::LocatorRegistry;
pub use transformer::{
    TRANSFORMER_FACTORIES, TransformerEntry, TransformerRegistry, list_transformers,
};
