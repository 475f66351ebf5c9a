//! # Application Layer
//!
//! The binding resolution and injection engine.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | Locator and transformer registries |
//! | [`binding`] | Binding extraction and priority grouping |
//! | [`coercion`] | Value to destination type coercion |
//! | [`cache`] | Path-keyed value cache with snapshots |
//! | [`context`] | Injection sessions |
//! | [`injector`] | Injector and its builder |
//!
//! ## Resolution flow
//!
//! ```text
//! T::record_type() → BindingExtractor → group_by_priority → BindingSet (memoized per type)
//!
//! for each group, for each binding:
//!   cache? ─hit─▶ write
//!     │miss (per-path lock)
//!   LocatorProvider::locate(state) → Locator::value(in) → default? → required?
//!     → coerce → transform → cache → Record::set_field
//! ```

pub mod binding;
pub mod cache;
pub mod coercion;
pub mod context;
pub mod injector;
pub mod registry;

pub use binding::{Binding, BindingExtractor, BindingSet};
pub use cache::ValueCache;
pub use context::BindingContext;
pub use injector::{Injector, InjectorBuilder};
pub use registry::{LocatorRegistry, TransformerRegistry};
