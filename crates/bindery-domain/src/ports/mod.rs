//! Port traits
//!
//! Seams between the injection engine and pluggable behaviour: value
//! sources (locators), post-coercion value mapping (transformers) and the
//! optional bundled-resource handle passed to transformer factories.

pub mod embedder;
pub mod locator;
pub mod transformer;

pub use embedder::{Embedder, StaticFiles};
pub use locator::{Locator, LocatorProvider, Resolver};
pub use transformer::{FnTransformerFactory, Transformer, TransformerBase, TransformerFactory};
