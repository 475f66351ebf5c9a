//! # Domain Layer
//!
//! Core types shared by every bindery crate.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`value`] | Dynamic [`Value`] and shared [`Instance`] handles |
//! | [`types`] | Destination type descriptors |
//! | [`location`] | Binding source locations |
//! | [`tags`] | Field annotation parsing |
//! | [`record`] | Record introspection (fields, get/set, dotted-path state) |
//! | [`ports`] | Locator, transformer and embedder traits |
//! | [`constants`] | Reserved kinds and annotation keys |

pub mod constants;
pub mod error;
pub mod location;
pub mod ports;
pub mod record;
pub mod tags;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use location::Location;
pub use record::{FieldDescriptor, FieldValue, Interface, Record, RecordType, State};
pub use tags::TagValues;
pub use types::{NumberKind, TypeDesc, interface_identity};
pub use value::{Instance, Value};
