//! Bindings
//!
//! A [`Binding`] is the compiled resolution plan for one destination field.
//! [`BindingExtractor`] turns a record's field annotations into bindings and
//! [`group_by_priority`] orders them into a [`BindingSet`].
//!
//! ```text
//! RecordType ──▶ BindingExtractor ──▶ Vec<Binding> ──▶ group_by_priority ──▶ BindingSet
//!                    │                                       │
//!            TransformerRegistry                      LocatorRegistry
//! ```

mod descriptor;
mod extract;
mod group;

pub use descriptor::Binding;
pub use extract::BindingExtractor;
pub use group::{BindingSet, group_by_priority};
