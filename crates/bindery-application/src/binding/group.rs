//! Priority grouping

use std::sync::Arc;

use bindery_domain::error::{Error, Result};
use bindery_domain::record::RecordType;

use super::Binding;
use crate::registry::LocatorRegistry;

/// Bindings of one destination type, grouped by ascending provider priority
///
/// Groups have strictly increasing priorities; bindings inside a group keep
/// declaration order.
#[derive(Debug)]
pub struct BindingSet {
    groups: Vec<Vec<Binding>>,
    record_type: RecordType,
}

impl BindingSet {
    pub fn new(groups: Vec<Vec<Binding>>, record_type: RecordType) -> Self {
        Self {
            groups,
            record_type,
        }
    }

    pub fn groups(&self) -> &[Vec<Binding>] {
        &self.groups
    }

    /// Layout of the destination type
    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    /// Bindings in resolution order
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.groups.iter().flatten()
    }

    /// Total number of bindings
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Attach providers and partition into same-priority groups
///
/// Fails with [`Error::UnknownKind`] naming the kind and field path when a
/// binding's kind has no registered provider.
pub fn group_by_priority(
    bindings: Vec<Binding>,
    registry: &LocatorRegistry,
) -> Result<Vec<Vec<Binding>>> {
    let mut resolved = Vec::with_capacity(bindings.len());
    for mut binding in bindings {
        let kind = &binding.location().kind;
        let provider = registry
            .lookup(kind)
            .ok_or_else(|| Error::unknown_kind(kind.clone(), binding.path()))?;
        let priority = provider.priority();
        binding.set_provider(Arc::clone(&provider));
        resolved.push((priority, binding));
    }

    // sort_by_key is stable
    resolved.sort_by_key(|(priority, _)| *priority);

    let mut groups: Vec<Vec<Binding>> = Vec::new();
    let mut current: Option<i32> = None;
    for (priority, binding) in resolved {
        match groups.last_mut() {
            Some(group) if current == Some(priority) => group.push(binding),
            _ => {
                current = Some(priority);
                groups.push(vec![binding]);
            }
        }
    }
    Ok(groups)
}
