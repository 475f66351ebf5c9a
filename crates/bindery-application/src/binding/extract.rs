//! Binding extraction from field annotations

use std::sync::Arc;

use bindery_domain::constants::{KEY_CACHEABLE, KEY_DEFAULT, KEY_IN, KEY_KIND, KEY_REQUIRED};
use bindery_domain::error::{Error, Result};
use bindery_domain::location::Location;
use bindery_domain::ports::{Embedder, Transformer};
use bindery_domain::record::{FieldDescriptor, RecordType};
use bindery_domain::tags::{TagValues, parse_typed_literal};
use bindery_domain::types::TypeDesc;
use tracing::trace;

use super::Binding;
use crate::registry::TransformerRegistry;

/// Parses field annotations into [`Binding`]s
///
/// Fields without a binding annotation are skipped unless their declared
/// type is an interface slot, which is bound to `interface_kind` with the
/// interface identity as source path.
pub struct BindingExtractor<'a> {
    binding_tag: &'a str,
    transformer_tag: &'a str,
    interface_kind: &'a str,
    transformers: &'a TransformerRegistry,
    embedder: Option<&'a Arc<dyn Embedder>>,
}

impl<'a> BindingExtractor<'a> {
    pub fn new(
        binding_tag: &'a str,
        transformer_tag: &'a str,
        interface_kind: &'a str,
        transformers: &'a TransformerRegistry,
        embedder: Option<&'a Arc<dyn Embedder>>,
    ) -> Self {
        Self {
            binding_tag,
            transformer_tag,
            interface_kind,
            transformers,
            embedder,
        }
    }

    /// Bindings for every bound field of `record_type`, in declaration order
    pub fn extract(&self, record_type: &RecordType) -> Result<Vec<Binding>> {
        let mut bindings = Vec::new();
        for field in record_type.fields() {
            if let Some(binding) = self.field_binding(field)? {
                trace!(
                    record = record_type.name(),
                    path = binding.path(),
                    location = %binding.location(),
                    "Extracted binding"
                );
                bindings.push(binding);
            }
        }
        Ok(bindings)
    }

    fn field_binding(&self, field: &FieldDescriptor) -> Result<Option<Binding>> {
        let Some(raw) = field.tag(self.binding_tag) else {
            return Ok(self.interface_binding(field));
        };

        let transformer = self.transformer(field)?;
        let tag = TagValues::parse(raw);
        let location = Location::new(
            tag.get(KEY_KIND).unwrap_or_default(),
            tag.get(KEY_IN).unwrap_or_default(),
        );
        if location.is_empty() {
            return Err(Error::EmptyLocation {
                path: field.path().to_string(),
            });
        }

        let mut binding = Binding::new(field.path(), field.type_desc().clone(), location)
            .with_cacheable(tag.contains(KEY_CACHEABLE))
            .with_required(tag.contains(KEY_REQUIRED))
            .with_default(
                tag.get(KEY_DEFAULT)
                    .map(|raw| parse_typed_literal(raw, field.type_desc())),
            );
        if let Some((transformer, config)) = transformer {
            binding = binding.with_transformer(transformer, config);
        }
        Ok(Some(binding))
    }

    fn interface_binding(&self, field: &FieldDescriptor) -> Option<Binding> {
        let TypeDesc::Interface(identity) = field.type_desc() else {
            return None;
        };
        let location = Location::new(self.interface_kind, *identity);
        Some(Binding::new(field.path(), field.type_desc().clone(), location))
    }

    fn transformer(
        &self,
        field: &FieldDescriptor,
    ) -> Result<Option<(Arc<dyn Transformer>, TagValues)>> {
        let Some(raw) = field.tag(self.transformer_tag) else {
            return Ok(None);
        };
        let (name, config) = TagValues::parse(raw).name();
        let factory = self
            .transformers
            .lookup(&name)
            .ok_or_else(|| Error::UnknownTransformer {
                name: name.clone(),
                path: field.path().to_string(),
            })?;
        let transformer = factory
            .create(&config, field.type_desc(), self.embedder.cloned())
            .map_err(|e| Error::TransformerCreation {
                name,
                path: field.path().to_string(),
                source: Box::new(e),
            })?;
        Ok(Some((transformer, config)))
    }
}
