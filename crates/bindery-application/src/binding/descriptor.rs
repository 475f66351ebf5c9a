//! Binding descriptor

use std::fmt;
use std::sync::Arc;

use bindery_domain::location::Location;
use bindery_domain::ports::{LocatorProvider, Transformer};
use bindery_domain::tags::TagValues;
use bindery_domain::types::TypeDesc;
use bindery_domain::value::Value;

/// Resolution plan for one destination field
///
/// Built once per destination type. The provider is attached during
/// grouping and never changes afterwards.
#[derive(Clone)]
pub struct Binding {
    path: &'static str,
    dest: TypeDesc,
    location: Location,
    provider: Option<Arc<dyn LocatorProvider>>,
    cacheable: bool,
    required: bool,
    default_value: Option<Value>,
    transformer: Option<Arc<dyn Transformer>>,
    transform_config: Option<TagValues>,
}

impl Binding {
    /// New binding without provider, flags or transformer
    pub fn new(path: &'static str, dest: TypeDesc, location: Location) -> Self {
        Self {
            path,
            dest,
            location,
            provider: None,
            cacheable: false,
            required: false,
            default_value: None,
            transformer: None,
            transform_config: None,
        }
    }

    pub fn with_cacheable(mut self, cacheable: bool) -> Self {
        self.cacheable = cacheable;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_default(mut self, value: Option<Value>) -> Self {
        self.default_value = value;
        self
    }

    /// Attach a transformer and the configuration it was built from
    pub fn with_transformer(mut self, transformer: Arc<dyn Transformer>, config: TagValues) -> Self {
        self.transformer = Some(transformer);
        self.transform_config = Some(config);
        self
    }

    pub(crate) fn set_provider(&mut self, provider: Arc<dyn LocatorProvider>) {
        self.provider = Some(provider);
    }

    /// Destination field path
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Declared type of the destination field
    pub fn dest(&self) -> &TypeDesc {
        &self.dest
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Provider assigned during grouping
    pub fn provider(&self) -> Option<&Arc<dyn LocatorProvider>> {
        self.provider.as_ref()
    }

    /// Priority of the assigned provider
    pub fn priority(&self) -> Option<i32> {
        self.provider.as_ref().map(|p| p.priority())
    }

    pub fn is_cacheable(&self) -> bool {
        self.cacheable
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn transformer(&self) -> Option<&Arc<dyn Transformer>> {
        self.transformer.as_ref()
    }

    /// Raw transformer configuration (name token removed)
    pub fn transform_config(&self) -> Option<&TagValues> {
        self.transform_config.as_ref()
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("path", &self.path)
            .field("dest", &self.dest)
            .field("location", &self.location)
            .field("priority", &self.priority())
            .field("cacheable", &self.cacheable)
            .field("required", &self.required)
            .field("default_value", &self.default_value)
            .field("transformer", &self.transformer.as_ref().map(|t| t.name().to_string()))
            .finish()
    }
}
