//! `string` transformer

use std::sync::Arc;

use bindery_application::registry::{TRANSFORMER_FACTORIES, TransformerEntry};
use bindery_domain::error::Result;
use bindery_domain::ports::{Embedder, Resolver, Transformer, TransformerBase};
use bindery_domain::tags::TagValues;
use bindery_domain::types::TypeDesc;
use bindery_domain::value::Value;

use super::check_destination;
use crate::constants::STRING_TRANSFORMER;

/// Renders any value as text; nil becomes the empty string
#[derive(Debug)]
pub struct StringTransformer {
    base: TransformerBase,
}

impl StringTransformer {
    pub fn create(
        config: &TagValues,
        dest: &TypeDesc,
        embedder: Option<Arc<dyn Embedder>>,
    ) -> Result<Arc<dyn Transformer>> {
        check_destination(STRING_TRANSFORMER, dest, |d| matches!(d, TypeDesc::String))?;
        Ok(Arc::new(Self {
            base: TransformerBase::new(STRING_TRANSFORMER, dest, config, embedder),
        }))
    }
}

impl Transformer for StringTransformer {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn transform(&self, _resolver: &dyn Resolver, input: Value) -> Result<Value> {
        Ok(match input {
            Value::Null | Value::Ptr(None) => Value::String(String::new()),
            Value::String(s) => Value::String(s),
            other => Value::String(other.to_string()),
        })
    }
}

#[linkme::distributed_slice(TRANSFORMER_FACTORIES)]
static STRING_TRANSFORMER_ENTRY: TransformerEntry = TransformerEntry {
    name: STRING_TRANSFORMER,
    description: "Renders values as text",
    constructor: StringTransformer::create,
};
