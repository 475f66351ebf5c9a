//! `bool` transformer

use std::sync::Arc;

use bindery_application::registry::{TRANSFORMER_FACTORIES, TransformerEntry};
use bindery_domain::error::{Error, Result};
use bindery_domain::ports::{Embedder, Resolver, Transformer, TransformerBase};
use bindery_domain::tags::TagValues;
use bindery_domain::types::TypeDesc;
use bindery_domain::value::Value;

use super::check_destination;
use crate::constants::{BOOL_TRANSFORMER, FALSE_WORDS, TRUE_WORDS};

/// Parses flags from booleans, integers and words; nil becomes false
#[derive(Debug)]
pub struct BoolTransformer {
    base: TransformerBase,
}

impl BoolTransformer {
    pub fn create(
        config: &TagValues,
        dest: &TypeDesc,
        embedder: Option<Arc<dyn Embedder>>,
    ) -> Result<Arc<dyn Transformer>> {
        check_destination(BOOL_TRANSFORMER, dest, |d| matches!(d, TypeDesc::Bool))?;
        Ok(Arc::new(Self {
            base: TransformerBase::new(BOOL_TRANSFORMER, dest, config, embedder),
        }))
    }

    fn parse_word(word: &str) -> Option<bool> {
        let word = word.trim().to_ascii_lowercase();
        if TRUE_WORDS.contains(&word.as_str()) {
            Some(true)
        } else if FALSE_WORDS.contains(&word.as_str()) {
            Some(false)
        } else {
            None
        }
    }
}

impl Transformer for BoolTransformer {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn transform(&self, _resolver: &dyn Resolver, input: Value) -> Result<Value> {
        let parsed = match &input {
            Value::Null | Value::Ptr(None) => Some(false),
            Value::Bool(b) => Some(*b),
            Value::Int(i) => Some(*i != 0),
            Value::Uint(u) => Some(*u != 0),
            Value::String(s) => Self::parse_word(s),
            _ => None,
        };
        parsed
            .map(Value::Bool)
            .ok_or_else(|| Error::transformer(format!("cannot convert {input} to a bool")))
    }
}

#[linkme::distributed_slice(TRANSFORMER_FACTORIES)]
static BOOL_TRANSFORMER_ENTRY: TransformerEntry = TransformerEntry {
    name: BOOL_TRANSFORMER,
    description: "Parses flags from booleans, integers and words",
    constructor: BoolTransformer::create,
};
