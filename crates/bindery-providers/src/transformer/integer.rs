//! `int` transformer

use std::sync::Arc;

use bindery_application::registry::{TRANSFORMER_FACTORIES, TransformerEntry};
use bindery_domain::error::{Error, Result};
use bindery_domain::ports::{Embedder, Resolver, Transformer, TransformerBase};
use bindery_domain::tags::TagValues;
use bindery_domain::types::{NumberKind, TypeDesc};
use bindery_domain::value::Value;

use super::check_destination;
use crate::constants::INT_TRANSFORMER;

/// Parses integers from numbers and text; nil becomes zero
#[derive(Debug)]
pub struct IntTransformer {
    base: TransformerBase,
}

impl IntTransformer {
    pub fn create(
        config: &TagValues,
        dest: &TypeDesc,
        embedder: Option<Arc<dyn Embedder>>,
    ) -> Result<Arc<dyn Transformer>> {
        check_destination(INT_TRANSFORMER, dest, |d| {
            matches!(
                d,
                TypeDesc::Number(NumberKind::I32 | NumberKind::I64 | NumberKind::Isize)
            )
        })?;
        Ok(Arc::new(Self {
            base: TransformerBase::new(INT_TRANSFORMER, dest, config, embedder),
        }))
    }
}

impl Transformer for IntTransformer {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn transform(&self, _resolver: &dyn Resolver, input: Value) -> Result<Value> {
        let parsed = match &input {
            Value::Null | Value::Ptr(None) => Some(0),
            Value::Int(i) => Some(*i),
            Value::Uint(u) => i64::try_from(*u).ok(),
            Value::Float(x) => Some(x.trunc() as i64),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        parsed
            .map(Value::Int)
            .ok_or_else(|| Error::transformer(format!("cannot convert {input} to an integer")))
    }
}

#[linkme::distributed_slice(TRANSFORMER_FACTORIES)]
static INT_TRANSFORMER_ENTRY: TransformerEntry = TransformerEntry {
    name: INT_TRANSFORMER,
    description: "Parses integers from numbers and numeric text",
    constructor: IntTransformer::create,
};
