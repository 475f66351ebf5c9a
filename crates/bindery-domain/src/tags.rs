//! Field annotation parsing
//!
//! Annotations are `key=value` lists separated by `,` or `;`, e.g.
//! `kind=instance,in=bar` or `bool,strict=true`. A key without `=` is a flag
//! (empty value). A leading bare token can be read as a name (transformer
//! annotations).

use crate::types::TypeDesc;
use crate::value::Value;
use std::fmt;

/// Parsed annotation value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagValues {
    pairs: Vec<(String, String)>,
}

impl TagValues {
    /// Parse an annotation string
    pub fn parse(raw: &str) -> Self {
        let pairs = raw
            .split([',', ';'])
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| match item.split_once('=') {
                Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
                None => (item.to_string(), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// Pairs in declaration order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is present (flag or pair)
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Split off the leading bare token
    ///
    /// `bool,strict=true` yields `("bool", strict=true)`. When the first
    /// item is a `key=value` pair the name is empty and nothing is removed.
    pub fn name(&self) -> (String, TagValues) {
        let mut rest = self.pairs.clone();
        let is_bare = rest.first().is_some_and(|(_, v)| v.is_empty());
        if !is_bare {
            return (String::new(), Self { pairs: rest });
        }
        let (name, _) = rest.remove(0);
        (name, Self { pairs: rest })
    }
}

impl fmt::Display for TagValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if value.is_empty() {
                f.write_str(key)?;
            } else {
                write!(f, "{key}={value}")?;
            }
        }
        Ok(())
    }
}

/// Interpret an annotation literal: bool, then integer, then float, else string
pub fn parse_literal(raw: &str) -> Value {
    let raw = raw.trim();
    if let Ok(b) = raw.parse::<bool>() {
        return Value::Bool(b);
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Int(i);
    }
    if let Ok(x) = raw.parse::<f64>() {
        return Value::Float(x);
    }
    Value::String(raw.to_string())
}

/// Interpret an annotation literal for a destination type
///
/// Text destinations keep the literal verbatim, so `02134` stays `"02134"`.
/// Booleans and numbers parse as the destination kind; a literal that does
/// not parse falls back to [`parse_literal`] and is left to coercion.
pub fn parse_typed_literal(raw: &str, dest: &TypeDesc) -> Value {
    let trimmed = raw.trim();
    match dest {
        TypeDesc::Ptr(inner) => parse_typed_literal(raw, inner),
        TypeDesc::String => Value::String(raw.to_string()),
        TypeDesc::Bool => trimmed
            .parse::<bool>()
            .map_or_else(|_| parse_literal(trimmed), Value::Bool),
        TypeDesc::Number(kind) if kind.is_float() => trimmed
            .parse::<f64>()
            .map_or_else(|_| parse_literal(trimmed), Value::Float),
        TypeDesc::Number(kind) if kind.is_unsigned() => trimmed
            .parse::<u64>()
            .map_or_else(|_| parse_literal(trimmed), Value::Uint),
        TypeDesc::Number(_) => trimmed
            .parse::<i64>()
            .map_or_else(|_| parse_literal(trimmed), Value::Int),
        _ => parse_literal(trimmed),
    }
}
