//! Injector configuration types

use bindery_domain::constants::{DEFAULT_BINDING_TAG, DEFAULT_TRANSFORMER_TAG, INTERFACE_KIND};
use serde::{Deserialize, Serialize};

/// Injector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectorConfig {
    /// Annotation key holding binding instructions
    pub binding_tag: String,

    /// Annotation key holding transformer instructions
    pub transformer_tag: String,

    /// Kind used for auto-bound interface fields
    pub interface_kind: String,

    /// Install the linked built-in transformers
    pub builtin_transformers: bool,

    /// Locator providers registered at startup
    pub providers: Vec<ProviderConfig>,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            binding_tag: DEFAULT_BINDING_TAG.to_string(),
            transformer_tag: DEFAULT_TRANSFORMER_TAG.to_string(),
            interface_kind: INTERFACE_KIND.to_string(),
            builtin_transformers: true,
            providers: Vec::new(),
        }
    }
}

/// A locator provider declared in configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    /// Dotted paths on the session state, below `root`
    State {
        kind: String,
        #[serde(default)]
        root: String,
        #[serde(default)]
        priority: i32,
    },
    /// Keys of a map field of the session state
    Map {
        kind: String,
        field: String,
        #[serde(default)]
        priority: i32,
    },
    /// A fixed value
    Direct {
        kind: String,
        value: serde_json::Value,
        #[serde(default)]
        priority: i32,
    },
}

impl ProviderConfig {
    /// Kind the provider is registered under
    pub fn kind(&self) -> &str {
        match self {
            Self::State { kind, .. } | Self::Map { kind, .. } | Self::Direct { kind, .. } => kind,
        }
    }

    pub fn priority(&self) -> i32 {
        match self {
            Self::State { priority, .. }
            | Self::Map { priority, .. }
            | Self::Direct { priority, .. } => *priority,
        }
    }
}
