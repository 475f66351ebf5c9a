//! Binding source locations

use crate::constants::STATE_KIND;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a bound value comes from
///
/// `kind` selects the locator provider, `input` is the path or key inside
/// that provider's source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Locator provider kind
    pub kind: String,
    /// Path or key within the source
    #[serde(rename = "in")]
    pub input: String,
}

impl Location {
    /// Create a location, applying the default kind rule
    pub fn new<K: Into<String>, I: Into<String>>(kind: K, input: I) -> Self {
        let mut location = Self {
            kind: kind.into(),
            input: input.into(),
        };
        location.apply_default_kind();
        location
    }

    /// A non-empty source path with no kind belongs to the state provider
    pub fn apply_default_kind(&mut self) {
        if self.kind.is_empty() && !self.input.is_empty() {
            self.kind = STATE_KIND.to_string();
        }
    }

    /// Neither kind nor source path is set
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty() && self.input.is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kind={},in={}", self.kind, self.input)
    }
}
