//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for bindery
///
/// Variants follow the failure classes of the injection pipeline:
/// configuration problems are reported while a binding set is built,
/// resolution, coercion and transform problems abort an `inject` call,
/// persistence problems come from cache snapshots.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No locator provider is registered for a binding kind
    #[error("failed to lookup binding provider for: {kind}, path: {path}")]
    UnknownKind {
        /// The kind that could not be found
        kind: String,
        /// Destination field path of the binding
        path: String,
    },

    /// A locator provider with the same kind is already registered
    #[error("kind: {kind} is already registered")]
    DuplicateKind {
        /// The duplicated kind
        kind: String,
    },

    /// No transformer factory is registered under the annotated name
    #[error("failed to lookup transformer: {name}, path: {path}")]
    UnknownTransformer {
        /// Transformer name from the annotation
        name: String,
        /// Destination field path
        path: String,
    },

    /// A transformer factory rejected the field
    #[error("failed to create transformer: {name}, path: {path}: {source}")]
    TransformerCreation {
        /// Transformer name from the annotation
        name: String,
        /// Destination field path
        path: String,
        /// Factory error
        #[source]
        source: Box<Error>,
    },

    /// An explicitly annotated field has neither kind nor source path
    #[error("binding location was empty for: {path}")]
    EmptyLocation {
        /// Destination field path
        path: String,
    },

    /// Locator construction or lookup failed
    #[error("failed to locate: {location}: {source}")]
    Locate {
        /// Display form of the binding location
        location: String,
        /// Locator error
        #[source]
        source: Box<Error>,
    },

    /// A required binding resolved to nothing
    #[error("required value not found: {location}")]
    RequiredValueMissing {
        /// Display form of the binding location
        location: String,
    },

    /// A value cannot be assigned to a destination type
    #[error("incompatible types: expected {expected} but got {actual}")]
    Incompatible {
        /// Destination type
        expected: String,
        /// Type of the offered value
        actual: String,
    },

    /// A sequence element failed to coerce
    #[error("error converting sequence element at index {index}: {source}")]
    SequenceElement {
        /// Offending element index
        index: usize,
        /// Element coercion error
        #[source]
        source: Box<Error>,
    },

    /// Coercion of a resolved value failed
    #[error("failed to adjust value: {location}, path: {path}: {source}")]
    Coercion {
        /// Display form of the binding location
        location: String,
        /// Destination field path
        path: String,
        /// Coercion error
        #[source]
        source: Box<Error>,
    },

    /// A transformer failed at injection time
    #[error("failed to transform value: {location}: {source}")]
    Transform {
        /// Display form of the binding location
        location: String,
        /// Transformer error
        #[source]
        source: Box<Error>,
    },

    /// Record field access error
    #[error("Access error: {path}: {message}")]
    Access {
        /// Field path that was accessed
        path: String,
        /// Description of the access error
        message: String,
    },

    /// Error raised by a locator implementation
    #[error("Locator error: {message}")]
    Locator {
        /// Description of the locator error
        message: String,
    },

    /// Error raised by a transformer implementation
    #[error("Transformer error: {message}")]
    Transformer {
        /// Description of the transformer error
        message: String,
    },

    /// Cache snapshot save/load error
    #[error("Persistence error: {message}")]
    Persistence {
        /// Description of the persistence error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unknown kind error
    pub fn unknown_kind<K: Into<String>, P: Into<String>>(kind: K, path: P) -> Self {
        Self::UnknownKind {
            kind: kind.into(),
            path: path.into(),
        }
    }

    /// Create a duplicate kind error
    pub fn duplicate_kind<K: Into<String>>(kind: K) -> Self {
        Self::DuplicateKind { kind: kind.into() }
    }
}

// Resolution error creation methods
impl Error {
    /// Create a locator error
    pub fn locator<S: Into<String>>(message: S) -> Self {
        Self::Locator {
            message: message.into(),
        }
    }

    /// Create a transformer error
    pub fn transformer<S: Into<String>>(message: S) -> Self {
        Self::Transformer {
            message: message.into(),
        }
    }

    /// Create a field access error
    pub fn access<P: Into<String>, S: Into<String>>(path: P, message: S) -> Self {
        Self::Access {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a type incompatibility error
    pub fn incompatible<E: ToString, A: ToString>(expected: E, actual: A) -> Self {
        Self::Incompatible {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Persistence error creation methods
impl Error {
    /// Create a persistence error
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Self::Persistence {
            message: message.into(),
            source: None,
        }
    }

    /// Create a persistence error with source
    pub fn persistence_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Persistence {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification helpers
impl Error {
    /// Whether the error was raised while building a binding set
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. }
                | Self::UnknownKind { .. }
                | Self::DuplicateKind { .. }
                | Self::UnknownTransformer { .. }
                | Self::TransformerCreation { .. }
                | Self::EmptyLocation { .. }
        )
    }

    /// Whether the error aborted an injection call
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            Self::Locate { .. }
                | Self::RequiredValueMissing { .. }
                | Self::Coercion { .. }
                | Self::Transform { .. }
                | Self::Access { .. }
        )
    }
}
