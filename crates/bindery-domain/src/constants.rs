//! Domain constants

/// Default annotation key holding binding instructions
pub const DEFAULT_BINDING_TAG: &str = "bind";

/// Default annotation key holding transformer instructions
pub const DEFAULT_TRANSFORMER_TAG: &str = "xform";

/// Kind assumed when a binding names a source path but no kind
pub const STATE_KIND: &str = "state";

/// Kind used for auto-bound interface fields
pub const INTERFACE_KIND: &str = "interface";

/// Binding annotation key: source path
pub const KEY_IN: &str = "in";

/// Binding annotation key: locator kind
pub const KEY_KIND: &str = "kind";

/// Binding annotation flag: cache the resolved value
pub const KEY_CACHEABLE: &str = "cacheable";

/// Binding annotation flag: fail injection when no value is found
pub const KEY_REQUIRED: &str = "required";

/// Binding annotation key: literal used when no value is found
pub const KEY_DEFAULT: &str = "default";
