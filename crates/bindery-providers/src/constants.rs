//! Provider constants

// ============================================================================
// Transformer names
// ============================================================================

/// Stringifying transformer
pub const STRING_TRANSFORMER: &str = "string";

/// Integer parsing transformer
pub const INT_TRANSFORMER: &str = "int";

/// Boolean parsing transformer
pub const BOOL_TRANSFORMER: &str = "bool";

// ============================================================================
// Boolean words
// ============================================================================

/// Text accepted as `true` (case-insensitive)
pub const TRUE_WORDS: &[&str] = &["true", "yes", "1", "on"];

/// Text accepted as `false` (case-insensitive); the empty string is false
pub const FALSE_WORDS: &[&str] = &["false", "no", "0", "off", ""];

// ============================================================================
// Path handling
// ============================================================================

/// Separator between segments of a state path
pub const PATH_SEPARATOR: char = '.';
