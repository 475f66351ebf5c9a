//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Annotation keys and reserved kinds are defined in `bindery_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "bindery.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "bindery";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "BINDERY";

/// Separator between nested keys in environment variables
/// (e.g., `BINDERY_LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "BINDERY_LOG";

/// Fallback file stem for log files
pub const DEFAULT_LOG_FILE_STEM: &str = "bindery";

// ============================================================================
// SNAPSHOT CONSTANTS
// ============================================================================

/// Default value cache snapshot file name
pub const DEFAULT_SNAPSHOT_FILENAME: &str = "bindery-cache.bin";

/// Suffix of the temporary file written before a snapshot is moved in place
pub const SNAPSHOT_TEMP_SUFFIX: &str = ".tmp";
