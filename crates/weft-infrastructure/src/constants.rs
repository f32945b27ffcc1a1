//! Infrastructure constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "weft.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "weft";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WEFT";

/// Separator of nested keys in environment variables (`WEFT__LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING
// ============================================================================

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "WEFT_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "weft";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 7;
