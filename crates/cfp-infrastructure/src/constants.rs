//! Infrastructure constants

// ============================================================================
// Configuration
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cfp.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cfp";

/// Prefix of configuration environment variables
pub const CONFIG_ENV_PREFIX: &str = "CFP";

/// Separator between the prefix and each nesting level of an environment key
///
/// `CFP__CACHE__FRONTEND__PAGE__BACKEND` maps to `cache.frontend.page.backend`.
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// Logging
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_FILTER: &str = "CFP_LOG";

/// File name prefix used when no file stem can be derived
pub const LOG_FILE_PREFIX: &str = "cfp";
