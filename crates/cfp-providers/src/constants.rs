//! Provider Constants
//!
//! Option names and defaults understood by the backends. Identifiers shared
//! with the pool live in `cfp_domain::constants`.

// ============================================================================
// MOKA BACKEND CONSTANTS
// ============================================================================

/// Option: maximum number of entries
pub const MAX_CAPACITY_OPTION: &str = "max_capacity";

/// Option: default entry lifetime in seconds, `0` disables expiry
pub const LIFETIME_OPTION: &str = "lifetime";

/// Option: maximum payload size of one entry in bytes
pub const MAX_ENTRY_SIZE_OPTION: &str = "max_entry_size";

/// Default maximum number of entries
pub const CACHE_DEFAULT_MAX_CAPACITY: u64 = 10_000;

/// Default entry lifetime in seconds (1 hour)
pub const CACHE_DEFAULT_LIFETIME_SECS: u64 = 3600;

/// Default maximum payload size of one entry in bytes (1MB)
pub const CACHE_DEFAULT_MAX_ENTRY_SIZE: usize = 1024 * 1024;
