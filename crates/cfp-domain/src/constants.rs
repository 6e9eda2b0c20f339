//! Domain layer constants
//!
//! Identifiers and option names shared by the pool, the factory and the
//! backends. Infrastructure-specific constants remain in
//! `cfp_infrastructure::constants`.

// ============================================================================
// FRONTEND IDENTIFIERS
// ============================================================================

/// Identifier of the frontend that is always present in a pool
pub const DEFAULT_FRONTEND_ID: &str = "default";

// ============================================================================
// DEPLOYMENT CONFIGURATION KEYS
// ============================================================================

/// Deployment configuration segment holding cache settings
pub const CACHE_CONFIG_KEY: &str = "cache";

// ============================================================================
// FRONTEND OPTION NAMES
// ============================================================================

/// Option selecting the registered backend a frontend is built from
pub const BACKEND_OPTION: &str = "backend";

/// Option prefixing every entry id stored through a frontend
pub const ID_PREFIX_OPTION: &str = "id_prefix";

/// Backend used when a frontend's options do not name one
pub const DEFAULT_BACKEND: &str = "moka";
