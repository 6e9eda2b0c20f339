//! Application Ports
//!
//! - **registry/** - Auto-registration system for cache frontend backends

/// Backend registry for dynamic backend discovery
pub mod registry;

pub use registry::{
    CACHE_FRONTENDS, CacheFrontendEntry, list_cache_frontends, resolve_cache_frontend,
};
