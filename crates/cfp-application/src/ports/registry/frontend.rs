//! Cache Frontend Registry
//!
//! Backends submit a [`CacheFrontendEntry`] to [`CACHE_FRONTENDS`] at
//! compile time; the factory looks them up by name at runtime.

use cfp_domain::error::{Error, Result};
use cfp_domain::ports::CacheFrontend;
use cfp_domain::value_objects::FrontendOptions;
use std::sync::Arc;

/// Registry entry for cache frontend backends
///
/// The factory receives the frontend's full effective options and picks
/// the ones it understands.
pub struct CacheFrontendEntry {
    /// Unique backend name (e.g., "moka", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a frontend instance
    pub factory: fn(&FrontendOptions) -> Result<Arc<dyn CacheFrontend>>,
}

// Auto-collection via linkme distributed slices - backends submit entries at compile time
#[linkme::distributed_slice]
pub static CACHE_FRONTENDS: [CacheFrontendEntry] = [..];

/// Resolve a backend by name and build a frontend from `options`
///
/// # Returns
/// * `Ok(Arc<dyn CacheFrontend>)` - Created frontend instance
/// * `Err(Error::Configuration)` - Backend not registered; the message lists
///   the available backends
pub fn resolve_cache_frontend(
    backend: &str,
    options: &FrontendOptions,
) -> Result<Arc<dyn CacheFrontend>> {
    if let Some(entry) = CACHE_FRONTENDS.iter().find(|entry| entry.name == backend) {
        return (entry.factory)(options);
    }

    let available: Vec<&str> = CACHE_FRONTENDS.iter().map(|e| e.name).collect();
    Err(Error::configuration(format!(
        "Unknown cache backend '{backend}'. Available backends: {available:?}"
    )))
}

/// List all registered cache frontend backends
///
/// Returns a list of (name, description) tuples. Useful for CLI help.
pub fn list_cache_frontends() -> Vec<(&'static str, &'static str)> {
    CACHE_FRONTENDS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
