//! Registry-backed frontend factory

use crate::ports::registry::resolve_cache_frontend;
use crate::use_cases::prefixed_frontend::PrefixedFrontend;
use cfp_domain::constants::{BACKEND_OPTION, DEFAULT_BACKEND, ID_PREFIX_OPTION};
use cfp_domain::error::Result;
use cfp_domain::ports::{CacheFrontend, FrontendFactory};
use cfp_domain::value_objects::FrontendOptions;
use std::sync::Arc;
use tracing::debug;

/// Builds frontends by resolving the `backend` option in the registry
///
/// A non-empty `id_prefix` option wraps the built frontend in a
/// [`PrefixedFrontend`].
#[derive(Debug, Clone)]
pub struct RegistryFrontendFactory {
    default_backend: String,
}

impl RegistryFrontendFactory {
    /// Create a factory that falls back to the `moka` backend
    pub fn new() -> Self {
        Self::with_default_backend(DEFAULT_BACKEND)
    }

    /// Create a factory with a custom fallback backend
    pub fn with_default_backend<S: Into<String>>(backend: S) -> Self {
        Self {
            default_backend: backend.into(),
        }
    }

    /// Backend used when options do not name one
    pub fn default_backend(&self) -> &str {
        &self.default_backend
    }
}

impl Default for RegistryFrontendFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FrontendFactory for RegistryFrontendFactory {
    fn create(&self, options: &FrontendOptions) -> Result<Arc<dyn CacheFrontend>> {
        let backend = options
            .get(BACKEND_OPTION)
            .map_or(self.default_backend.as_str(), String::as_str);
        debug!(backend = backend, "Creating cache frontend");

        let frontend = resolve_cache_frontend(backend, options)?;
        match options.get(ID_PREFIX_OPTION) {
            Some(prefix) if !prefix.is_empty() => {
                let prefixed: Arc<dyn CacheFrontend> =
                    Arc::new(PrefixedFrontend::new(frontend, prefix.clone()));
                Ok(prefixed)
            }
            _ => Ok(frontend),
        }
    }
}
