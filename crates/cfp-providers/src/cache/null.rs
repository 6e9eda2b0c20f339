//! Null cache frontend for testing
//!
//! A frontend implementation that doesn't store anything.
//! Useful for testing and disabling caching.

use async_trait::async_trait;
use cfp_application::ports::registry::{CACHE_FRONTENDS, CacheFrontendEntry};
use cfp_domain::error::Result;
use cfp_domain::ports::CacheFrontend;
use cfp_domain::value_objects::{CleanMode, EntryOptions, FrontendOptions};
use std::sync::Arc;

/// Null frontend that doesn't store anything
///
/// Every load is a miss and every save is accepted and dropped.
///
/// # Example
///
/// ```
/// use cfp_providers::cache::NullFrontend;
///
/// let frontend = NullFrontend::new();
/// // All operations succeed but nothing is cached
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullFrontend;

impl NullFrontend {
    /// Create a new null frontend
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheFrontend for NullFrontend {
    async fn test(&self, _id: &str) -> Result<bool> {
        Ok(false)
    }

    async fn load(&self, _id: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn save(&self, _id: &str, _data: &str, _options: &EntryOptions) -> Result<()> {
        Ok(())
    }

    async fn remove(&self, _id: &str) -> Result<bool> {
        Ok(false)
    }

    async fn clean(&self, _mode: CleanMode) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn create_null_frontend(_options: &FrontendOptions) -> Result<Arc<dyn CacheFrontend>> {
    let frontend: Arc<dyn CacheFrontend> = Arc::new(NullFrontend::new());
    Ok(frontend)
}

#[linkme::distributed_slice(CACHE_FRONTENDS)]
static NULL_FRONTEND: CacheFrontendEntry = CacheFrontendEntry {
    name: "null",
    description: "No-op frontend that stores nothing",
    factory: create_null_frontend,
};
