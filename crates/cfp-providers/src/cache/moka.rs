//! Moka in-memory cache frontend
//!
//! High-performance, concurrent in-memory frontend using Moka.
//!
//! ## Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `max_capacity` | 10000 | Maximum number of entries |
//! | `lifetime` | 3600 | Default entry lifetime in seconds, `0` never expires |
//! | `max_entry_size` | 1048576 | Maximum payload size in bytes |
//!
//! ## Example
//!
//! ```ignore
//! use cfp_providers::cache::MokaFrontend;
//! use std::time::Duration;
//!
//! let frontend = MokaFrontend::with_config(1000, Some(Duration::from_secs(300)));
//! ```

use crate::constants::{
    CACHE_DEFAULT_LIFETIME_SECS, CACHE_DEFAULT_MAX_CAPACITY, CACHE_DEFAULT_MAX_ENTRY_SIZE,
    LIFETIME_OPTION, MAX_CAPACITY_OPTION, MAX_ENTRY_SIZE_OPTION,
};
use async_trait::async_trait;
use cfp_application::ports::registry::{CACHE_FRONTENDS, CacheFrontendEntry};
use cfp_domain::error::{Error, Result};
use cfp_domain::ports::CacheFrontend;
use cfp_domain::value_objects::{CleanMode, EntryOptions, FrontendOptions, parse_option_value};
use moka::Expiry;
use moka::future::Cache;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
struct StoredEntry {
    data: Arc<str>,
    tags: Arc<[String]>,
    lifetime: Option<Duration>,
}

/// Per-entry expiry: the entry's own lifetime, else the frontend default.
/// A zero lifetime never expires.
struct EntryExpiry {
    default_lifetime: Option<Duration>,
}

impl EntryExpiry {
    fn lifetime_of(&self, entry: &StoredEntry) -> Option<Duration> {
        entry
            .lifetime
            .or(self.default_lifetime)
            .filter(|lifetime| !lifetime.is_zero())
    }
}

impl Expiry<String, StoredEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        self.lifetime_of(value)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        self.lifetime_of(value)
    }
}

/// Moka-based in-memory cache frontend
///
/// Entries keep their tags so that tag-based cleaning can select them.
#[derive(Clone)]
pub struct MokaFrontend {
    cache: Cache<String, StoredEntry>,
    max_capacity: u64,
    default_lifetime: Option<Duration>,
    max_entry_size: usize,
}

impl Default for MokaFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaFrontend {
    /// Create a new Moka frontend with default settings
    pub fn new() -> Self {
        Self::with_config(
            CACHE_DEFAULT_MAX_CAPACITY,
            Some(Duration::from_secs(CACHE_DEFAULT_LIFETIME_SECS)),
        )
    }

    /// Create a new Moka frontend with custom capacity and default lifetime
    pub fn with_config(max_capacity: u64, default_lifetime: Option<Duration>) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(EntryExpiry { default_lifetime })
            .build();

        Self {
            cache,
            max_capacity,
            default_lifetime,
            max_entry_size: CACHE_DEFAULT_MAX_ENTRY_SIZE,
        }
    }

    /// Limit the payload size of a single entry
    pub fn with_max_entry_size(mut self, max_entry_size: usize) -> Self {
        self.max_entry_size = max_entry_size;
        self
    }

    /// Create a frontend from its pool options
    pub fn from_options(options: &FrontendOptions) -> Result<Self> {
        let max_capacity = parse_option_value::<u64>(options, MAX_CAPACITY_OPTION)?
            .unwrap_or(CACHE_DEFAULT_MAX_CAPACITY);
        let lifetime_secs = parse_option_value::<u64>(options, LIFETIME_OPTION)?
            .unwrap_or(CACHE_DEFAULT_LIFETIME_SECS);
        let max_entry_size = parse_option_value::<usize>(options, MAX_ENTRY_SIZE_OPTION)?
            .unwrap_or(CACHE_DEFAULT_MAX_ENTRY_SIZE);

        let default_lifetime = (lifetime_secs > 0).then(|| Duration::from_secs(lifetime_secs));
        Ok(Self::with_config(max_capacity, default_lifetime).with_max_entry_size(max_entry_size))
    }

    /// Maximum number of entries
    pub fn max_capacity(&self) -> u64 {
        self.max_capacity
    }

    /// Lifetime applied to entries saved without one
    pub fn default_lifetime(&self) -> Option<Duration> {
        self.default_lifetime
    }

    /// Maximum payload size of one entry in bytes
    pub fn max_entry_size(&self) -> usize {
        self.max_entry_size
    }

    /// Number of live entries
    pub async fn entry_count(&self) -> u64 {
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

#[async_trait]
impl CacheFrontend for MokaFrontend {
    async fn test(&self, id: &str) -> Result<bool> {
        Ok(self.cache.contains_key(id))
    }

    async fn load(&self, id: &str) -> Result<Option<String>> {
        Ok(self.cache.get(id).await.map(|entry| entry.data.to_string()))
    }

    async fn save(&self, id: &str, data: &str, options: &EntryOptions) -> Result<()> {
        if data.len() > self.max_entry_size {
            return Err(Error::cache(format!(
                "Cache entry '{}' size {} exceeds maximum size {}",
                id,
                data.len(),
                self.max_entry_size
            )));
        }

        let entry = StoredEntry {
            data: Arc::from(data),
            tags: options.tags.clone().into(),
            lifetime: options.lifetime,
        };
        self.cache.insert(id.to_string(), entry).await;
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<bool> {
        Ok(self.cache.remove(id).await.is_some())
    }

    async fn clean(&self, mode: CleanMode) -> Result<()> {
        if mode == CleanMode::All {
            self.cache.invalidate_all();
        } else {
            let doomed: Vec<Arc<String>> = self
                .cache
                .iter()
                .filter(|(_, entry)| mode.matches(&entry.tags))
                .map(|(id, _)| id)
                .collect();
            debug!(entries = doomed.len(), mode = ?mode, "Cleaning moka frontend");
            for id in doomed {
                self.cache.invalidate(id.as_str()).await;
            }
        }
        self.cache.run_pending_tasks().await;
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaFrontend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaFrontend")
            .field("max_capacity", &self.max_capacity)
            .field("default_lifetime", &self.default_lifetime)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn create_moka_frontend(options: &FrontendOptions) -> Result<Arc<dyn CacheFrontend>> {
    let frontend: Arc<dyn CacheFrontend> = Arc::new(MokaFrontend::from_options(options)?);
    Ok(frontend)
}

#[linkme::distributed_slice(CACHE_FRONTENDS)]
static MOKA_FRONTEND: CacheFrontendEntry = CacheFrontendEntry {
    name: "moka",
    description: "Moka high-performance in-memory cache",
    factory: create_moka_frontend,
};
