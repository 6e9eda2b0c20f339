//! Cache Frontend Port
//!
//! Port for named cache frontends. A frontend is built by a
//! [`FrontendFactory`] from its options and then shared for the lifetime
//! of the pool that owns it.
//!
//! ## Provider Pattern
//!
//! Backends register themselves in the application layer registry and the
//! factory resolves them by the `backend` option.

use crate::error::Result;
use crate::value_objects::{CleanMode, EntryOptions, FrontendOptions};
use async_trait::async_trait;
use std::sync::Arc;

/// Cache Frontend Port
///
/// Stores string payloads under entry ids, with optional tags and
/// lifetime per entry.
///
/// # Implementations
///
/// - **Moka**: In-memory cache with capacity and lifetime
/// - **Null**: No-op frontend for testing or disabling caching
///
/// # Example
///
/// ```ignore
/// use cfp_domain::{CacheFrontend, CleanMode, EntryOptions};
///
/// let options = EntryOptions::new().with_tag("catalog").with_lifetime_secs(300);
/// frontend.save("product:1", &json, &options).await?;
///
/// if let Some(json) = frontend.load("product:1").await? {
///     // cache hit
/// }
///
/// frontend.clean(CleanMode::MatchingTag(vec!["catalog".into()])).await?;
/// ```
#[async_trait]
pub trait CacheFrontend: Send + Sync + std::fmt::Debug {
    /// Check whether an entry exists and has not expired
    async fn test(&self, id: &str) -> Result<bool>;

    /// Load an entry's payload
    ///
    /// # Returns
    /// The payload if present, `None` if missing or expired
    async fn load(&self, id: &str) -> Result<Option<String>>;

    /// Save a payload under `id`, replacing any existing entry
    async fn save(&self, id: &str, data: &str, options: &EntryOptions) -> Result<()>;

    /// Remove an entry
    ///
    /// # Returns
    /// True if the entry existed
    async fn remove(&self, id: &str) -> Result<bool>;

    /// Remove the entries selected by `mode`
    async fn clean(&self, mode: CleanMode) -> Result<()>;

    /// Name of the backend this frontend was built from (e.g. "moka", "null")
    fn backend_name(&self) -> &str;
}

/// Builds frontend instances from their effective options
///
/// Called at most once per frontend identifier by the pool.
pub trait FrontendFactory: Send + Sync {
    /// Create a frontend from its options
    fn create(&self, options: &FrontendOptions) -> Result<Arc<dyn CacheFrontend>>;
}
