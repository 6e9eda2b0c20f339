//! Deployment Configuration Port
//!
//! Read-only access to environment-level configuration, organised in
//! named segments (for example `cache`).

use crate::error::Result;

/// Deployment configuration source
///
/// Implementations read their backing store when a segment is requested.
/// Consumers that need a segment repeatedly are expected to cache it.
pub trait DeploymentConfig: Send + Sync {
    /// Get a configuration segment by key
    ///
    /// # Returns
    /// The segment as a JSON value, or `None` when the segment is absent
    fn get_segment(&self, key: &str) -> Result<Option<serde_json::Value>>;
}
