//! Main application configuration

use super::logging::LoggingConfig;
use cfp_domain::value_objects::CacheSegment;
use serde::{Deserialize, Serialize};

/// Application configuration
///
/// The `cache` member is what the pool reads as its deployment
/// configuration segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Cache frontend overrides
    #[serde(default)]
    pub cache: CacheSegment,
}
