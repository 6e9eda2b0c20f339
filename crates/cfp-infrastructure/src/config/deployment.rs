//! Deployment configuration adapters
//!
//! Implementations of the `DeploymentConfig` port the frontend pool reads
//! its `cache` segment from.

use crate::config::ConfigLoader;
use cfp_domain::error::{Error, Result};
use cfp_domain::ports::DeploymentConfig;
use serde_json::{Map, Value};
use tracing::debug;

/// Deployment configuration over the loader's layered sources
///
/// Segments come from [`ConfigLoader::document`], so frontend tables keep
/// their declaration order and environment overrides arrive as the exact
/// strings they were set to. Every call reads the sources again; the pool
/// reads once and keeps the result.
#[derive(Debug, Clone)]
pub struct FigmentDeploymentConfig {
    loader: ConfigLoader,
}

impl FigmentDeploymentConfig {
    /// Create a deployment configuration over the loader's sources
    pub fn new(loader: ConfigLoader) -> Self {
        Self { loader }
    }

    /// The loader whose sources are read
    pub fn loader(&self) -> &ConfigLoader {
        &self.loader
    }
}

impl DeploymentConfig for FigmentDeploymentConfig {
    /// Look up `key`, a dotted path such as `cache` or `cache.frontend.page`
    fn get_segment(&self, key: &str) -> Result<Option<Value>> {
        let document = self.loader.document()?;
        let segment = key
            .split('.')
            .try_fold(&document, |value, segment| value.get(segment));

        if segment.is_none() {
            debug!(segment = key, "Configuration segment not present");
        }
        Ok(segment.cloned())
    }
}

/// Deployment configuration over a fixed JSON object
///
/// # Example
///
/// ```
/// use cfp_domain::ports::DeploymentConfig;
/// use cfp_infrastructure::StaticDeploymentConfig;
/// use serde_json::json;
///
/// let config = StaticDeploymentConfig::new()
///     .with_segment("cache", json!({ "frontend": { "page": { "backend": "null" } } }));
///
/// assert!(config.get_segment("cache").unwrap().is_some());
/// assert!(config.get_segment("logging").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticDeploymentConfig {
    segments: Map<String, Value>,
}

impl StaticDeploymentConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from a JSON object of segments
    ///
    /// # Errors
    /// Fails when `value` is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(segments) => Ok(Self { segments }),
            other => Err(Error::configuration(format!(
                "Deployment configuration must be an object, got {other}"
            ))),
        }
    }

    /// Add or replace one segment
    pub fn with_segment<S: Into<String>>(mut self, key: S, value: Value) -> Self {
        self.segments.insert(key.into(), value);
        self
    }
}

impl DeploymentConfig for StaticDeploymentConfig {
    fn get_segment(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.segments.get(key).cloned())
    }
}
