//! Pool wiring
//!
//! Builds a [`FrontendPool`] over the layered configuration and the
//! registry-backed frontend factory.

use crate::config::{ConfigLoader, FigmentDeploymentConfig};
use cfp_application::{FrontendPool, RegistryFrontendFactory};
use cfp_domain::constants::{BACKEND_OPTION, DEFAULT_BACKEND, DEFAULT_FRONTEND_ID};
use cfp_domain::ports::DeploymentConfig;
use cfp_domain::value_objects::{FrontendOptions, FrontendSettings};
use std::sync::Arc;

/// Code-supplied settings: the default frontend on the default backend
pub fn default_frontend_settings() -> FrontendSettings {
    let mut options = FrontendOptions::new();
    options.insert(BACKEND_OPTION.to_string(), DEFAULT_BACKEND.to_string());

    let mut settings = FrontendSettings::new();
    settings.insert(DEFAULT_FRONTEND_ID.to_string(), options);
    settings
}

/// Build a pool reading its overrides from the loader's sources
///
/// Nothing is read or built until the pool is first used.
pub fn build_frontend_pool(loader: &ConfigLoader) -> FrontendPool {
    build_frontend_pool_with(
        Arc::new(FigmentDeploymentConfig::new(loader.clone())),
        default_frontend_settings(),
    )
}

/// Build a pool over any deployment configuration and default settings
pub fn build_frontend_pool_with(
    deployment_config: Arc<dyn DeploymentConfig>,
    settings: FrontendSettings,
) -> FrontendPool {
    FrontendPool::with_settings(
        deployment_config,
        Arc::new(RegistryFrontendFactory::new()),
        settings,
    )
}
