//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns of the Cache Frontend Pool.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered configuration and the deployment configuration adapters |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extensions mapping foreign errors into domain errors |
//! | [`bootstrap`] | Wires configuration, factory and pool together |
//! | [`constants`] | File names, environment prefixes and logging defaults |

// Force-link cfp-providers so the linkme backend registrations are kept
extern crate cfp_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{build_frontend_pool, build_frontend_pool_with, default_frontend_settings};
pub use config::{
    AppConfig, ConfigLoader, FigmentDeploymentConfig, LoggingConfig, StaticDeploymentConfig,
};
pub use error_ext::ErrorContext;
