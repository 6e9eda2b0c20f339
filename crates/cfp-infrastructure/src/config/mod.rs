//! Configuration
//!
//! Layered configuration: built-in defaults, then a TOML file, then
//! `CFP__`-prefixed environment variables.
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [cache.frontend.default]
//! backend = "moka"
//! max_capacity = "5000"
//!
//! [cache.frontend.page]
//! backend = "null"
//! ```

pub mod deployment;
pub mod loader;
pub mod types;

pub use deployment::{FigmentDeploymentConfig, StaticDeploymentConfig};
pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig};
