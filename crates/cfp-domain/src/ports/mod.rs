//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the pool and external layers.
//!
//! ## Organization
//!
//! - **providers/** - Cache frontends and the factory that builds them
//! - **infrastructure/** - Deployment configuration access

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use infrastructure::DeploymentConfig;
pub use providers::{CacheFrontend, FrontendFactory};
