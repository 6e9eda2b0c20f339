//! Infrastructure Ports

/// Deployment configuration port
pub mod deployment;

pub use deployment::DeploymentConfig;
