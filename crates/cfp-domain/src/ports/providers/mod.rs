//! Provider Ports

/// Cache frontend and factory ports
pub mod frontend;

pub use frontend::{CacheFrontend, FrontendFactory};
