//! # Domain Layer
//!
//! Core types and boundary contracts of the Cache Frontend Pool.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`constants`] | Reserved identifiers and option names |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`ports`] | Traits implemented by providers and infrastructure |
//! | [`value_objects`] | Frontend options, settings and clean modes |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types
pub use error::{Error, Result};
pub use ports::{CacheFrontend, DeploymentConfig, FrontendFactory};
pub use value_objects::{
    CacheSegment, CleanMode, EntryOptions, FrontendOptions, FrontendSettings, parse_option_value,
};
