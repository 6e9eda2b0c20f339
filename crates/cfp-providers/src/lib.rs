//! # Cache Frontend Pool - Backend Implementations
//!
//! Each backend implements the `CacheFrontend` port defined in `cfp-domain`
//! and registers itself in the `cfp-application` backend registry, where
//! the frontend factory finds it by the `backend` option.
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | [`cache::MokaFrontend`] | Local | In-memory cache with capacity, lifetime and tags |
//! | [`cache::NullFrontend`] | Testing | Stores nothing |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! cfp-providers = { version = "0.1", default-features = false }
//! ```
//!
//! Binaries must reference this crate (`extern crate cfp_providers;`) so
//! the linker keeps the registrations.

// Re-export cfp-domain types commonly used with backends
pub use cfp_domain::error::{Error, Result};
pub use cfp_domain::ports::CacheFrontend;

/// Backend-specific constants
pub mod constants;

/// Cache frontend backends
pub mod cache;
