//! # Cache Frontend Pool
//!
//! A lazily-populated, ordered, memoized registry of named cache frontends.
//! Frontends are built from code-supplied default settings, replaced per
//! identifier by deployment configuration overrides. The `default`
//! frontend is always present and always first.
//!
//! ## Example
//!
//! ```ignore
//! use cfp::infrastructure::{ConfigLoader, build_frontend_pool};
//!
//! let pool = build_frontend_pool(&ConfigLoader::new());
//! let page_cache = pool.get("page")?;
//! page_cache.save("home", "<html>", &Default::default()).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Errors, value objects and port traits
//! - `application` - Frontend pool, factory and backend registry
//! - `infrastructure` - Configuration, logging and wiring
//! - `cli` - The `cfp` command line

// Force-link cfp-providers to ensure linkme registrations are included
extern crate cfp_providers;

/// Domain layer - errors, value objects and port traits
pub mod domain {
    pub use cfp_domain::*;
}

/// Application layer - frontend pool, factory and backend registry
pub mod application {
    pub use cfp_application::*;
}

/// Infrastructure layer - configuration, logging and wiring
pub mod infrastructure {
    pub use cfp_infrastructure::*;
}

pub mod cli;

pub use cfp_application::FrontendPool;
pub use cfp_domain::{Error, Result};
