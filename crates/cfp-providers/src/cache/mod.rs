//! Cache Frontend Implementations
//!
//! ## Available Backends
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | [`NullFrontend`] | Testing | No-op stub for testing |
//! | [`MokaFrontend`] | Local | In-memory cache (high performance) |
//!
//! ## Backend Selection Guide
//!
//! - **Development/Testing**: Use `null` to disable caching
//! - **Single Instance**: Use `moka` for high performance

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;

// Re-export for convenience
#[cfg(feature = "cache-moka")]
pub use moka::MokaFrontend;
pub use null::NullFrontend;

// Re-export domain types used by cache frontends
pub use cfp_domain::value_objects::{CleanMode, EntryOptions};
