//! Backend Registry System
//!
//! Defines the auto-registration infrastructure for cache frontend backends.
//! Uses the `linkme` crate for compile-time registration of backends
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Backend Registration Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Backend defines:   #[linkme::distributed_slice(FRONTENDS)]  │
//! │                        static ENTRY: CacheFrontendEntry = ...   │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static CACHE_FRONTENDS: [..] = [..]  │
//! │                              ↓                                  │
//! │  3. Factory queries:   CACHE_FRONTENDS.iter()                   │
//! │                              ↓                                  │
//! │  4. Options select:    "backend = moka" → MokaFrontend          │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a Backend (in cfp-providers)
//!
//! ```ignore
//! use cfp_application::ports::registry::{CacheFrontendEntry, CACHE_FRONTENDS};
//!
//! #[linkme::distributed_slice(CACHE_FRONTENDS)]
//! static NULL_FRONTEND: CacheFrontendEntry = CacheFrontendEntry {
//!     name: "null",
//!     description: "No-op frontend",
//!     factory: create_null_frontend,
//! };
//! ```

pub mod frontend;

pub use frontend::{
    CACHE_FRONTENDS, CacheFrontendEntry, list_cache_frontends, resolve_cache_frontend,
};
