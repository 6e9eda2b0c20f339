//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`FrontendPool`] | Lazy, ordered, memoized registry of named frontends |
//! | [`RegistryFrontendFactory`] | Builds frontends from registered backends |
//! | [`PrefixedFrontend`] | Scopes a frontend's entries under an id prefix |

pub mod frontend_factory;
pub mod frontend_pool;
pub mod prefixed_frontend;

pub use frontend_factory::RegistryFrontendFactory;
pub use frontend_pool::{FrontendIter, FrontendPool};
pub use prefixed_frontend::PrefixedFrontend;
