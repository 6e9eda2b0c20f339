//! Domain Value Objects
//!
//! Immutable value objects describing how frontends are configured and
//! how entries are stored and cleaned.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`FrontendOptions`] | Ordered option-name to value mapping for one frontend |
//! | [`FrontendSettings`] | Ordered frontend id to options mapping |
//! | [`CacheSegment`] | The `cache` segment of deployment configuration |
//! | [`EntryOptions`] | Tags and lifetime applied when saving an entry |
//! | [`CleanMode`] | Which entries a clean operation removes |

/// Entry storage value objects
pub mod entry;
/// Frontend configuration value objects
pub mod frontend;

// Re-export commonly used value objects
pub use entry::{CleanMode, EntryOptions};
pub use frontend::{CacheSegment, FrontendOptions, FrontendSettings, parse_option_value};
