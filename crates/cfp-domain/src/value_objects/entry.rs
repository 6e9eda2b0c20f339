//! Entry storage value objects

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options applied when saving an entry through a frontend
///
/// # Example
///
/// ```
/// use cfp_domain::EntryOptions;
/// use std::time::Duration;
///
/// let options = EntryOptions::new()
///     .with_tag("catalog")
///     .with_lifetime(Duration::from_secs(600));
///
/// assert_eq!(options.tags, vec!["catalog".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOptions {
    /// Tags attached to the entry, used by tag-based cleaning
    pub tags: Vec<String>,
    /// Lifetime of the entry; `None` uses the frontend default
    pub lifetime: Option<Duration>,
}

impl EntryOptions {
    /// Create options with no tags and the frontend default lifetime
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a tag to the entry
    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Attach several tags to the entry
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the lifetime of the entry
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    /// Set the lifetime of the entry in seconds
    pub fn with_lifetime_secs(mut self, secs: u64) -> Self {
        self.lifetime = Some(Duration::from_secs(secs));
        self
    }
}

/// Selects the entries removed by a clean operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleanMode {
    /// Every entry
    All,
    /// Entries carrying all of the given tags
    MatchingTag(Vec<String>),
    /// Entries carrying at least one of the given tags
    MatchingAnyTag(Vec<String>),
    /// Entries carrying none of the given tags
    NotMatchingTag(Vec<String>),
}

impl CleanMode {
    /// Whether an entry with `entry_tags` is removed under this mode
    pub fn matches(&self, entry_tags: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::MatchingTag(tags) => tags.iter().all(|tag| entry_tags.contains(tag)),
            Self::MatchingAnyTag(tags) => tags.iter().any(|tag| entry_tags.contains(tag)),
            Self::NotMatchingTag(tags) => !tags.iter().any(|tag| entry_tags.contains(tag)),
        }
    }

    /// Rewrite the tags of this mode with `f`
    pub fn map_tags<F>(self, f: F) -> Self
    where
        F: Fn(String) -> String,
    {
        match self {
            Self::All => Self::All,
            Self::MatchingTag(tags) => Self::MatchingTag(tags.into_iter().map(f).collect()),
            Self::MatchingAnyTag(tags) => Self::MatchingAnyTag(tags.into_iter().map(f).collect()),
            Self::NotMatchingTag(tags) => Self::NotMatchingTag(tags.into_iter().map(f).collect()),
        }
    }
}
