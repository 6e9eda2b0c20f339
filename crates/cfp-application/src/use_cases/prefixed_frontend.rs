//! Id-prefix decorator
//!
//! Renames every entry id and tag of the decorated frontend with a prefix.
//! Saved entries additionally carry a scope tag, and `CleanMode::All`
//! removes only entries carrying it, leaving entries written to the
//! decorated frontend directly in place.
//!
//! `CleanMode::NotMatchingTag` cannot be confined to the scope and is
//! rejected with `Error::InvalidArgument`.

use async_trait::async_trait;
use cfp_domain::error::{Error, Result};
use cfp_domain::ports::CacheFrontend;
use cfp_domain::value_objects::{CleanMode, EntryOptions};
use std::fmt;
use std::sync::Arc;

/// Tag suffix marking every entry saved through a prefixed frontend
const SCOPE_TAG_SUFFIX: &str = "__scope";

/// Frontend decorator prefixing entry ids and tags
#[derive(Clone)]
pub struct PrefixedFrontend {
    inner: Arc<dyn CacheFrontend>,
    prefix: String,
    scope_tag: String,
}

impl PrefixedFrontend {
    /// Wrap `inner`, prefixing every id and tag with `prefix`
    pub fn new<S: Into<String>>(inner: Arc<dyn CacheFrontend>, prefix: S) -> Self {
        let prefix = prefix.into();
        let scope_tag = format!("{prefix}{SCOPE_TAG_SUFFIX}");
        Self {
            inner,
            prefix,
            scope_tag,
        }
    }

    /// The prefix applied to ids and tags
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The decorated frontend
    pub fn inner(&self) -> &Arc<dyn CacheFrontend> {
        &self.inner
    }

    fn scoped(&self, value: &str) -> String {
        format!("{}{}", self.prefix, value)
    }
}

#[async_trait]
impl CacheFrontend for PrefixedFrontend {
    async fn test(&self, id: &str) -> Result<bool> {
        self.inner.test(&self.scoped(id)).await
    }

    async fn load(&self, id: &str) -> Result<Option<String>> {
        self.inner.load(&self.scoped(id)).await
    }

    async fn save(&self, id: &str, data: &str, options: &EntryOptions) -> Result<()> {
        let mut scoped = EntryOptions {
            tags: options.tags.iter().map(|tag| self.scoped(tag)).collect(),
            lifetime: options.lifetime,
        };
        scoped.tags.push(self.scope_tag.clone());
        self.inner.save(&self.scoped(id), data, &scoped).await
    }

    async fn remove(&self, id: &str) -> Result<bool> {
        self.inner.remove(&self.scoped(id)).await
    }

    async fn clean(&self, mode: CleanMode) -> Result<()> {
        let scoped = match mode {
            CleanMode::All => CleanMode::MatchingTag(vec![self.scope_tag.clone()]),
            CleanMode::MatchingTag(tags) => {
                let mut tags: Vec<String> = tags.iter().map(|tag| self.scoped(tag)).collect();
                tags.push(self.scope_tag.clone());
                CleanMode::MatchingTag(tags)
            }
            CleanMode::NotMatchingTag(_) => {
                return Err(Error::invalid_argument(format!(
                    "Clean mode NotMatchingTag is not supported by frontends prefixed with '{}'",
                    self.prefix
                )));
            }
            other => other.map_tags(|tag| self.scoped(&tag)),
        };
        self.inner.clean(scoped).await
    }

    fn backend_name(&self) -> &str {
        self.inner.backend_name()
    }
}

impl fmt::Debug for PrefixedFrontend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixedFrontend")
            .field("prefix", &self.prefix)
            .field("inner", &self.inner)
            .finish()
    }
}
