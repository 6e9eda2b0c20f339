//! Cache Frontend Pool
//!
//! Ordered, lazy and memoized access to named cache frontends.
//!
//! ## Resolution
//!
//! The pool knows the identifiers of its code-supplied default settings,
//! the identifiers overridden by the `cache.frontend` deployment
//! configuration, and always the default identifier. For each identifier
//! the deployment override, when present, replaces the default options as a
//! whole; options are never merged key by key.
//!
//! ## Ordering
//!
//! ```text
//! default  →  settings ids (declaration order)  →  override-only ids
//! ```
//!
//! ## Laziness
//!
//! Construction stores its collaborators only. Deployment configuration is
//! read on the first operation that needs it and each frontend is built by
//! the factory the first time it is requested.

use cfp_domain::constants::{CACHE_CONFIG_KEY, DEFAULT_FRONTEND_ID};
use cfp_domain::error::{Error, Result};
use cfp_domain::ports::{CacheFrontend, DeploymentConfig, FrontendFactory};
use cfp_domain::value_objects::{CacheSegment, FrontendOptions, FrontendSettings};
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// A known frontend: its effective options and, once built, its instance
struct FrontendSlot {
    options: FrontendOptions,
    instance: OnceCell<Arc<dyn CacheFrontend>>,
}

impl FrontendSlot {
    fn new(options: FrontendOptions) -> Self {
        Self {
            options,
            instance: OnceCell::new(),
        }
    }
}

/// Registry of named cache frontends
///
/// Besides [`get`](Self::get) and the lazy [`iter`](Self::iter) sequence,
/// the pool carries a shared cursor (`rewind`, `valid`, `key`, `current`,
/// `next`) for callers that walk the frontends step by step.
///
/// # Example
///
/// ```ignore
/// use cfp_application::FrontendPool;
///
/// let pool = FrontendPool::new(deployment_config, factory);
/// for entry in pool.iter() {
///     let (id, frontend) = entry?;
///     frontend.clean(CleanMode::All).await?;
/// }
/// ```
pub struct FrontendPool {
    deployment_config: Arc<dyn DeploymentConfig>,
    factory: Arc<dyn FrontendFactory>,
    settings: FrontendSettings,
    slots: OnceCell<IndexMap<String, FrontendSlot>>,
    position: AtomicUsize,
}

impl FrontendPool {
    /// Create a pool whose only default setting is an empty default frontend
    pub fn new(
        deployment_config: Arc<dyn DeploymentConfig>,
        factory: Arc<dyn FrontendFactory>,
    ) -> Self {
        Self::with_settings(deployment_config, factory, FrontendSettings::new())
    }

    /// Create a pool with code-supplied default settings
    ///
    /// The default frontend is moved to the front of the settings, and added
    /// with empty options when `settings` does not mention it.
    pub fn with_settings(
        deployment_config: Arc<dyn DeploymentConfig>,
        factory: Arc<dyn FrontendFactory>,
        mut settings: FrontendSettings,
    ) -> Self {
        let default_options = settings.shift_remove(DEFAULT_FRONTEND_ID).unwrap_or_default();
        let mut ordered = FrontendSettings::with_capacity(settings.len() + 1);
        ordered.insert(DEFAULT_FRONTEND_ID.to_string(), default_options);
        ordered.extend(settings);

        Self {
            deployment_config,
            factory,
            settings: ordered,
            slots: OnceCell::new(),
            position: AtomicUsize::new(0),
        }
    }

    /// Get the frontend registered under `id`, building it on first access
    ///
    /// # Errors
    /// [`Error::UnknownFrontend`] when `id` is neither in the default
    /// settings nor in the deployment overrides. Configuration and factory
    /// errors are returned as produced.
    pub fn get(&self, id: &str) -> Result<Arc<dyn CacheFrontend>> {
        let (id, slot) = self
            .slots()?
            .get_key_value(id)
            .ok_or_else(|| Error::unknown_frontend(id))?;
        self.build(id, slot)
    }

    /// Known frontend identifiers, in iteration order
    pub fn ids(&self) -> Result<Vec<&str>> {
        Ok(self.slots()?.keys().map(String::as_str).collect())
    }

    /// Whether the frontend registered under `id` has already been built
    ///
    /// Never reads configuration and never builds anything.
    pub fn is_built(&self, id: &str) -> bool {
        self.slots
            .get()
            .and_then(|slots| slots.get(id))
            .is_some_and(|slot| slot.instance.get().is_some())
    }

    /// Lazy sequence of `(id, frontend)` pairs
    ///
    /// Each frontend is built when the sequence reaches it. The sequence is
    /// independent of the shared cursor; call `iter` again to restart.
    pub fn iter(&self) -> FrontendIter<'_> {
        FrontendIter {
            pool: self,
            index: 0,
            done: false,
        }
    }

    /// Move the cursor back to the default frontend
    ///
    /// Built frontends stay memoized.
    pub fn rewind(&self) {
        self.position.store(0, Ordering::Relaxed);
    }

    /// Whether the cursor points at a frontend
    pub fn valid(&self) -> Result<bool> {
        Ok(self.position.load(Ordering::Relaxed) < self.slots()?.len())
    }

    /// Identifier under the cursor, `None` past the last frontend
    pub fn key(&self) -> Result<Option<&str>> {
        let position = self.position.load(Ordering::Relaxed);
        Ok(self
            .slots()?
            .get_index(position)
            .map(|(id, _)| id.as_str()))
    }

    /// Frontend under the cursor, built on first access; `None` past the end
    pub fn current(&self) -> Result<Option<Arc<dyn CacheFrontend>>> {
        let position = self.position.load(Ordering::Relaxed);
        match self.slots()?.get_index(position) {
            Some((id, slot)) => self.build(id, slot).map(Some),
            None => Ok(None),
        }
    }

    /// Advance the cursor; stays at the end once past the last frontend
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Result<()> {
        let len = self.slots()?.len();
        // Saturates at `len`, so the closure never returns None
        let _ = self
            .position
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |position| {
                Some(position.saturating_add(1).min(len))
            });
        Ok(())
    }

    /// Resolved frontend slots, reading deployment configuration once
    fn slots(&self) -> Result<&IndexMap<String, FrontendSlot>> {
        self.slots.get_or_try_init(|| {
            let overrides = self.load_overrides()?;
            Ok(self.resolve(overrides))
        })
    }

    fn load_overrides(&self) -> Result<FrontendSettings> {
        let Some(segment) = self.deployment_config.get_segment(CACHE_CONFIG_KEY)? else {
            debug!(segment = CACHE_CONFIG_KEY, "No deployment cache configuration");
            return Ok(FrontendSettings::new());
        };

        let segment: CacheSegment = serde_json::from_value(segment).map_err(|e| {
            Error::configuration_with_source(
                format!("Invalid '{CACHE_CONFIG_KEY}' configuration segment"),
                e,
            )
        })?;
        debug!(
            overrides = segment.frontend.len(),
            "Loaded deployment cache configuration"
        );
        Ok(segment.frontend)
    }

    fn resolve(&self, mut overrides: FrontendSettings) -> IndexMap<String, FrontendSlot> {
        let mut slots = IndexMap::with_capacity(self.settings.len() + overrides.len());
        for (id, defaults) in &self.settings {
            let options = overrides
                .shift_remove(id)
                .unwrap_or_else(|| defaults.clone());
            slots.insert(id.clone(), FrontendSlot::new(options));
        }
        for (id, options) in overrides {
            slots.insert(id, FrontendSlot::new(options));
        }
        slots
    }

    fn build(&self, id: &str, slot: &FrontendSlot) -> Result<Arc<dyn CacheFrontend>> {
        slot.instance
            .get_or_try_init(|| {
                let frontend = self.factory.create(&slot.options)?;
                debug!(
                    frontend = id,
                    backend = frontend.backend_name(),
                    "Built cache frontend"
                );
                Ok(frontend)
            })
            .map(Arc::clone)
    }
}

impl fmt::Debug for FrontendPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let built: Vec<&str> = self
            .slots
            .get()
            .map(|slots| {
                slots
                    .iter()
                    .filter(|(_, slot)| slot.instance.get().is_some())
                    .map(|(id, _)| id.as_str())
                    .collect()
            })
            .unwrap_or_default();

        f.debug_struct("FrontendPool")
            .field("settings", &self.settings.keys().collect::<Vec<_>>())
            .field("resolved", &self.slots.get().is_some())
            .field("built", &built)
            .field("position", &self.position.load(Ordering::Relaxed))
            .finish()
    }
}

/// Lazy sequence over a [`FrontendPool`], see [`FrontendPool::iter`]
///
/// A configuration error is yielded once and ends the sequence.
pub struct FrontendIter<'a> {
    pool: &'a FrontendPool,
    index: usize,
    done: bool,
}

impl<'a> Iterator for FrontendIter<'a> {
    type Item = Result<(&'a str, Arc<dyn CacheFrontend>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let pool = self.pool;
        let slots = match pool.slots() {
            Ok(slots) => slots,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        let Some((id, slot)) = slots.get_index(self.index) else {
            self.done = true;
            return None;
        };
        self.index += 1;
        Some(pool.build(id, slot).map(|frontend| (id.as_str(), frontend)))
    }
}
