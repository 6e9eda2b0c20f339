//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values.
//!
//! Two views of the same sources are offered. [`ConfigLoader::load`]
//! extracts the typed [`AppConfig`] through Figment. [`ConfigLoader::document`]
//! merges the sources into one JSON document that keeps the file's
//! declaration order, keeps the case of frontend identifiers and keeps
//! environment values as the raw strings they were set to.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use cfp_domain::constants::CACHE_CONFIG_KEY;
use cfp_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde_json::{Map, Value};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Member of the cache segment keyed by frontend identifier
const FRONTEND_SECTION: &str = "frontend";

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Environment variable prefix, separator included
    pub fn env_prefix(&self) -> String {
        format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix)
    }

    /// Configuration file in use: the configured path, else the first
    /// existing default location
    pub fn config_file(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// Log which configuration file the sources include
    ///
    /// Call once logging is installed; loading itself logs nothing.
    pub fn log_source(&self) {
        match self.config_file() {
            Some(path) => log_config_loaded(&path, path.exists()),
            None => debug!("No configuration file found, using defaults and environment"),
        }
    }

    /// Merge all configuration sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `CFP__LOGGING__LEVEL`)
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));
        if let Some(path) = self.config_file() {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(self.env())
    }

    /// Merge all configuration sources into one ordered document
    ///
    /// Same sources and precedence as [`figment`](Self::figment). Tables
    /// keep the order they are declared in, environment values stay
    /// strings, and the identifier segment of
    /// `CFP__CACHE__FRONTEND__<id>__<option>` keeps its case while every
    /// other key segment is lowercased.
    pub fn document(&self) -> Result<Value> {
        let mut document = serde_json::to_value(AppConfig::default())
            .config_context("Failed to serialize default configuration")?;

        if let Some(path) = self.config_file().filter(|path| path.exists()) {
            let contents = std::fs::read_to_string(&path)
                .io_context(format!("Failed to read config file {}", path.display()))?;
            let table: toml::Table = toml::from_str(&contents)
                .config_context(format!("Failed to parse config file {}", path.display()))?;
            let file = serde_json::to_value(table)
                .config_context(format!("Failed to convert config file {}", path.display()))?;
            merge_values(&mut document, file);
        }

        for (key, value) in self.env().lowercase(false).iter() {
            let path = env_key_path(key.as_str());
            if !path.is_empty() {
                insert_path(&mut document, &path, Value::String(value));
            }
        }

        Ok(document)
    }

    fn env(&self) -> Env {
        Env::prefixed(&self.env_prefix()).split(CONFIG_ENV_SEPARATOR)
    }

    /// Load and validate the application configuration
    pub fn load(&self) -> Result<AppConfig> {
        let mut app_config: AppConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;

        if let Some(cache) = self.document()?.get(CACHE_CONFIG_KEY) {
            app_config.cache = serde_json::from_value(cache.clone()).config_context(format!(
                "Invalid '{CACHE_CONFIG_KEY}' configuration segment"
            ))?;
        }

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// First existing file among the default configuration locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay `overlay` onto `base`, merging nested objects
///
/// New keys are appended; replaced keys keep their position.
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                let nested = value.is_object() && base.get(&key).is_some_and(Value::is_object);
                if !nested {
                    base.insert(key, value);
                } else if let Some(existing) = base.get_mut(&key) {
                    merge_values(existing, value);
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Key path of an environment variable, prefix already stripped
///
/// Segments are lowercased except a frontend identifier directly under
/// `cache.frontend`.
fn env_key_path(key: &str) -> Vec<String> {
    let mut path: Vec<String> = Vec::new();
    for segment in key.split('.').filter(|segment| !segment.is_empty()) {
        let is_frontend_id =
            path.len() == 2 && path[0] == CACHE_CONFIG_KEY && path[1] == FRONTEND_SECTION;
        if is_frontend_id {
            path.push(segment.to_string());
        } else {
            path.push(segment.to_ascii_lowercase());
        }
    }
    path
}

/// Set `value` at `path`, turning anything in the way into objects
fn insert_path(target: &mut Value, path: &[String], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        *target = value;
        return;
    };

    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    if let Value::Object(map) = target {
        let child = map.entry(first.clone()).or_insert(Value::Null);
        insert_path(child, rest, value);
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(config)?;
    validate_cache_config(config)?;
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    if config
        .logging
        .file_output
        .as_ref()
        .is_some_and(|path| path.as_os_str().is_empty())
    {
        return Err(Error::configuration("Log file path cannot be empty"));
    }
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    if let Some(id) = config.cache.frontend.keys().find(|id| id.trim().is_empty()) {
        return Err(Error::configuration(format!(
            "Cache frontend identifier '{id}' cannot be blank"
        )));
    }
    Ok(())
}
