//! Pool wiring tests

use cfp_domain::constants::{BACKEND_OPTION, DEFAULT_BACKEND, DEFAULT_FRONTEND_ID};
use cfp_domain::error::{Error, Result};
use cfp_domain::ports::DeploymentConfig;
use cfp_domain::value_objects::EntryOptions;
use cfp_infrastructure::bootstrap::{
    build_frontend_pool, build_frontend_pool_with, default_frontend_settings,
};
use cfp_infrastructure::config::{ConfigLoader, StaticDeploymentConfig};
use serde_json::{Value, json};
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::NamedTempFile;

/// Counts reads before delegating to a static configuration
struct CountingConfig {
    inner: StaticDeploymentConfig,
    reads: AtomicUsize,
}

impl DeploymentConfig for CountingConfig {
    fn get_segment(&self, key: &str) -> Result<Option<Value>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_segment(key)
    }
}

fn loader_for(contents: &str) -> (NamedTempFile, ConfigLoader) {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    let loader = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("CFP_TEST_BOOTSTRAP");
    (file, loader)
}

#[test]
fn test_default_frontend_settings() {
    let settings = default_frontend_settings();

    assert_eq!(settings.len(), 1);
    assert_eq!(
        settings[DEFAULT_FRONTEND_ID][BACKEND_OPTION],
        DEFAULT_BACKEND
    );
}

#[test]
fn test_pool_without_overrides_builds_moka_default() {
    let (_file, loader) = loader_for("[logging]\nlevel = \"info\"\n");
    let pool = build_frontend_pool(&loader);

    assert_eq!(pool.ids().unwrap(), vec![DEFAULT_FRONTEND_ID]);
    assert_eq!(pool.get(DEFAULT_FRONTEND_ID).unwrap().backend_name(), "moka");
}

#[test]
fn test_pool_reads_overrides_from_file() {
    let (_file, loader) = loader_for(
        r#"
[cache.frontend.default]
backend = "null"

[cache.frontend.page]
backend = "moka"
max_capacity = 100
"#,
    );
    let pool = build_frontend_pool(&loader);

    assert_eq!(pool.ids().unwrap(), vec!["default", "page"]);
    assert_eq!(pool.get("default").unwrap().backend_name(), "null");
    assert_eq!(pool.get("page").unwrap().backend_name(), "moka");
}

#[test]
fn test_pool_lists_file_frontends_in_declaration_order() {
    let (_file, loader) = loader_for(
        r#"
[cache.frontend.zeta]
backend = "null"

[cache.frontend.default]
backend = "null"

[cache.frontend.alpha]
backend = "moka"
"#,
    );
    let pool = build_frontend_pool(&loader);

    let listed: Vec<(String, String)> = pool
        .iter()
        .map(|entry| entry.map(|(id, frontend)| (id.to_string(), frontend.backend_name().to_string())))
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(
        listed,
        vec![
            ("default".to_string(), "null".to_string()),
            ("zeta".to_string(), "null".to_string()),
            ("alpha".to_string(), "moka".to_string()),
        ]
    );
}

#[test]
fn test_pool_unknown_frontend() {
    let (_file, loader) = loader_for("");
    let pool = build_frontend_pool(&loader);

    let err = pool.get("unknown").unwrap_err();

    assert!(matches!(err, Error::UnknownFrontend { .. }));
    assert_eq!(err.to_string(), "Cache frontend 'unknown' is not recognized");
}

#[test]
fn test_pool_unknown_backend_is_configuration_error() {
    let (_file, loader) = loader_for("[cache.frontend.page]\nbackend = \"memcached\"\n");
    let pool = build_frontend_pool(&loader);

    let err = pool.get("page").unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("memcached"));
    assert!(pool.get("default").is_ok());
}

#[test]
fn test_pool_with_static_config_reads_once() {
    let config = Arc::new(CountingConfig {
        inner: StaticDeploymentConfig::new().with_segment(
            "cache",
            json!({ "frontend": { "session": { "backend": "null" } } }),
        ),
        reads: AtomicUsize::new(0),
    });
    let pool = build_frontend_pool_with(config.clone(), default_frontend_settings());
    assert_eq!(config.reads.load(Ordering::SeqCst), 0);

    let ids: Vec<String> = pool
        .iter()
        .map(|entry| entry.map(|(id, _)| id.to_string()))
        .collect::<Result<_>>()
        .unwrap();
    pool.get("session").unwrap();
    pool.rewind();
    assert_eq!(pool.key().unwrap(), Some(DEFAULT_FRONTEND_ID));

    assert_eq!(ids, vec!["default", "session"]);
    assert_eq!(config.reads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_prefixed_frontend_from_file() {
    let (_file, loader) = loader_for(
        r#"
[cache.frontend.default]
backend = "moka"

[cache.frontend.scoped]
backend = "moka"
id_prefix = "scoped_"
"#,
    );
    let pool = build_frontend_pool(&loader);
    let scoped = pool.get("scoped").unwrap();

    scoped
        .save("page", "<html>", &EntryOptions::new())
        .await
        .unwrap();

    assert_eq!(scoped.load("page").await.unwrap().as_deref(), Some("<html>"));
    assert!(pool.get("default").unwrap().load("page").await.unwrap().is_none());
}
