//! Registry Frontend Factory Tests
//!
//! Uses `extern crate cfp_providers` to force linkme registration of the
//! real backends.

// Force linkme registration of all backends from cfp-providers
extern crate cfp_providers;

use crate::test_doubles::options;
use cfp_application::{FrontendPool, RegistryFrontendFactory};
use cfp_domain::error::Error;
use cfp_domain::ports::{CacheFrontend, DeploymentConfig, FrontendFactory};
use cfp_domain::value_objects::FrontendOptions;
use std::sync::Arc;

#[test]
fn test_factory_defaults_to_moka_backend() {
    let factory = RegistryFrontendFactory::new();
    assert_eq!(factory.default_backend(), "moka");

    let frontend = factory.create(&FrontendOptions::new()).unwrap();
    assert_eq!(frontend.backend_name(), "moka");
}

#[test]
fn test_factory_uses_backend_option() {
    let factory = RegistryFrontendFactory::new();

    let frontend = factory.create(&options(&[("backend", "null")])).unwrap();

    assert_eq!(frontend.backend_name(), "null");
}

#[test]
fn test_factory_custom_default_backend() {
    let factory = RegistryFrontendFactory::with_default_backend("null");

    let frontend = factory.create(&FrontendOptions::new()).unwrap();

    assert_eq!(frontend.backend_name(), "null");
}

#[test]
fn test_factory_unknown_backend() {
    let factory = RegistryFrontendFactory::new();

    let error = factory
        .create(&options(&[("backend", "memcached")]))
        .unwrap_err();

    match error {
        Error::Configuration { message, .. } => assert!(message.contains("memcached")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_factory_passes_backend_options() {
    let factory = RegistryFrontendFactory::new();

    let error = factory
        .create(&options(&[("backend", "moka"), ("max_capacity", "many")]))
        .unwrap_err();

    assert!(matches!(error, Error::Configuration { .. }));
}

#[test]
fn test_factory_wraps_prefixed_frontend() {
    let factory = RegistryFrontendFactory::new();

    let frontend = factory
        .create(&options(&[("backend", "moka"), ("id_prefix", "page_")]))
        .unwrap();

    // Debug output names the decorator and its prefix
    let debug = format!("{frontend:?}");
    assert!(debug.contains("PrefixedFrontend"), "{debug}");
    assert!(debug.contains("page_"), "{debug}");
    assert_eq!(frontend.backend_name(), "moka");
}

#[test]
fn test_factory_ignores_empty_prefix() {
    let factory = RegistryFrontendFactory::new();

    let frontend = factory
        .create(&options(&[("backend", "null"), ("id_prefix", "")]))
        .unwrap();

    assert!(!format!("{frontend:?}").contains("PrefixedFrontend"));
}

struct NoDeploymentConfig;

impl DeploymentConfig for NoDeploymentConfig {
    fn get_segment(&self, _key: &str) -> cfp_domain::Result<Option<serde_json::Value>> {
        Ok(None)
    }
}

#[tokio::test]
async fn test_pool_with_registry_factory() {
    let pool = FrontendPool::with_settings(
        Arc::new(NoDeploymentConfig),
        Arc::new(RegistryFrontendFactory::new()),
        [("disabled".to_string(), options(&[("backend", "null")]))]
            .into_iter()
            .collect(),
    );

    let backends: Vec<(String, String)> = pool
        .iter()
        .map(|entry| {
            entry.map(|(id, frontend)| (id.to_string(), frontend.backend_name().to_string()))
        })
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        backends,
        vec![
            ("default".to_string(), "moka".to_string()),
            ("disabled".to_string(), "null".to_string()),
        ]
    );

    let default = pool.get("default").unwrap();
    default
        .save("greeting", "hello", &Default::default())
        .await
        .unwrap();
    assert_eq!(
        pool.get("default").unwrap().load("greeting").await.unwrap(),
        Some("hello".to_string())
    );
}
