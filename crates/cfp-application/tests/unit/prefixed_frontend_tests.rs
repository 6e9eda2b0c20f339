//! Prefixed Frontend Tests

use cfp_application::PrefixedFrontend;
use cfp_domain::error::Error;
use cfp_domain::ports::CacheFrontend;
use cfp_domain::value_objects::{CleanMode, EntryOptions};
use cfp_providers::cache::MokaFrontend;
use std::sync::Arc;

fn shared_store() -> (Arc<dyn CacheFrontend>, PrefixedFrontend) {
    let inner: Arc<dyn CacheFrontend> = Arc::new(MokaFrontend::new());
    let prefixed = PrefixedFrontend::new(Arc::clone(&inner), "page_");
    (inner, prefixed)
}

#[tokio::test]
async fn test_prefixed_frontend_scopes_ids() {
    let (inner, prefixed) = shared_store();

    prefixed
        .save("home", "<html/>", &EntryOptions::new())
        .await
        .unwrap();

    assert_eq!(prefixed.prefix(), "page_");
    assert!(prefixed.test("home").await.unwrap());
    assert_eq!(
        inner.load("page_home").await.unwrap(),
        Some("<html/>".to_string())
    );
    assert!(!inner.test("home").await.unwrap());

    assert!(prefixed.remove("home").await.unwrap());
    assert!(!inner.test("page_home").await.unwrap());
}

#[tokio::test]
async fn test_prefixed_clean_all_keeps_unscoped_entries() {
    let (inner, prefixed) = shared_store();
    inner
        .save("unscoped", "value", &EntryOptions::new())
        .await
        .unwrap();
    prefixed
        .save("scoped", "value", &EntryOptions::new())
        .await
        .unwrap();

    prefixed.clean(CleanMode::All).await.unwrap();

    assert!(!prefixed.test("scoped").await.unwrap());
    assert!(inner.test("unscoped").await.unwrap());
}

#[tokio::test]
async fn test_prefixed_clean_by_tag() {
    let (inner, prefixed) = shared_store();
    inner
        .save("unscoped", "value", &EntryOptions::new().with_tag("catalog"))
        .await
        .unwrap();
    prefixed
        .save("tagged", "value", &EntryOptions::new().with_tag("catalog"))
        .await
        .unwrap();
    prefixed
        .save("other", "value", &EntryOptions::new().with_tag("cms"))
        .await
        .unwrap();

    prefixed
        .clean(CleanMode::MatchingTag(vec!["catalog".to_string()]))
        .await
        .unwrap();
    assert!(!prefixed.test("tagged").await.unwrap());
    assert!(prefixed.test("other").await.unwrap());
    assert!(inner.test("unscoped").await.unwrap());

    prefixed
        .clean(CleanMode::MatchingAnyTag(vec!["cms".to_string()]))
        .await
        .unwrap();
    assert!(!prefixed.test("other").await.unwrap());
    assert!(inner.test("unscoped").await.unwrap());
}

#[tokio::test]
async fn test_prefixed_rejects_not_matching_tag() {
    let (_inner, prefixed) = shared_store();

    let error = prefixed
        .clean(CleanMode::NotMatchingTag(vec!["catalog".to_string()]))
        .await
        .unwrap_err();

    assert!(matches!(error, Error::InvalidArgument { .. }));
}
