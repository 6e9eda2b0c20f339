//! Unit tests for entry options and clean modes

use cfp_domain::{CleanMode, EntryOptions};
use std::time::Duration;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn test_entry_options_builder() {
    let options = EntryOptions::new()
        .with_tag("catalog")
        .with_tags(["product", "price"])
        .with_lifetime_secs(60);

    assert_eq!(options.tags, tags(&["catalog", "product", "price"]));
    assert_eq!(options.lifetime, Some(Duration::from_secs(60)));
}

#[test]
fn test_entry_options_default_has_no_lifetime() {
    let options = EntryOptions::default();
    assert!(options.tags.is_empty());
    assert!(options.lifetime.is_none());
}

#[test]
fn test_clean_all_matches_everything() {
    assert!(CleanMode::All.matches(&[]));
    assert!(CleanMode::All.matches(&tags(&["a"])));
}

#[test]
fn test_clean_matching_tag_requires_every_tag() {
    let mode = CleanMode::MatchingTag(tags(&["a", "b"]));
    assert!(mode.matches(&tags(&["a", "b", "c"])));
    assert!(!mode.matches(&tags(&["a"])));
}

#[test]
fn test_clean_matching_any_tag() {
    let mode = CleanMode::MatchingAnyTag(tags(&["a", "b"]));
    assert!(mode.matches(&tags(&["b"])));
    assert!(!mode.matches(&tags(&["c"])));
    assert!(!mode.matches(&[]));
}

#[test]
fn test_clean_not_matching_tag() {
    let mode = CleanMode::NotMatchingTag(tags(&["a", "b"]));
    assert!(mode.matches(&tags(&["c"])));
    assert!(mode.matches(&[]));
    assert!(!mode.matches(&tags(&["c", "a"])));
}

#[test]
fn test_clean_mode_map_tags() {
    let mode = CleanMode::MatchingAnyTag(tags(&["a", "b"])).map_tags(|tag| format!("p_{tag}"));
    assert_eq!(mode, CleanMode::MatchingAnyTag(tags(&["p_a", "p_b"])));
    assert_eq!(CleanMode::All.map_tags(|tag| tag), CleanMode::All);
}
