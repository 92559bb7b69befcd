//! Tests for the session-scoped top-tag cache: TTL, manual invalidation, and
//! the no-caching-of-failures rule.

mod common;

use common::MockTagApi;
use shiori::TopTagCache;
use std::time::Duration;

#[tokio::test]
async fn test_cache_reuses_fetched_list() {
    let api = MockTagApi::new(&["isekai", "magic"]);
    let cache = TopTagCache::new(None);

    let first = cache.get_or_fetch(&api).await;
    let second = cache.get_or_fetch(&api).await;

    assert_eq!(first, vec!["isekai".to_string(), "magic".to_string()]);
    assert_eq!(second, first);
    assert_eq!(api.top_calls(), 1);
}

#[tokio::test]
async fn test_zero_ttl_always_refetches() {
    let api = MockTagApi::new(&["isekai"]);
    let cache = TopTagCache::new(Some(Duration::ZERO));

    cache.get_or_fetch(&api).await;
    cache.get_or_fetch(&api).await;

    assert_eq!(api.top_calls(), 2);
}

#[tokio::test]
async fn test_clear_forces_refetch() {
    let api = MockTagApi::new(&["isekai"]);
    let cache = TopTagCache::new(None);

    cache.get_or_fetch(&api).await;
    cache.clear();
    assert_eq!(cache.get(), None);

    let tags = cache.get_or_fetch(&api).await;
    assert_eq!(tags, vec!["isekai".to_string()]);
    assert_eq!(api.top_calls(), 2);
}

#[tokio::test]
async fn test_prime_avoids_network() {
    let api = MockTagApi::new(&["isekai"]);
    let cache = TopTagCache::new(None);

    cache.prime(vec!["drama".to_string()]);
    let tags = cache.get_or_fetch(&api).await;

    assert_eq!(tags, vec!["drama".to_string()]);
    assert_eq!(api.top_calls(), 0);
}

#[tokio::test]
async fn test_failure_yields_empty_and_is_not_cached() {
    let api = MockTagApi::new(&["isekai"]);
    api.set_fail_top(true);
    let cache = TopTagCache::new(None);

    // Soft degradation: the failure produces an empty seed list.
    let tags = cache.get_or_fetch(&api).await;
    assert!(tags.is_empty());
    assert_eq!(cache.get(), None);

    // Once the backend recovers, the next call fetches for real.
    api.set_fail_top(false);
    let tags = cache.get_or_fetch(&api).await;
    assert_eq!(tags, vec!["isekai".to_string()]);
    assert_eq!(api.top_calls(), 2);
}
