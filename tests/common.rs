//! Common test utilities
//!
//! Shared mock backend used across the test modules.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use shiori::api::TagApi;
use shiori::types::TagCandidate;
use shiori::{Error, Result};

/// In-memory [`TagApi`] with call counters, switchable failures, and
/// per-query latency.
///
/// Lookups echo the query back as a single candidate, so tests can tell
/// which lookup's response landed.
#[derive(Default)]
pub struct MockTagApi {
    top_tags: Vec<String>,
    fail_top: AtomicBool,
    fail_search: AtomicBool,
    latency: Mutex<HashMap<String, Duration>>,
    top_calls: AtomicUsize,
    search_calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockTagApi {
    pub fn new(top_tags: &[&str]) -> Self {
        Self {
            top_tags: top_tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    /// A backend where every endpoint fails with HTTP 500.
    pub fn failing() -> Self {
        let api = Self::default();
        api.fail_top.store(true, Ordering::SeqCst);
        api.fail_search.store(true, Ordering::SeqCst);
        api
    }

    pub fn set_fail_top(&self, fail: bool) {
        self.fail_top.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_search(&self, fail: bool) {
        self.fail_search.store(fail, Ordering::SeqCst);
    }

    /// Delays responses for one specific query.
    pub fn with_latency(self, query: &str, delay: Duration) -> Self {
        self.latency.lock().insert(query.to_string(), delay);
        self
    }

    pub fn top_calls(&self) -> usize {
        self.top_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// The queries that actually reached the backend, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl TagApi for MockTagApi {
    async fn top_tags(&self) -> Result<Vec<String>> {
        self.top_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_top.load(Ordering::SeqCst) {
            return Err(Error::api("/api/toptags", 500));
        }

        Ok(self.top_tags.clone())
    }

    async fn search_tags(&self, prefix: &str) -> Result<Vec<TagCandidate>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().push(prefix.to_string());

        let delay = self.latency.lock().get(prefix).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_search.load(Ordering::SeqCst) {
            return Err(Error::api("/api/search_tags", 500));
        }

        Ok(vec![TagCandidate::new(prefix, 1)])
    }
}
