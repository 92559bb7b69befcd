//! Session-scoped cache for the server's top-tag list.
//!
//! The top-tag list seeds every selector mount, so it is fetched once per
//! session and shared from an explicit [`TopTagCache`] owned by the enclosing
//! application context. The cache supports an optional time-to-live and a
//! manual [`clear`](TopTagCache::clear) hook instead of living implicitly for
//! the whole process.
//!
//! Fetch failures are absorbed: a failed refresh yields an empty list, is not
//! cached, and only leaves a debug-level trace event. The tag filter degrades
//! to "no seeded top tags" rather than failing the page.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use shiori::api::HttpTagApi;
//! use shiori::cache::TopTagCache;
//!
//! # async fn example() {
//! let api = HttpTagApi::new("https://novels.example.com");
//! let cache = Arc::new(TopTagCache::new(Some(Duration::from_secs(600))));
//!
//! let tags = cache.get_or_fetch(&api).await;
//! // A second call within the TTL reuses the cached list.
//! let again = cache.get_or_fetch(&api).await;
//! # }
//! ```

use parking_lot::Mutex;
use std::time::{Duration, Instant};

use crate::api::TagApi;

#[derive(Debug, Clone)]
struct CacheEntry {
    fetched_at: Instant,
    tags: Vec<String>,
}

/// TTL-based cache of the top-tag list.
///
/// Thread-safe behind a `Mutex`; intended to be shared via `Arc` across the
/// selectors of one session.
#[derive(Debug, Default)]
pub struct TopTagCache {
    ttl: Option<Duration>,
    slot: Mutex<Option<CacheEntry>>,
}

impl TopTagCache {
    /// Creates a cache with the given time-to-live.
    ///
    /// `None` means entries never expire and live until [`clear`](Self::clear)
    /// is called.
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Returns the cached top-tag list, fetching it if missing or expired.
    ///
    /// On fetch failure the error is traced and an empty list is returned;
    /// nothing is cached, so the next call retries the fetch.
    pub async fn get_or_fetch(&self, api: &dyn TagApi) -> Vec<String> {
        if let Some(tags) = self.get() {
            return tags;
        }

        match api.top_tags().await {
            Ok(tags) => {
                *self.slot.lock() = Some(CacheEntry {
                    fetched_at: Instant::now(),
                    tags: tags.clone(),
                });
                tags
            }
            Err(error) => {
                tracing::debug!(%error, "top tag fetch failed, seeding nothing");
                Vec::new()
            }
        }
    }

    /// Returns the cached list if present and fresh.
    pub fn get(&self) -> Option<Vec<String>> {
        let slot = self.slot.lock();
        let entry = slot.as_ref()?;

        if let Some(ttl) = self.ttl {
            if entry.fetched_at.elapsed() >= ttl {
                return None;
            }
        }

        Some(entry.tags.clone())
    }

    /// Seeds the cache directly, without a network call.
    pub fn prime(&self, tags: Vec<String>) {
        *self.slot.lock() = Some(CacheEntry {
            fetched_at: Instant::now(),
            tags,
        });
    }

    /// Drops the cached list. The next lookup refetches.
    pub fn clear(&self) {
        *self.slot.lock() = None;
    }
}
