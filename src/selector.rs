//! The event-driven tag selector component.
//!
//! [`TagSelector`] wraps a [`TagSelection`] with everything a frontend mount
//! needs around it: one-shot initialization from the URL and the cached
//! top-tag list, the debounced autocomplete lookup, and the search
//! navigation target. It is driven by discrete UI events (keystrokes, clicks,
//! Enter, search) on a single logical thread; the only background work is the
//! spawned lookup task.
//!
//! # Lookup generations
//!
//! Each keystroke bumps a monotonically increasing generation counter and
//! schedules a lookup one debounce window out, stamped with that generation.
//! A superseded task wakes, observes a newer generation, and exits without a
//! network call; a task whose response arrives after a newer keystroke
//! discards the response for the same reason. The counter therefore covers
//! both debounce cancellation and out-of-order responses, so a slow lookup
//! for an old query can never overwrite candidates for a newer one.
//!
//! # Soft degradation
//!
//! Backend failures never surface through the selector. A failed top-tag
//! fetch seeds nothing, a failed lookup leaves the candidate list as it was;
//! both leave a debug-level trace event only.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shiori::prelude::*;
//!
//! # async fn example() {
//! let api = Arc::new(HttpTagApi::new("https://novels.example.com"));
//! let cache = Arc::new(TopTagCache::new(None));
//! let mut selector = TagSelector::new(api, cache);
//!
//! // Mount: merge URL tags with server-suggested top tags.
//! selector.init("magic,-romance").await;
//!
//! // User clicks the "magic" chip: Include -> Exclude.
//! selector.cycle_tag("magic");
//!
//! // User types into the autocomplete box.
//! selector.on_input("rom");
//!
//! // User hits the search button.
//! let target = selector.search_path("/browse/page-1?");
//! # }
//! ```

use derive_builder::Builder;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::{
    api::TagApi,
    cache::TopTagCache,
    selection::{self, TagSelection},
    types::TagCandidate,
};

/// Tuning knobs for a [`TagSelector`].
///
/// # Builder Usage
///
/// ```rust
/// use std::time::Duration;
/// use shiori::selector::SelectorConfigBuilder;
///
/// let config = SelectorConfigBuilder::default()
///     .debounce(Duration::from_millis(300))
///     .build()
///     .unwrap();
/// assert_eq!(config.min_query_len, 3);
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct SelectorConfig {
    /// Delay between the last keystroke and the autocomplete lookup.
    #[builder(default = "Duration::from_millis(1000)")]
    pub debounce: Duration,

    /// Queries shorter than this never reach the network.
    #[builder(default = "3")]
    pub min_query_len: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(1000),
            min_query_len: 3,
        }
    }
}

/// Tag filter component for one mounted search page.
///
/// See the [module documentation](self) for the event model.
pub struct TagSelector {
    api: Arc<dyn TagApi>,
    cache: Arc<TopTagCache>,
    config: SelectorConfig,
    selection: TagSelection,
    suggestions: Arc<Mutex<Vec<TagCandidate>>>,
    lookup_gen: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
    initialized: bool,
}

impl TagSelector {
    /// Creates a selector with the default configuration.
    ///
    /// The cache is shared across the selectors of one session, so repeated
    /// mounts reuse the top-tag list without another round-trip.
    pub fn new(api: Arc<dyn TagApi>, cache: Arc<TopTagCache>) -> Self {
        Self::with_config(api, cache, SelectorConfig::default())
    }

    /// Creates a selector with an explicit configuration.
    pub fn with_config(
        api: Arc<dyn TagApi>,
        cache: Arc<TopTagCache>,
        config: SelectorConfig,
    ) -> Self {
        Self {
            api,
            cache,
            config,
            selection: TagSelection::new(),
            suggestions: Arc::new(Mutex::new(Vec::new())),
            lookup_gen: Arc::new(AtomicU64::new(0)),
            pending: None,
            initialized: false,
        }
    }

    /// Initializes the selection from the URL and the cached top-tag list.
    ///
    /// Runs once per selector: tags present in `url_tags` keep their encoded
    /// polarity verbatim, then every top tag not already present under any
    /// polarity is appended as Neutral. Subsequent calls are no-ops, so the
    /// arrival of a late top-tag fetch cannot rerun the merge.
    ///
    /// A failed top-tag fetch seeds nothing; the URL tags still apply.
    pub async fn init(&mut self, url_tags: &str) {
        if self.initialized {
            return;
        }

        let top_tags = self.cache.get_or_fetch(self.api.as_ref()).await;

        let mut selection = TagSelection::parse_query(url_tags);
        for tag in top_tags {
            selection.seed_neutral(tag);
        }

        self.selection = selection;
        self.initialized = true;
    }

    /// Whether [`init`](Self::init) has already committed the merged state.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The current selection state.
    pub fn selection(&self) -> &TagSelection {
        &self.selection
    }

    /// Click handler: advances a tag one step in the polarity cycle.
    pub fn cycle_tag(&mut self, name: &str) {
        self.selection.cycle(name);
    }

    /// Enter handler: commits the typed entry with toggle-to-include
    /// semantics and returns the committed bare name. The caller clears its
    /// input box afterwards.
    pub fn commit_entry(&mut self, entry: &str) -> String {
        self.selection.commit(entry)
    }

    /// Keystroke handler: schedules a debounced autocomplete lookup.
    ///
    /// Every call supersedes whatever lookup was pending or in flight.
    /// Queries shorter than the configured minimum clear the candidate list
    /// locally; a query still carrying the ` (count)` decoration of a chosen
    /// candidate is a re-selection and skips the network entirely.
    pub fn on_input(&mut self, query: &str) {
        let generation = self.lookup_gen.fetch_add(1, Ordering::SeqCst) + 1;

        if query.chars().count() < self.config.min_query_len {
            self.suggestions.lock().clear();
            return;
        }

        if selection::is_decorated(query) {
            return;
        }

        let api = Arc::clone(&self.api);
        let lookup_gen = Arc::clone(&self.lookup_gen);
        let suggestions = Arc::clone(&self.suggestions);
        let debounce = self.config.debounce;
        let query = query.to_string();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            // A newer keystroke arrived during the debounce window.
            if lookup_gen.load(Ordering::SeqCst) != generation {
                return;
            }

            match api.search_tags(&query).await {
                Ok(candidates) => {
                    // The response may have lost a race to a newer lookup.
                    if lookup_gen.load(Ordering::SeqCst) == generation {
                        *suggestions.lock() = candidates;
                    }
                }
                Err(error) => {
                    tracing::debug!(%error, %query, "tag lookup failed, no suggestions");
                }
            }
        }));
    }

    /// Snapshot of the current autocomplete candidates.
    pub fn suggestions(&self) -> Vec<TagCandidate> {
        self.suggestions.lock().clone()
    }

    /// Search handler: the navigation target for the current selection.
    ///
    /// Neutral tags are omitted; with no non-Neutral tags the base path is
    /// returned unchanged.
    pub fn search_path(&self, base: &str) -> String {
        self.selection.search_path(base)
    }

    /// Waits for the most recently scheduled lookup task to settle.
    ///
    /// Useful at teardown and in tests; event-driven callers normally never
    /// need this.
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TagSelector {
    fn drop(&mut self) {
        // An unmounted selector must not leave a lookup task behind.
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
