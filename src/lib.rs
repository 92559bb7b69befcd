//! # Shiori - Tag filter state and autocomplete library for novel browsing frontends
//!
//! Shiori models the tag filter of a light-novel search page as a proper state
//! machine: an ordered selection of tags, each Include, Exclude, or Neutral,
//! kept in sync with the `tags` URL query parameter and fed by a debounced
//! remote autocomplete lookup. The crate is frontend-toolkit agnostic - it
//! owns the state and the backend traffic, the caller owns the rendering.
//!
//! ## Features
//!
//! - **Three-state polarity model**: Include / Exclude / Neutral as a
//!   structured enum; the `-`/`~` prefix convention exists only at the URL
//!   boundary
//! - **Click cycle**: Include → Exclude → Neutral → Include, closed with
//!   period 3
//! - **URL round-trip**: parse the incoming `tags` parameter verbatim and
//!   re-serialize only the non-Neutral subset on search
//! - **Top-tag seeding**: server-suggested tags appear as Neutral seeds,
//!   cached per session with an explicit TTL
//! - **Debounced autocomplete**: generation-stamped lookups so a stale
//!   response can never overwrite a newer one
//! - **Soft degradation**: backend failures degrade to "no suggestions" /
//!   "no seeds" instead of surfacing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shiori::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let api = Arc::new(HttpTagApi::new("https://novels.example.com"));
//!     let cache = Arc::new(TopTagCache::new(None));
//!     let mut selector = TagSelector::new(api, cache);
//!
//!     // Page mount: URL tags keep their polarity, top tags seed as Neutral.
//!     selector.init("magic,-romance").await;
//!
//!     // User interaction.
//!     selector.cycle_tag("magic");
//!     selector.on_input("rom");
//!     selector.commit_entry("romance (412)");
//!
//!     // Search button.
//!     let target = selector.search_path("/browse/page-1?");
//!     println!("navigate to {target}");
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`selection`]: the pure tag filter state machine
//! - [`selector`]: the event-driven component around it (init, debounce,
//!   search)
//! - [`types`]: polarity, token, and candidate types
//! - [`api`]: the backend trait seam and its reqwest implementation
//! - [`cache`]: the session-scoped top-tag cache
//! - [`error`]: error handling for the API layer

pub mod api;
pub mod cache;
pub mod error;
pub mod selection;
pub mod selector;
pub mod types;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use shiori::prelude::*;
///
/// // Now you have access to:
/// // - TagSelector, SelectorConfig
/// // - TagSelection
/// // - TagApi, HttpTagApi
/// // - TopTagCache
/// // - Polarity, TagToken, TagCandidate
/// ```
pub mod prelude {
    pub use crate::{
        api::{HttpTagApi, TagApi},
        cache::TopTagCache,
        selection::TagSelection,
        selector::{SelectorConfig, SelectorConfigBuilder, TagSelector},
        types::{Polarity, TagCandidate, TagToken},
    };
}

// Re-export main types at crate root for direct access
pub use api::{HttpTagApi, TagApi};
pub use cache::TopTagCache;
pub use error::{Error, Result};
pub use selection::TagSelection;
pub use selector::{SelectorConfig, TagSelector};
pub use types::{Polarity, TagCandidate, TagToken};
