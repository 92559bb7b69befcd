//! Tag backend API: trait seam, HTTP implementation, and response DTOs.
//!
//! [`TagApi`] abstracts the two read-only endpoints the tag filter talks to,
//! so the selector and cache can be driven by a mock in tests. [`HttpTagApi`]
//! is the production implementation on top of a shared reqwest client.
//!
//! # Endpoints
//!
//! - `GET {base}/api/toptags` → `{ "content": ["name", ...] }`
//! - `GET {base}/api/search_tags?query=<prefix>` →
//!   `{ "content": [["name", count], ...] }`
//!
//! # Examples
//!
//! ```rust,no_run
//! use shiori::api::{HttpTagApi, TagApi};
//!
//! # async fn example() -> shiori::Result<()> {
//! let api = HttpTagApi::new("https://novels.example.com");
//! let top = api.top_tags().await?;
//! let candidates = api.search_tags("rom").await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{error::Result, types::TagCandidate};

/// Shared HTTP client instance.
///
/// Configured with a 30-second timeout, connection pooling, and compression
/// support. Created lazily on first use and reused across all requests.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("Shiori/0.1.0")
        .pool_max_idle_per_host(10)
        .gzip(true)
        .brotli(true)
        .build()
        .expect("Failed to build HTTP client")
});

/// Wire shape of the top-tags endpoint.
#[derive(Debug, Deserialize)]
struct TagListResponse {
    #[serde(default)]
    content: Vec<String>,
}

/// Wire shape of the tag search endpoint. Each entry is a `[name, count]`
/// pair, deserialized straight into [`TagCandidate`].
#[derive(Debug, Deserialize)]
struct TagSearchResponse {
    #[serde(default)]
    content: Vec<TagCandidate>,
}

/// The read-only tag backend the filter component talks to.
///
/// Both methods are plain lookups with no side effects. Implementations
/// should return detailed errors; the callers decide whether to surface or
/// absorb them (the selector and cache absorb).
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use shiori::api::TagApi;
/// use shiori::types::TagCandidate;
/// use shiori::Result;
///
/// struct FixedApi;
///
/// #[async_trait]
/// impl TagApi for FixedApi {
///     async fn top_tags(&self) -> Result<Vec<String>> {
///         Ok(vec!["isekai".to_string()])
///     }
///
///     async fn search_tags(&self, prefix: &str) -> Result<Vec<TagCandidate>> {
///         Ok(vec![TagCandidate::new(prefix, 1)])
///     }
/// }
/// ```
#[async_trait]
pub trait TagApi: Send + Sync {
    /// Fetches the server-suggested top-tag list, in display order.
    async fn top_tags(&self) -> Result<Vec<String>>;

    /// Looks up tags matching a query prefix, with occurrence counts.
    async fn search_tags(&self, prefix: &str) -> Result<Vec<TagCandidate>>;
}

/// HTTP implementation of [`TagApi`] against a novel aggregation backend.
///
/// # Examples
///
/// ```rust
/// use shiori::api::HttpTagApi;
///
/// let api = HttpTagApi::new("https://novels.example.com");
/// ```
#[derive(Debug, Clone)]
pub struct HttpTagApi {
    base_url: String,
}

impl HttpTagApi {
    /// Creates a client for the given backend base URL.
    ///
    /// A trailing slash on the base URL is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The backend base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a GET request against a backend path and returns the body.
    ///
    /// # Errors
    ///
    /// * [`Error::Api`](crate::Error::Api) - for non-success HTTP statuses
    /// * [`Error::Network`](crate::Error::Network) - for transport errors
    async fn get(&self, path: &str) -> Result<Bytes> {
        let url = format!("{}{}", self.base_url, path);
        let response = CLIENT.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(crate::Error::api(path, response.status().as_u16()));
        }

        Ok(response.bytes().await?)
    }

    /// Performs a GET request and deserializes the response as JSON.
    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let bytes = self.get(path).await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

#[async_trait]
impl TagApi for HttpTagApi {
    async fn top_tags(&self) -> Result<Vec<String>> {
        let response: TagListResponse = self.get_json("/api/toptags").await?;
        Ok(response.content)
    }

    async fn search_tags(&self, prefix: &str) -> Result<Vec<TagCandidate>> {
        let path = format!("/api/search_tags?query={}", urlencoding::encode(prefix));
        let response: TagSearchResponse = self.get_json(&path).await?;
        Ok(response.content)
    }
}
