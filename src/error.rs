//! Error types and result handling for Shiori operations.
//!
//! All fallible operations in the API layer return a [`Result<T>`], a type
//! alias for `std::result::Result<T, Error>`. Note that the selector and
//! cache layers deliberately absorb these errors: the tag filter is
//! decorative relative to the page's primary content, so a failed fetch
//! degrades to "no suggestions" / "no seeded top tags" instead of surfacing.
//!
//! # Examples
//!
//! ```rust
//! use shiori::error::{Error, Result};
//!
//! fn check(status: u16) -> Result<()> {
//!     if status == 200 {
//!         Ok(())
//!     } else {
//!         Err(Error::api("/api/toptags", status))
//!     }
//! }
//! ```

use thiserror::Error;

/// Type alias for Results with Shiori errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the tag API layer.
///
/// # Variants
///
/// * [`Network`](Error::Network) - HTTP client and connection errors
/// * [`Json`](Error::Json) - response deserialization failures
/// * [`Api`](Error::Api) - non-success HTTP statuses with endpoint context
#[derive(Error, Debug)]
pub enum Error {
    /// Network-related errors from HTTP operations.
    ///
    /// Wraps errors from the underlying HTTP client (reqwest): connection
    /// timeouts, DNS resolution failures, TLS errors, and transport issues.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON deserialization errors.
    ///
    /// Wraps serde_json errors produced while decoding a tag endpoint
    /// response body.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success HTTP status from a tag endpoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiori::Error;
    ///
    /// let error = Error::api("/api/search_tags", 503);
    /// assert!(format!("{error}").contains("503"));
    /// ```
    #[error("API error [{endpoint}]: HTTP {status}")]
    Api { endpoint: String, status: u16 },
}

impl Error {
    /// Creates an API error with endpoint context and HTTP status.
    pub fn api(endpoint: impl Into<String>, status: u16) -> Self {
        Error::Api {
            endpoint: endpoint.into(),
            status,
        }
    }
}
