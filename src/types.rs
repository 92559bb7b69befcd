//! Core data types for tag tokens, polarities, and autocomplete candidates.
//!
//! This module defines the fundamental data structures used throughout Shiori:
//!
//! - [`Polarity`] - The three-state filter polarity of a tag
//! - [`TagToken`] - A tag name paired with its polarity
//! - [`TagCandidate`] - An autocomplete suggestion with its occurrence count
//!
//! Polarity is a structured enum everywhere inside the crate; the historical
//! prefix convention (`-` for exclude, `~` for neutral, bare for include) only
//! exists at the URL/query-string boundary, handled by [`TagToken::parse`] and
//! [`TagToken::encoded`].
//!
//! # Examples
//!
//! ```rust
//! use shiori::types::{Polarity, TagToken};
//!
//! let token = TagToken::parse("-romance").unwrap();
//! assert_eq!(token.name, "romance");
//! assert_eq!(token.polarity, Polarity::Exclude);
//! assert_eq!(token.encoded(), "-romance");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The filter polarity of a tag in a selection.
///
/// * `Include` - results must carry the tag
/// * `Exclude` - results must not carry the tag
/// * `Neutral` - shown to the user but not filtered on
///
/// Neutral tags exist so that server-suggested "top tags" can be rendered as
/// clickable seeds without affecting the search until the user picks a side.
///
/// # Examples
///
/// ```rust
/// use shiori::types::Polarity;
///
/// // Clicking a rendered tag advances its polarity in a closed cycle.
/// assert_eq!(Polarity::Include.next(), Polarity::Exclude);
/// assert_eq!(Polarity::Exclude.next(), Polarity::Neutral);
/// assert_eq!(Polarity::Neutral.next(), Polarity::Include);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Results must have this tag.
    Include,
    /// Results must not have this tag.
    Exclude,
    /// Displayed but not part of the query.
    Neutral,
}

impl Polarity {
    /// Advances one step in the click cycle Include → Exclude → Neutral → Include.
    pub fn next(self) -> Self {
        match self {
            Polarity::Include => Polarity::Exclude,
            Polarity::Exclude => Polarity::Neutral,
            Polarity::Neutral => Polarity::Include,
        }
    }

    /// The prefix this polarity carries in the query-string encoding.
    pub fn prefix(self) -> &'static str {
        match self {
            Polarity::Include => "",
            Polarity::Exclude => "-",
            Polarity::Neutral => "~",
        }
    }
}

/// A single tag name paired with its polarity, as carried in a
/// [`TagSelection`](crate::selection::TagSelection).
///
/// # Examples
///
/// ```rust
/// use shiori::types::{Polarity, TagToken};
///
/// let magic = TagToken::new("magic", Polarity::Include);
/// assert_eq!(magic.encoded(), "magic");
///
/// let isekai = TagToken::parse("~isekai").unwrap();
/// assert_eq!(isekai.polarity, Polarity::Neutral);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagToken {
    /// Bare tag name, without any polarity prefix.
    pub name: String,

    /// Current polarity of the tag.
    pub polarity: Polarity,
}

impl TagToken {
    /// Creates a token from a bare name and a polarity.
    pub fn new(name: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            name: name.into(),
            polarity,
        }
    }

    /// Decodes a prefixed token as found in the `tags` URL parameter.
    ///
    /// Returns `None` for empty input (stray commas in the parameter produce
    /// empty entries, which callers skip).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiori::types::{Polarity, TagToken};
    ///
    /// assert_eq!(TagToken::parse("magic").unwrap().polarity, Polarity::Include);
    /// assert_eq!(TagToken::parse("-ecchi").unwrap().polarity, Polarity::Exclude);
    /// assert!(TagToken::parse("").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let (polarity, name) = if let Some(rest) = raw.strip_prefix('-') {
            (Polarity::Exclude, rest)
        } else if let Some(rest) = raw.strip_prefix('~') {
            (Polarity::Neutral, rest)
        } else {
            (Polarity::Include, raw)
        };

        if name.is_empty() {
            return None;
        }

        Some(Self::new(name, polarity))
    }

    /// Renders the prefixed form used at the serialization boundary.
    pub fn encoded(&self) -> String {
        format!("{}{}", self.polarity.prefix(), self.name)
    }
}

/// An autocomplete suggestion: a tag name plus how many novels carry it.
///
/// Candidates come from the tag search endpoint as `[name, count]` pairs and
/// render as `name (count)` in suggestion lists.
///
/// # Examples
///
/// ```rust
/// use shiori::types::TagCandidate;
///
/// let candidate = TagCandidate::new("romance", 412);
/// assert_eq!(candidate.to_string(), "romance (412)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, u64)")]
pub struct TagCandidate {
    /// Bare tag name.
    pub name: String,

    /// Number of novels carrying this tag.
    pub count: u64,
}

impl TagCandidate {
    /// Creates a candidate from a name and an occurrence count.
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

impl From<(String, u64)> for TagCandidate {
    fn from((name, count): (String, u64)) -> Self {
        Self { name, count }
    }
}

impl fmt::Display for TagCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.count)
    }
}
