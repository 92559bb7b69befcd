//! The tag filter state machine.
//!
//! [`TagSelection`] holds an ordered sequence of [`TagToken`]s with at most
//! one token per distinct tag name. It is a pure, synchronous structure: all
//! network and timing concerns live in [`selector`](crate::selector). The
//! selection covers the full lifecycle of a filter:
//!
//! - decode the incoming `tags` URL parameter ([`TagSelection::parse_query`])
//! - seed server-suggested top tags as Neutral ([`TagSelection::seed_neutral`])
//! - advance a tag's polarity on click ([`TagSelection::cycle`])
//! - commit a typed entry with toggle-to-include semantics
//!   ([`TagSelection::commit`])
//! - re-encode the non-Neutral subset for navigation
//!   ([`TagSelection::serialize`], [`TagSelection::search_path`])
//!
//! # Examples
//!
//! ```rust
//! use shiori::selection::TagSelection;
//!
//! let mut selection = TagSelection::parse_query("magic,-romance");
//! selection.seed_neutral("isekai");
//!
//! assert_eq!(
//!     selection.search_path("/browse/page-1?"),
//!     "/browse/page-1?tags=magic,-romance"
//! );
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Polarity, TagToken};

/// Matches the ` (count)` decoration a chosen autocomplete candidate carries,
/// e.g. `romance (412)`.
static COUNT_DECORATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" \(\d+\)").expect("Failed to compile decoration regex"));

/// Strips the first ` (count)` decoration from a typed entry, if present.
pub(crate) fn strip_decoration(entry: &str) -> String {
    COUNT_DECORATION.replace(entry, "").into_owned()
}

/// Returns whether a query is a re-selected candidate rather than a fresh
/// search prefix (it still carries the ` (count)` decoration).
pub(crate) fn is_decorated(query: &str) -> bool {
    COUNT_DECORATION.is_match(query)
}

/// An ordered tag filter with include / exclude / neutral polarities.
///
/// Invariant: at most one token per distinct tag name. Token order is
/// preserved across mutations so the rendered tag list stays stable under
/// clicks.
///
/// # Examples
///
/// ```rust
/// use shiori::selection::TagSelection;
/// use shiori::types::Polarity;
///
/// let mut selection = TagSelection::new();
/// selection.commit("magic");
/// selection.cycle("magic");
/// assert_eq!(selection.polarity_of("magic"), Some(Polarity::Exclude));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    tokens: Vec<TagToken>,
}

impl TagSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the `tags` URL query parameter.
    ///
    /// The parameter is a comma-separated list of prefixed tokens; each entry
    /// already carries its polarity. Empty entries (stray commas) are
    /// skipped, and a repeated name keeps only its first occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiori::selection::TagSelection;
    /// use shiori::types::Polarity;
    ///
    /// let selection = TagSelection::parse_query("magic,-romance,");
    /// assert_eq!(selection.len(), 2);
    /// assert_eq!(selection.polarity_of("romance"), Some(Polarity::Exclude));
    /// ```
    pub fn parse_query(tags: &str) -> Self {
        let mut selection = Self::new();
        for raw in tags.split(',') {
            if let Some(token) = TagToken::parse(raw) {
                if !selection.contains(&token.name) {
                    selection.tokens.push(token);
                }
            }
        }
        selection
    }

    /// The tokens in order.
    pub fn tokens(&self) -> &[TagToken] {
        &self.tokens
    }

    /// Number of tokens in the selection.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the selection holds no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether a tag is present under any polarity.
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.iter().any(|t| t.name == name)
    }

    /// The polarity of a tag, if present.
    pub fn polarity_of(&self, name: &str) -> Option<Polarity> {
        self.tokens.iter().find(|t| t.name == name).map(|t| t.polarity)
    }

    /// Advances a tag's polarity one step in the cycle
    /// Include → Exclude → Neutral → Include, preserving its position.
    ///
    /// Only the first matching token is mutated. The selection never holds
    /// duplicates for one name, but the scan still breaks after the first hit
    /// rather than rewriting every match. Unknown names are a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiori::selection::TagSelection;
    /// use shiori::types::Polarity;
    ///
    /// let mut selection = TagSelection::parse_query("magic");
    /// selection.cycle("magic");
    /// selection.cycle("magic");
    /// selection.cycle("magic");
    /// // The cycle is closed with period 3.
    /// assert_eq!(selection.polarity_of("magic"), Some(Polarity::Include));
    /// ```
    pub fn cycle(&mut self, name: &str) {
        for token in &mut self.tokens {
            if token.name == name {
                token.polarity = token.polarity.next();
                break;
            }
        }
    }

    /// Commits a typed entry with toggle-to-include semantics.
    ///
    /// Any ` (count)` decoration left over from picking an autocomplete
    /// candidate is stripped first. A name absent from the selection is
    /// appended as Include; a name present as Exclude or Neutral is rewritten
    /// to Include in place. A name already Included is left untouched. This
    /// is distinct from the click cycle: Enter always lands on Include and
    /// never duplicates a token.
    ///
    /// Returns the committed bare name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiori::selection::TagSelection;
    /// use shiori::types::Polarity;
    ///
    /// let mut selection = TagSelection::parse_query("~isekai");
    /// selection.commit("isekai");
    /// assert_eq!(selection.polarity_of("isekai"), Some(Polarity::Include));
    /// assert_eq!(selection.len(), 1);
    ///
    /// selection.commit("romance (412)");
    /// assert_eq!(selection.polarity_of("romance"), Some(Polarity::Include));
    /// ```
    pub fn commit(&mut self, entry: &str) -> String {
        let name = strip_decoration(entry);

        match self.tokens.iter_mut().find(|t| t.name == name) {
            Some(token) => token.polarity = Polarity::Include,
            None => {
                if !name.is_empty() {
                    self.tokens.push(TagToken::new(name.clone(), Polarity::Include));
                }
            }
        }

        name
    }

    /// Appends a tag as Neutral unless it is already present under any
    /// polarity.
    ///
    /// Used during initialization to seed the server's top-tag list behind
    /// whatever the URL already pinned down.
    pub fn seed_neutral(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() && !self.contains(&name) {
            self.tokens.push(TagToken::new(name, Polarity::Neutral));
        }
    }

    /// Serializes the non-Neutral tokens back into `tags` parameter form.
    ///
    /// Include tokens are bare, Exclude tokens are `-`-prefixed, Neutral
    /// tokens are never serialized. Returns `None` when no non-Neutral token
    /// exists, so callers can omit the parameter entirely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiori::selection::TagSelection;
    ///
    /// let selection = TagSelection::parse_query("magic,-romance");
    /// assert_eq!(selection.serialize().as_deref(), Some("magic,-romance"));
    ///
    /// let mut neutral_only = TagSelection::new();
    /// neutral_only.seed_neutral("isekai");
    /// assert_eq!(neutral_only.serialize(), None);
    /// ```
    pub fn serialize(&self) -> Option<String> {
        let encoded: Vec<String> = self
            .tokens
            .iter()
            .filter(|t| t.polarity != Polarity::Neutral)
            .map(|t| t.encoded())
            .collect();

        if encoded.is_empty() {
            None
        } else {
            Some(encoded.join(","))
        }
    }

    /// Builds the navigation target for the search action.
    ///
    /// Appends `tags=<serialized list>` to the caller-supplied base path when
    /// any non-Neutral token exists; otherwise the base path is returned
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiori::selection::TagSelection;
    ///
    /// let mut selection = TagSelection::parse_query("magic,-romance");
    /// selection.seed_neutral("isekai");
    /// assert_eq!(
    ///     selection.search_path("/browse/page-1?"),
    ///     "/browse/page-1?tags=magic,-romance"
    /// );
    /// ```
    pub fn search_path(&self, base: &str) -> String {
        match self.serialize() {
            Some(tags) => format!("{base}tags={tags}"),
            None => base.to_string(),
        }
    }
}
