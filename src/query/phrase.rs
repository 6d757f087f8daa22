//! Phrase query implementation for proximity matching.

use serde::{Deserialize, Serialize};

/// Default maximum distance between matched positions.
pub const DEFAULT_SLOP: u32 = 1;

/// A query that matches documents where the terms occur close together.
///
/// The slop bounds the absolute position distance checked between term
/// occurrences; a slop of 1 accepts directly adjacent terms in either order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseQuery {
    /// The terms that make up the phrase, in order.
    pub terms: Vec<String>,
    /// Maximum allowed position distance.
    #[serde(default = "default_slop")]
    pub slop: u32,
}

fn default_slop() -> u32 {
    DEFAULT_SLOP
}

impl PhraseQuery {
    /// Create a new phrase query with the default slop.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PhraseQuery {
            terms: terms.into_iter().map(Into::into).collect(),
            slop: DEFAULT_SLOP,
        }
    }

    /// Create a phrase query from a phrase string split on whitespace.
    ///
    /// The words are used verbatim; no case folding is applied.
    pub fn from_phrase(phrase: &str) -> Self {
        Self::new(phrase.split_whitespace())
    }

    /// Set the slop (maximum distance between terms).
    pub fn with_slop(mut self, slop: u32) -> Self {
        self.slop = slop;
        self
    }

    /// Get the terms.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Get the slop.
    pub fn slop(&self) -> u32 {
        self.slop
    }

    /// A phrase query is empty when it has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for PhraseQuery {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_query() {
        let query = PhraseQuery::new(["drink", "pink", "ink"]);
        assert_eq!(query.terms(), &["drink", "pink", "ink"]);
        assert_eq!(query.slop(), 1);
        assert!(!query.is_empty());
        assert!(PhraseQuery::default().is_empty());
    }

    #[test]
    fn test_from_phrase() {
        let query = PhraseQuery::from_phrase("  likes \t to drink ").with_slop(2);
        assert_eq!(query.terms, vec!["likes", "to", "drink"]);
        assert_eq!(query.slop, 2);
    }

    #[test]
    fn test_deserialize_default_slop() {
        let query: PhraseQuery = serde_json::from_str(r#"{"terms": ["pink", "ink"]}"#).unwrap();
        assert_eq!(query, PhraseQuery::new(["pink", "ink"]));
    }
}
