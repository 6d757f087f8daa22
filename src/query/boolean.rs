//! Boolean query over plain terms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Occurrence requirements for boolean clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occur {
    /// The clause must match (equivalent to AND).
    Must,
    /// The clause should match (equivalent to OR).
    Should,
    /// The clause must not match (equivalent to NOT).
    MustNot,
}

/// A query made of `must`, `should` and `must_not` term lists.
///
/// Only one of the three operators is applied to the whole query, picked by
/// [`BoolQuery::operator`]; mixing clause kinds in one query does not combine
/// their semantics.
///
/// # Example
///
/// ```
/// use lectern::query::{BoolQuery, Occur};
///
/// let query = BoolQuery::new().should(["wink", "ink"]);
/// assert_eq!(query.operator(), Some(Occur::Should));
/// assert_eq!(query.get_all(), vec!["wink", "ink"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolQuery {
    /// Terms every result must contain.
    pub must: Vec<String>,
    /// Terms of which results contain at least one.
    pub should: Vec<String>,
    /// Terms excluded from the results.
    pub must_not: Vec<String>,
}

impl BoolQuery {
    /// Create a new empty boolean query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `must` terms.
    pub fn must<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.must.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Add `should` terms.
    pub fn should<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.should.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Add `must_not` terms.
    pub fn must_not<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.must_not.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Add a single term under the given occurrence.
    pub fn add_term<S: Into<String>>(&mut self, term: S, occur: Occur) {
        let term = term.into();
        match occur {
            Occur::Must => self.must.push(term),
            Occur::Should => self.should.push(term),
            Occur::MustNot => self.must_not.push(term),
        }
    }

    /// A query is empty when all three lists are empty.
    pub fn is_empty(&self) -> bool {
        self.must.is_empty() && self.should.is_empty() && self.must_not.is_empty()
    }

    /// All terms in `must`, `should`, `must_not` order, duplicates kept.
    pub fn get_all(&self) -> Vec<&str> {
        self.must
            .iter()
            .chain(&self.should)
            .chain(&self.must_not)
            .map(String::as_str)
            .collect()
    }

    /// The operator applied to the whole query: the first non-empty list in
    /// `must`, `should`, `must_not` order. `None` for an empty query.
    pub fn operator(&self) -> Option<Occur> {
        if !self.must.is_empty() {
            Some(Occur::Must)
        } else if !self.should.is_empty() {
            Some(Occur::Should)
        } else if !self.must_not.is_empty() {
            Some(Occur::MustNot)
        } else {
            None
        }
    }
}

impl fmt::Display for BoolQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut clauses = Vec::new();
        for (prefix, terms) in [("+", &self.must), ("", &self.should), ("-", &self.must_not)] {
            clauses.extend(terms.iter().map(|term| format!("{prefix}{term}")));
        }
        write!(f, "{}", clauses.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        let query = BoolQuery::new();
        assert!(query.is_empty());
        assert!(query.get_all().is_empty());
        assert_eq!(query.operator(), None);
    }

    #[test]
    fn test_operator_precedence() {
        let query = BoolQuery::new().must_not(["thing"]).should(["ink"]);
        assert_eq!(query.operator(), Some(Occur::Should));

        let query = query.must(["he"]);
        assert_eq!(query.operator(), Some(Occur::Must));

        assert_eq!(
            BoolQuery::new().must_not(["thing"]).operator(),
            Some(Occur::MustNot)
        );
    }

    #[test]
    fn test_get_all_order_keeps_duplicates() {
        let mut query = BoolQuery::new().must_not(["c"]).should(["b"]).must(["a"]);
        query.add_term("a", Occur::Should);

        assert_eq!(query.get_all(), vec!["a", "b", "a", "c"]);
    }

    #[test]
    fn test_display() {
        let query = BoolQuery::new().must(["he"]).should(["ink"]).must_not(["wink"]);
        assert_eq!(query.to_string(), "+he ink -wink");
    }

    #[test]
    fn test_deserialize_partial() {
        let query: BoolQuery = serde_json::from_str(r#"{"should": ["wink", "ink"]}"#).unwrap();
        assert_eq!(query, BoolQuery::new().should(["wink", "ink"]));
    }
}
