//! Read-only positional inverted index.

use ahash::AHashMap;

use crate::index::posting::{DocId, Term};

/// Statistics about an index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexStats {
    /// Number of documents fed to the build.
    pub doc_count: u64,

    /// Number of unique terms in the index.
    pub term_count: u64,

    /// Number of postings across all terms.
    pub posting_count: u64,

    /// Average posting-list length.
    pub avg_postings_per_term: f64,

    /// Longest posting list.
    pub max_postings_per_term: u64,
}

/// A mapping from normalized term to its [`Term`] entry.
///
/// Built once by an [`Indexer`](crate::index::writer::Indexer) and never
/// mutated afterwards, so any number of searches may borrow it concurrently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvertedIndex {
    terms: AHashMap<String, Term>,
    doc_ids: Vec<DocId>,
    doc_count: u64,
}

impl InvertedIndex {
    pub(crate) fn from_parts(
        terms: AHashMap<String, Term>,
        doc_ids: Vec<DocId>,
        doc_count: u64,
    ) -> Self {
        InvertedIndex {
            terms,
            doc_ids,
            doc_count,
        }
    }

    /// Look up a term.
    pub fn get(&self, term: &str) -> Option<&Term> {
        self.terms.get(term)
    }

    /// Check whether a term is in the index.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Iterate over every `(term, entry)` pair in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.terms.iter().map(|(text, term)| (text.as_str(), term))
    }

    /// Number of unique terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of documents fed to the build, including ones that produced no
    /// tokens.
    pub fn doc_count(&self) -> u64 {
        self.doc_count
    }

    /// Ascending IDs of every document referenced by at least one posting.
    pub fn all_doc_ids(&self) -> &[DocId] {
        &self.doc_ids
    }

    /// Check if the index holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute index statistics.
    pub fn stats(&self) -> IndexStats {
        let posting_count: usize = self.terms.values().map(Term::distinct_documents).sum();
        let max_postings_per_term = self
            .terms
            .values()
            .map(Term::distinct_documents)
            .max()
            .unwrap_or(0);
        let avg_postings_per_term = if self.terms.is_empty() {
            0.0
        } else {
            posting_count as f64 / self.terms.len() as f64
        };

        IndexStats {
            doc_count: self.doc_count,
            term_count: self.terms.len() as u64,
            posting_count: posting_count as u64,
            avg_postings_per_term,
            max_postings_per_term: max_postings_per_term as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::posting::Posting;

    fn sample() -> InvertedIndex {
        let mut terms = AHashMap::new();
        terms.insert(
            "ink".to_string(),
            Term::from_postings(vec![Posting::new(1, vec![2]), Posting::new(3, vec![1, 4])]),
        );
        terms.insert(
            "pink".to_string(),
            Term::from_postings(vec![Posting::new(3, vec![3])]),
        );
        InvertedIndex::from_parts(terms, vec![1, 3], 4)
    }

    #[test]
    fn test_lookup() {
        let index = sample();
        assert!(index.contains("ink"));
        assert!(index.get("blue").is_none());
        assert_eq!(index.get("ink").map(|t| t.document_frequency), Some(3));
        assert_eq!(index.term_count(), 2);
        assert_eq!(index.doc_count(), 4);
        assert_eq!(index.all_doc_ids(), &[1, 3]);
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.term_count, 2);
        assert_eq!(stats.posting_count, 3);
        assert_eq!(stats.max_postings_per_term, 2);
        assert!((stats.avg_postings_per_term - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_stats() {
        let index = InvertedIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.stats().avg_postings_per_term, 0.0);
        assert!(index.all_doc_ids().is_empty());
    }
}
