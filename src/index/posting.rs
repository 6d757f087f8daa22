//! Postings and terms of the inverted index.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Document identifier, assigned by the indexer from 1 in arrival order.
pub type DocId = u64;

/// One document's occurrence record for one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Document ID.
    pub doc_id: DocId,
    /// Strictly increasing 1-based positions of the term in the document.
    pub positions: Vec<u32>,
}

impl Posting {
    /// Create a posting with positions.
    pub fn new(doc_id: DocId, positions: Vec<u32>) -> Self {
        Posting { doc_id, positions }
    }

    /// Add a position to this posting.
    pub fn add_position(&mut self, position: u32) {
        self.positions.push(position);
    }

    /// Get the term frequency.
    pub fn term_frequency(&self) -> usize {
        self.positions.len()
    }
}

impl fmt::Display for Posting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: Vec<String> = self.positions.iter().map(u32::to_string).collect();
        write!(
            f,
            "{},{}: [{}]",
            self.doc_id,
            self.term_frequency(),
            positions.join(",")
        )
    }
}

/// All postings for one vocabulary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Postings, strictly increasing by document ID.
    pub postings: Vec<Posting>,
    /// Total number of occurrences across all postings.
    ///
    /// This is the sum of term frequencies, not the number of documents; see
    /// [`Term::distinct_documents`] for the latter.
    pub document_frequency: usize,
}

impl Term {
    /// Create a new empty term.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a term from postings already sorted by document ID.
    pub fn from_postings(postings: Vec<Posting>) -> Self {
        let document_frequency = postings.iter().map(Posting::term_frequency).sum();
        Term {
            postings,
            document_frequency,
        }
    }

    /// Record one occurrence of the term.
    ///
    /// Documents arrive in increasing ID order, so the posting for `doc_id` is
    /// either the last one in the list or does not exist yet.
    pub fn add_occurrence(&mut self, doc_id: DocId, position: u32) {
        match self.postings.last_mut() {
            Some(last) if last.doc_id == doc_id => last.add_position(position),
            _ => self.postings.push(Posting::new(doc_id, vec![position])),
        }
        self.document_frequency += 1;
    }

    /// Number of documents that contain the term.
    pub fn distinct_documents(&self) -> usize {
        self.postings.len()
    }

    /// Get the postings.
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting() {
        let mut posting = Posting::new(3, vec![2]);
        posting.add_position(7);

        assert_eq!(posting.term_frequency(), 2);
        assert_eq!(posting.to_string(), "3,2: [2,7]");
    }

    #[test]
    fn test_add_occurrence_groups_by_document() {
        let mut term = Term::new();
        term.add_occurrence(1, 2);
        term.add_occurrence(1, 5);
        term.add_occurrence(4, 1);

        assert_eq!(
            term.postings,
            vec![Posting::new(1, vec![2, 5]), Posting::new(4, vec![1])]
        );
        assert_eq!(term.document_frequency, 3);
        assert_eq!(term.distinct_documents(), 2);
    }

    #[test]
    fn test_from_postings() {
        let term = Term::from_postings(vec![
            Posting::new(2, vec![1, 4, 6]),
            Posting::new(3, vec![5]),
        ]);
        assert_eq!(term.document_frequency, 4);
        assert_eq!(term.distinct_documents(), 2);
    }
}
