//! Retrieval models.
//!
//! A model borrows a built [`InvertedIndex`](crate::index::inverted::InvertedIndex)
//! and turns a structured query into the ascending IDs of the matching
//! documents. Results are unranked.

pub mod boolean;
pub mod merge;
pub mod phrase;

pub use boolean::BooleanSearch;
pub use phrase::PhraseSearch;

use crate::index::posting::DocId;

/// A retrieval model evaluating one kind of query.
pub trait SearchModel {
    /// The query type this model evaluates.
    type Query;

    /// Return the ascending IDs of the documents matching `query`.
    fn search(&self, query: &Self::Query) -> Vec<DocId>;
}
