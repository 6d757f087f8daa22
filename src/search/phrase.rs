//! Phrase retrieval model.

use crate::index::inverted::InvertedIndex;
use crate::index::posting::DocId;
use crate::query::PhraseQuery;
use crate::search::SearchModel;
use crate::search::boolean::BooleanSearch;
use crate::search::merge::positional_intersect;

/// Evaluates [`PhraseQuery`]s with positional intersection.
///
/// Terms are folded rarest first, and each step checks the rarest term's own
/// positions against the next term's. Matches are therefore pairwise with the
/// rarest term rather than consistent across the whole phrase, and word order
/// is not enforced.
#[derive(Debug, Clone, Copy)]
pub struct PhraseSearch<'a> {
    boolean: BooleanSearch<'a>,
}

impl<'a> PhraseSearch<'a> {
    /// Create a model over `index`.
    pub fn new(index: &'a InvertedIndex) -> Self {
        PhraseSearch {
            boolean: BooleanSearch::new(index),
        }
    }
}

impl SearchModel for PhraseSearch<'_> {
    type Query = PhraseQuery;

    fn search(&self, query: &PhraseQuery) -> Vec<DocId> {
        if query.is_empty() {
            return self.boolean.all_documents();
        }

        let terms = self.boolean.resolve(query.terms.iter().map(String::as_str));
        tracing::debug!(
            terms = ?query.terms,
            slop = query.slop,
            resolved = terms.len(),
            "phrase search"
        );

        let slop = query.slop;
        BooleanSearch::fold(&terms, move |acc, next| positional_intersect(acc, next, slop))
    }
}
