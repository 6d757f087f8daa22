//! Boolean retrieval model.

use crate::index::inverted::InvertedIndex;
use crate::index::posting::{DocId, Posting, Term};
use crate::query::{BoolQuery, Occur};
use crate::search::SearchModel;
use crate::search::merge::{difference, intersect, union};

/// Evaluates [`BoolQuery`]s with set operations over sorted posting lists.
///
/// A `must_not`-only query keeps the documents of its rarest term that
/// contain none of the other terms.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use lectern::analysis::tokenizer::standard::StandardTokenizer;
/// use lectern::index::writer::Indexer;
/// use lectern::query::BoolQuery;
/// use lectern::search::{BooleanSearch, SearchModel};
///
/// let index = Indexer::new(Arc::new(StandardTokenizer::new()))
///     .build(["pink ink", "blue ink", "pink paint"])
///     .unwrap();
/// let search = BooleanSearch::new(&index);
///
/// assert_eq!(search.search(&BoolQuery::new().must(["pink", "ink"])), vec![1]);
/// assert_eq!(search.search(&BoolQuery::new().should(["blue", "paint"])), vec![2, 3]);
/// assert_eq!(search.search(&BoolQuery::new().must_not(["ink", "paint"])), vec![3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BooleanSearch<'a> {
    index: &'a InvertedIndex,
}

impl<'a> BooleanSearch<'a> {
    /// Create a model over `index`.
    pub fn new(index: &'a InvertedIndex) -> Self {
        BooleanSearch { index }
    }

    /// Get the index this model searches.
    pub fn index(&self) -> &'a InvertedIndex {
        self.index
    }

    /// Every document referenced by the index, ascending.
    pub fn all_documents(&self) -> Vec<DocId> {
        self.index.all_doc_ids().to_vec()
    }

    /// Look up `terms`, dropping unknown ones, and order the rest rarest
    /// first by document frequency. Ties keep query order.
    pub fn resolve<'q, I>(&self, terms: I) -> Vec<&'a Term>
    where
        I: IntoIterator<Item = &'q str>,
    {
        let mut resolved = Vec::new();
        for term in terms {
            match self.index.get(term) {
                Some(entry) => resolved.push(entry),
                None => tracing::trace!(term, "dropping term missing from index"),
            }
        }
        resolved.sort_by_key(|term| term.document_frequency);
        resolved
    }

    /// Fold `merge` over the posting lists of `terms`, starting from the
    /// first, stopping once the accumulated list is empty.
    pub(crate) fn fold<F>(terms: &[&'a Term], merge: F) -> Vec<DocId>
    where
        F: Fn(&[&'a Posting], &[&'a Posting]) -> Vec<&'a Posting>,
    {
        let Some((first, rest)) = terms.split_first() else {
            return Vec::new();
        };

        let mut result: Vec<&'a Posting> = first.postings.iter().collect();
        for term in rest {
            if result.is_empty() {
                break;
            }
            let next: Vec<&'a Posting> = term.postings.iter().collect();
            result = merge(&result, &next);
        }

        result.iter().map(|posting| posting.doc_id).collect()
    }
}

impl SearchModel for BooleanSearch<'_> {
    type Query = BoolQuery;

    fn search(&self, query: &BoolQuery) -> Vec<DocId> {
        let Some(operator) = query.operator() else {
            return self.all_documents();
        };

        let terms = self.resolve(query.get_all());
        tracing::debug!(
            query = %query,
            ?operator,
            resolved = terms.len(),
            "boolean search"
        );

        match operator {
            Occur::Must => Self::fold(&terms, intersect),
            Occur::Should => Self::fold(&terms, union),
            Occur::MustNot => Self::fold(&terms, difference),
        }
    }
}
