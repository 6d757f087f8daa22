//! Single-pass construction of the inverted index.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use lectern::analysis::tokenizer::standard::StandardTokenizer;
//! use lectern::index::writer::Indexer;
//!
//! let indexer = Indexer::new(Arc::new(StandardTokenizer::new()));
//! let index = indexer.build(["He likes to wink", "He likes to drink"]).unwrap();
//!
//! let likes = index.get("likes").unwrap();
//! assert_eq!(likes.distinct_documents(), 2);
//! assert_eq!(likes.postings[1].positions, vec![2]);
//! ```

use std::sync::Arc;

use ahash::AHashMap;
use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::{DocId, Term};

/// Builds an [`InvertedIndex`] from an ordered corpus.
///
/// Documents get IDs 1, 2, 3, ... in iteration order. Each document's text
/// has its line breaks replaced by spaces before analysis.
#[derive(Clone)]
pub struct Indexer {
    analyzer: Arc<dyn Analyzer>,
}

impl Indexer {
    /// Create an indexer that analyzes documents with `tokenizer` alone.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Indexer {
            analyzer: Arc::new(PipelineAnalyzer::new(tokenizer)),
        }
    }

    /// Create an indexer from a tokenizer and a chain of filters, such as a
    /// stemmer.
    pub fn with_filters(tokenizer: Arc<dyn Tokenizer>, filters: Vec<Arc<dyn Filter>>) -> Self {
        let analyzer = filters
            .into_iter()
            .fold(PipelineAnalyzer::new(tokenizer), PipelineAnalyzer::add_filter);
        Indexer {
            analyzer: Arc::new(analyzer),
        }
    }

    /// Create an indexer from any analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        Indexer { analyzer }
    }

    /// Get the analyzer used by this indexer.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Build an index from `documents`.
    ///
    /// An analysis error aborts the build and no index is returned.
    pub fn build<I, S>(&self, documents: I) -> Result<InvertedIndex>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = IndexBuilder::default();
        for document in documents {
            let tokens = self.analyze(document.as_ref())?;
            builder.add_document(tokens);
        }
        Ok(builder.finish(self.analyzer.name()))
    }

    /// Build an index, analyzing documents in parallel.
    ///
    /// Postings are merged sequentially in document order afterwards, so the
    /// result equals [`Indexer::build`] on the same corpus.
    pub fn build_parallel<S>(&self, documents: &[S]) -> Result<InvertedIndex>
    where
        S: AsRef<str> + Sync,
    {
        let analyzed = documents
            .par_iter()
            .map(|document| self.analyze(document.as_ref()))
            .collect::<Result<Vec<TokenStream>>>()?;

        let mut builder = IndexBuilder::default();
        for tokens in analyzed {
            builder.add_document(tokens);
        }
        Ok(builder.finish(self.analyzer.name()))
    }

    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.analyzer.analyze(&normalize_line_breaks(text))
    }
}

impl std::fmt::Debug for Indexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Indexer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

/// Accumulates postings for documents fed in increasing ID order.
#[derive(Default)]
struct IndexBuilder {
    terms: AHashMap<String, Term>,
    doc_ids: Vec<DocId>,
    doc_count: u64,
}

impl IndexBuilder {
    fn add_document(&mut self, tokens: TokenStream) {
        self.doc_count += 1;
        let doc_id = self.doc_count;
        if !tokens.is_empty() {
            self.doc_ids.push(doc_id);
        }

        for token in tokens {
            self.terms
                .entry(token.text)
                .or_default()
                .add_occurrence(doc_id, token.position);
        }
        tracing::trace!(doc_id, terms = self.terms.len(), "indexed document");
    }

    fn finish(self, analyzer: &str) -> InvertedIndex {
        tracing::debug!(
            analyzer,
            documents = self.doc_count,
            terms = self.terms.len(),
            "built inverted index"
        );
        InvertedIndex::from_parts(self.terms, self.doc_ids, self.doc_count)
    }
}

fn normalize_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::stop::StopFilter;
    use crate::analysis::tokenizer::keyword::KeywordTokenizer;
    use crate::analysis::tokenizer::standard::StandardTokenizer;
    use crate::error::LecternError;
    use crate::index::posting::Posting;

    fn standard() -> Indexer {
        Indexer::new(Arc::new(StandardTokenizer::new()))
    }

    struct FailingTokenizer;

    impl Tokenizer for FailingTokenizer {
        fn tokenize(&self, text: &str) -> Result<TokenStream> {
            if text.contains("boom") {
                Err(LecternError::analysis("boom"))
            } else {
                StandardTokenizer::new().tokenize(text)
            }
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_positions_and_frequencies() {
        let index = standard()
            .build(["He likes to drink, and drink, and drink", "drink ink"])
            .unwrap();

        let drink = index.get("drink").unwrap();
        assert_eq!(
            drink.postings,
            vec![Posting::new(1, vec![4, 6, 8]), Posting::new(2, vec![1])]
        );
        assert_eq!(drink.document_frequency, 4);
        assert_eq!(drink.distinct_documents(), 2);
        assert_eq!(index.doc_count(), 2);
    }

    #[test]
    fn test_line_breaks_become_spaces() {
        let index = Indexer::new(Arc::new(KeywordTokenizer::new()))
            .build(["new\r\nyork\ncity\rhall"])
            .unwrap();
        assert!(index.contains("new york city hall"));
    }

    #[test]
    fn test_empty_documents_still_get_ids() {
        let index = standard().build(["ink", "   ", "pink ink"]).unwrap();

        assert_eq!(index.doc_count(), 3);
        assert_eq!(index.all_doc_ids(), &[1, 3]);
        let ids: Vec<DocId> = index.get("ink").unwrap().postings.iter().map(|p| p.doc_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_empty_corpus() {
        let index = standard().build(Vec::<String>::new()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.doc_count(), 0);
    }

    #[test]
    fn test_filters_run_before_indexing() {
        let indexer = Indexer::with_filters(
            Arc::new(StandardTokenizer::new()),
            vec![Arc::new(StopFilter::from_words(["the"])) as Arc<dyn Filter>],
        );
        let index = indexer.build(["the ink is pink"]).unwrap();

        assert!(!index.contains("the"));
        assert_eq!(index.get("ink").unwrap().postings[0].positions, vec![1]);
    }

    #[test]
    fn test_analysis_error_aborts_build() {
        let indexer = Indexer::new(Arc::new(FailingTokenizer));
        let err = indexer.build(["fine", "boom", "fine"]).unwrap_err();
        assert!(matches!(err, LecternError::Analysis(_)));

        let docs = vec!["fine", "boom"];
        assert!(indexer.build_parallel(&docs).is_err());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let docs: Vec<String> = (0..64)
            .map(|i| format!("doc {i} likes to drink {} ink", i % 7))
            .collect();

        let indexer = standard();
        let sequential = indexer.build(&docs).unwrap();
        let parallel = indexer.build_parallel(&docs).unwrap();

        assert_eq!(sequential, parallel);
    }
}
