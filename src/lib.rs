//! # Lectern
//!
//! A small in-memory text-retrieval engine.
//!
//! ## Features
//!
//! - Elasticsearch-style tokenizers (standard, keyword, n-gram, edge n-gram,
//!   URL/email aware, stop words)
//! - Positional inverted index built in a single pass
//! - Boolean retrieval over sorted posting lists
//! - Phrase/proximity retrieval with a slop window
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use lectern::analysis::tokenizer::standard::StandardTokenizer;
//! use lectern::index::writer::Indexer;
//! use lectern::query::{BoolQuery, PhraseQuery};
//! use lectern::search::{BooleanSearch, PhraseSearch, SearchModel};
//!
//! # fn main() -> lectern::error::Result<()> {
//! let indexer = Indexer::new(Arc::new(StandardTokenizer::new()));
//! let index = indexer.build(["The pink ink dried", "Pink ink, he said"])?;
//!
//! let hits = BooleanSearch::new(&index).search(&BoolQuery::new().must(["ink", "said"]));
//! assert_eq!(hits, vec![2]);
//!
//! let hits = PhraseSearch::new(&index).search(&PhraseQuery::new(["pink", "ink"]));
//! assert_eq!(hits, vec![1, 2]);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod search;

pub mod prelude {
    pub use crate::analysis::token::Token;
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::error::{LecternError, Result};
    pub use crate::index::inverted::InvertedIndex;
    pub use crate::index::posting::{DocId, Posting, Term};
    pub use crate::index::writer::Indexer;
    pub use crate::query::{BoolQuery, PhraseQuery};
    pub use crate::search::{BooleanSearch, PhraseSearch, SearchModel};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
