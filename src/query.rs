//! Structured queries.
//!
//! Queries arrive already structured; there is no query-string parser. Terms
//! are matched verbatim against index terms, so they should be normalized the
//! same way the corpus was (lowercased for the standard tokenizer).

pub mod boolean;
pub mod phrase;

pub use boolean::{BoolQuery, Occur};
pub use phrase::PhraseQuery;
