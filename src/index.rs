//! Index module for Lectern.
//!
//! This module provides the positional inverted index: the posting types, the
//! read-only [`inverted::InvertedIndex`] and the [`writer::Indexer`] that
//! builds it from a corpus in a single pass.

pub mod inverted;
pub mod posting;
pub mod writer;

pub use inverted::{IndexStats, InvertedIndex};
pub use posting::{DocId, Posting, Term};
pub use writer::Indexer;
