//! Token filter implementations for token transformation.
//!
//! Filters receive the token sequence produced by a tokenizer and return a new
//! one. They are the extension point for processing this crate does not own,
//! such as stemming: any `Filter` can be appended to a
//! [`PipelineAnalyzer`](crate::analysis::analyzer::PipelineAnalyzer).
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stop words
//!
//! # Examples
//!
//! Implementing a custom filter:
//!
//! ```
//! use lectern::analysis::token::{Token, TokenStream};
//! use lectern::analysis::token_filter::Filter;
//! use lectern::error::Result;
//!
//! struct TrimPluralFilter;
//!
//! impl Filter for TrimPluralFilter {
//!     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
//!         Ok(tokens
//!             .into_iter()
//!             .map(|mut t| {
//!                 if t.text.len() > 3 && t.text.ends_with('s') {
//!                     t.text.pop();
//!                 }
//!                 t
//!             })
//!             .collect())
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "trim_plural"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token sequences.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token sequence.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod stop;

pub use stop::StopFilter;
