//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of analysis: they turn a text string into an
//! ordered sequence of `(term, position)` tokens. Each variant is a distinct
//! policy for the same contract and carries no state between calls apart from
//! its configuration.
//!
//! # Available Tokenizers
//!
//! - [`standard::StandardTokenizer`] - Grammar-style splitting on dividers and punctuation
//! - [`keyword::KeywordTokenizer`] - Treats the entire text as a single term
//! - [`ngram::NGramTokenizer`] - Character n-grams and edge n-grams
//! - [`uax_url_email::UaxUrlEmailTokenizer`] - Standard, but keeps email addresses whole
//! - [`stopwords::StopwordsTokenizer`] - Whitespace splitting with stop-word removal
//!
//! # Examples
//!
//! ```
//! use lectern::analysis::tokenizer::Tokenizer;
//! use lectern::analysis::tokenizer::standard::StandardTokenizer;
//!
//! let tokenizer = StandardTokenizer::new();
//! let tokens = tokenizer.tokenize("Hello world").unwrap();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].position, 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can serve a parallel
/// index build.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into an ordered sequence of tokens.
    ///
    /// Positions start at 1 and increase by one per emitted token.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod keyword;
pub mod ngram;
pub mod standard;
pub mod stopwords;
pub mod uax_url_email;

pub use keyword::KeywordTokenizer;
pub use ngram::{NGramTokenizer, TokenChar};
pub use standard::StandardTokenizer;
pub use stopwords::StopwordsTokenizer;
pub use uax_url_email::UaxUrlEmailTokenizer;
