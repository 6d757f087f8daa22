//! Keyword tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A "noop" tokenizer that emits the entire lowercased input as one term.
///
/// This is useful for identifiers, tags and other values that must match as a
/// whole: `"New York"` becomes the single term `"new york"` at position 1.
#[derive(Clone, Debug, Default)]
pub struct KeywordTokenizer;

impl KeywordTokenizer {
    /// Create a new keyword tokenizer.
    pub fn new() -> Self {
        KeywordTokenizer
    }
}

impl Tokenizer for KeywordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        if text.trim().is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![Token::new(text.to_lowercase(), 1)])
        }
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
