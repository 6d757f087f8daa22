//! Stop filter implementation.
//!
//! Removes tokens whose lowercase text is a stop word. Surviving tokens are
//! renumbered so that removed words never leave a gap in the positions.
//!
//! # Examples
//!
//! ```
//! use lectern::analysis::stop_words::StopWords;
//! use lectern::analysis::token::{number_tokens, texts};
//! use lectern::analysis::token_filter::Filter;
//! use lectern::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new(StopWords::from_words(["the"]));
//! let tokens = filter.filter(number_tokens(["the", "quick", "brown"])).unwrap();
//!
//! assert_eq!(texts(&tokens), vec!["quick", "brown"]);
//! assert_eq!(tokens[0].position, 1);
//! ```

use crate::analysis::stop_words::StopWords;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token sequence.
///
/// With `remove_trailing(false)` a final token that is itself a stop word is
/// kept. This is what search-as-you-type wants: in `"green a"` the trailing
/// `a` may be the start of `apple` and must not be silently dropped.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: StopWords,
    /// Whether a trailing stop word is removed as well
    remove_trailing: bool,
}

impl StopFilter {
    /// Create a new stop filter that also removes a trailing stop word.
    pub fn new(stop_words: StopWords) -> Self {
        StopFilter {
            stop_words,
            remove_trailing: true,
        }
    }

    /// Create a stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(StopWords::from_words(words))
    }

    /// Set whether a trailing stop word is removed.
    pub fn remove_trailing(mut self, remove: bool) -> Self {
        self.remove_trailing = remove;
        self
    }

    /// Check if a word is a stop word, ignoring case.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Get the stop words.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Whether a trailing stop word is removed.
    pub fn removes_trailing(&self) -> bool {
        self.remove_trailing
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new(StopWords::english())
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let last = tokens.len().saturating_sub(1);
        let kept = tokens
            .into_iter()
            .enumerate()
            .filter(|(i, token)| {
                let keep_trailing = !self.remove_trailing && *i == last;
                keep_trailing || !self.is_stop_word(&token.text)
            })
            .zip(1u32..)
            .map(|((_, mut token), position)| {
                token.position = position;
                token
            })
            .collect();

        Ok(kept)
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
