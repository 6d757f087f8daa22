//! Standard tokenizer implementation.
//!
//! The standard tokenizer lowercases the text, trims it and then scans it one
//! character at a time:
//!
//! - a *word divider* ends the current token;
//! - a *punctuation mark* is dropped, except that *meaningful* punctuation is
//!   kept when the next character is alphanumeric (`don't`, `ever_speak`,
//!   `65.3`);
//! - everything else is accumulated into the current token.
//!
//! ```
//! use lectern::analysis::token::texts;
//! use lectern::analysis::tokenizer::Tokenizer;
//! use lectern::analysis::tokenizer::standard::StandardTokenizer;
//!
//! let tokens = StandardTokenizer::new()
//!     .tokenize("The 2 QUICK Brown-Foxes jumped over the lazy dog's bone.")
//!     .unwrap();
//! assert_eq!(
//!     texts(&tokens),
//!     vec!["the", "2", "quick", "brown", "foxes", "jumped", "over", "the", "lazy", "dog's", "bone"]
//! );
//! ```

use crate::analysis::stop_words::StopWords;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// General typography; every one of these splits words.
pub const TYPOGRAPHY: &[char] = &['&', '*', '^', '=', '#', ':', '~', '@'];

/// Punctuation that is always dropped.
pub const BASIC_PUNCTUATION: &[char] = &[':', ';', '?', '!', '/', '(', ')'];

/// Punctuation kept inside a token when followed by an alphanumeric character.
pub const MEANINGFUL_PUNCTUATION: &[char] = &['\'', '_', '.', ','];

/// Control characters treated as droppable punctuation.
pub const CONTROL_SYMBOLS: &[char] = &['\n', '\t', '\r'];

/// Characters that end a token besides the typography set.
pub const BASIC_WORD_DIVIDERS: &[char] = &[' ', '-', '$'];

/// The default word dividers: space, hyphen, `$` and typography.
pub fn default_word_dividers() -> Vec<char> {
    BASIC_WORD_DIVIDERS
        .iter()
        .chain(TYPOGRAPHY)
        .copied()
        .collect()
}

/// The default meaningful punctuation.
pub fn default_meaningful_punctuation() -> Vec<char> {
    MEANINGFUL_PUNCTUATION.to_vec()
}

/// Whether `c` is one of the fixed punctuation marks.
///
/// The set is independent of a tokenizer's configured dividers: it is the
/// union of basic and meaningful punctuation, the default dividers and the
/// control symbols.
pub fn is_punctuation_mark(c: char) -> bool {
    BASIC_PUNCTUATION.contains(&c)
        || MEANINGFUL_PUNCTUATION.contains(&c)
        || BASIC_WORD_DIVIDERS.contains(&c)
        || TYPOGRAPHY.contains(&c)
        || CONTROL_SYMBOLS.contains(&c)
}

/// A grammar-style tokenizer modelled on Elasticsearch's `standard` tokenizer.
#[derive(Clone, Debug)]
pub struct StandardTokenizer {
    word_dividers: Vec<char>,
    meaningful_punctuation: Vec<char>,
    stop_words: Option<StopWords>,
}

impl StandardTokenizer {
    /// Create a standard tokenizer with the default character sets and no
    /// stop words.
    pub fn new() -> Self {
        StandardTokenizer {
            word_dividers: default_word_dividers(),
            meaningful_punctuation: default_meaningful_punctuation(),
            stop_words: None,
        }
    }

    /// Replace the word-divider set.
    pub fn with_word_dividers<I: IntoIterator<Item = char>>(mut self, dividers: I) -> Self {
        self.word_dividers = dividers.into_iter().collect();
        self
    }

    /// Replace the meaningful-punctuation set.
    pub fn with_meaningful_punctuation<I: IntoIterator<Item = char>>(mut self, puncts: I) -> Self {
        self.meaningful_punctuation = puncts.into_iter().collect();
        self
    }

    /// Discard tokens found in `stop_words`. Discarded tokens do not consume
    /// a position.
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Get the word-divider set.
    pub fn word_dividers(&self) -> &[char] {
        &self.word_dividers
    }

    /// Get the meaningful-punctuation set.
    pub fn meaningful_punctuation(&self) -> &[char] {
        &self.meaningful_punctuation
    }

    /// Get the inline stop words, if any.
    pub fn stop_words(&self) -> Option<&StopWords> {
        self.stop_words.as_ref()
    }

    /// Scan already-normalized text.
    fn scan(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut buffer = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if self.word_dividers.contains(&c) {
                self.emit(&mut buffer, &mut tokens);
            } else if is_punctuation_mark(c) {
                let keep = self.meaningful_punctuation.contains(&c)
                    && chars.peek().is_some_and(|next| next.is_alphanumeric());
                if keep {
                    buffer.push(c);
                }
            } else {
                buffer.push(c);
            }
        }
        self.emit(&mut buffer, &mut tokens);

        tokens
    }

    fn emit(&self, buffer: &mut String, tokens: &mut TokenStream) {
        if buffer.is_empty() {
            return;
        }
        let term = std::mem::take(buffer);
        if self.stop_words.as_ref().is_some_and(|s| s.contains(&term)) {
            return;
        }
        let position = tokens.len() as u32 + 1;
        tokens.push(Token::new(term, position));
    }
}

impl Default for StandardTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let normalized = text.to_lowercase();
        Ok(self.scan(normalized.trim()))
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
