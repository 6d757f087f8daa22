//! N-gram and edge n-gram tokenizer implementation.
//!
//! The input is first broken into words on every character that does not
//! belong to one of the configured [`TokenChar`] classes (with no classes the
//! whole input is a single word). Each word then yields its grams:
//!
//! - sliding mode: every substring with a length between `min_gram` and
//!   `max_gram`, ordered by start offset and then by length;
//! - edge mode: only the prefixes, anchored to the start of the word.
//!
//! # Examples
//!
//! ```
//! use lectern::analysis::token::texts;
//! use lectern::analysis::tokenizer::Tokenizer;
//! use lectern::analysis::tokenizer::ngram::NGramTokenizer;
//!
//! let tokenizer = NGramTokenizer::edge(3, 7)
//!     .unwrap()
//!     .with_token_chars(["letter"])
//!     .unwrap();
//! let tokens = tokenizer.tokenize("Quick2Brown$Fox").unwrap();
//! assert_eq!(
//!     texts(&tokens),
//!     vec!["Qui", "Quic", "Quick", "Bro", "Brow", "Brown", "Fox"]
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{LecternError, Result};

/// Exclusive upper bound for `min_gram` and `max_gram`.
pub const GRAM_LIMIT: usize = 25;

/// A character class that is kept inside words; anything else splits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenChar {
    /// ASCII letters `[a-zA-Z]`
    Letter,
    /// ASCII digits `[0-9]`
    Digit,
    /// Whitespace
    Whitespace,
    /// ASCII punctuation except `"`
    Punctuation,
    /// Same characters as `Punctuation`
    Symbol,
}

impl TokenChar {
    /// The legal class names.
    pub const NAMES: [&'static str; 5] = ["letter", "digit", "whitespace", "punctuation", "symbol"];

    /// Whether `c` belongs to this class.
    pub fn matches(self, c: char) -> bool {
        match self {
            TokenChar::Letter => c.is_ascii_alphabetic(),
            TokenChar::Digit => c.is_ascii_digit(),
            TokenChar::Whitespace => c.is_whitespace(),
            TokenChar::Punctuation | TokenChar::Symbol => c.is_ascii_punctuation() && c != '"',
        }
    }

    /// The configuration name of this class.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenChar::Letter => "letter",
            TokenChar::Digit => "digit",
            TokenChar::Whitespace => "whitespace",
            TokenChar::Punctuation => "punctuation",
            TokenChar::Symbol => "symbol",
        }
    }
}

impl FromStr for TokenChar {
    type Err = LecternError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "letter" => Ok(TokenChar::Letter),
            "digit" => Ok(TokenChar::Digit),
            "whitespace" => Ok(TokenChar::Whitespace),
            "punctuation" => Ok(TokenChar::Punctuation),
            "symbol" => Ok(TokenChar::Symbol),
            other => Err(LecternError::validation(format!(
                "unknown token char class '{other}', expected one of {:?}",
                TokenChar::NAMES
            ))),
        }
    }
}

impl fmt::Display for TokenChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check n-gram bounds: `0 < min_gram < 25`, `0 < max_gram < 25` and
/// `min_gram <= max_gram`.
pub fn validate_grams(min_gram: usize, max_gram: usize) -> Result<()> {
    if min_gram == 0 || min_gram >= GRAM_LIMIT {
        return Err(LecternError::validation(format!(
            "min_gram ({min_gram}) must be between 1 and {}",
            GRAM_LIMIT - 1
        )));
    }
    if max_gram == 0 || max_gram >= GRAM_LIMIT {
        return Err(LecternError::validation(format!(
            "max_gram ({max_gram}) must be between 1 and {}",
            GRAM_LIMIT - 1
        )));
    }
    if min_gram > max_gram {
        return Err(LecternError::validation(format!(
            "min_gram ({min_gram}) must be <= max_gram ({max_gram})"
        )));
    }
    Ok(())
}

/// A tokenizer that generates character n-grams of each word.
#[derive(Clone, Debug)]
pub struct NGramTokenizer {
    /// Minimum n-gram size
    min_gram: usize,
    /// Maximum n-gram size
    max_gram: usize,
    /// Classes kept inside words; empty keeps everything
    token_chars: Vec<TokenChar>,
    /// Emit only prefixes anchored at the start of each word
    edge: bool,
}

impl NGramTokenizer {
    /// Create a sliding n-gram tokenizer.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the bounds are outside `1..25` or
    /// `min_gram > max_gram`.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        validate_grams(min_gram, max_gram)?;
        Ok(NGramTokenizer {
            min_gram,
            max_gram,
            token_chars: Vec::new(),
            edge: false,
        })
    }

    /// Create an edge n-gram tokenizer.
    pub fn edge(min_gram: usize, max_gram: usize) -> Result<Self> {
        Ok(Self::new(min_gram, max_gram)?.with_edges(true))
    }

    /// Set the token-char classes by name.
    ///
    /// Every name must be one of [`TokenChar::NAMES`].
    pub fn with_token_chars<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.token_chars = names
            .into_iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<TokenChar>>>()?;
        Ok(self)
    }

    /// Set the token-char classes.
    pub fn with_token_char_classes(mut self, classes: Vec<TokenChar>) -> Self {
        self.token_chars = classes;
        self
    }

    /// Switch between edge (prefix) and sliding grams.
    pub fn with_edges(mut self, edge: bool) -> Self {
        self.edge = edge;
        self
    }

    /// Get the minimum gram size.
    pub fn min_gram(&self) -> usize {
        self.min_gram
    }

    /// Get the maximum gram size.
    pub fn max_gram(&self) -> usize {
        self.max_gram
    }

    /// Get the token-char classes.
    pub fn token_chars(&self) -> &[TokenChar] {
        &self.token_chars
    }

    /// Whether only edge grams are emitted.
    pub fn is_edge(&self) -> bool {
        self.edge
    }

    fn is_token_char(&self, c: char) -> bool {
        self.token_chars.is_empty() || self.token_chars.iter().any(|class| class.matches(c))
    }

    fn words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        if self.token_chars.is_empty() {
            vec![text]
        } else {
            text.split(|c| !self.is_token_char(c)).collect()
        }
    }

    fn edge_grams(&self, chars: &[char], grams: &mut Vec<String>) {
        let longest = self.max_gram.min(chars.len());
        for len in self.min_gram..=longest {
            grams.push(chars[..len].iter().collect());
        }
    }

    fn sliding_grams(&self, chars: &[char], grams: &mut Vec<String>) {
        for start in 0..chars.len() {
            for gram_size in self.min_gram..=self.max_gram {
                let end = start + gram_size;
                if end > chars.len() {
                    break;
                }
                grams.push(chars[start..end].iter().collect());
            }
        }
    }
}

impl Default for NGramTokenizer {
    fn default() -> Self {
        NGramTokenizer {
            min_gram: 1,
            max_gram: 2,
            token_chars: Vec::new(),
            edge: false,
        }
    }
}

impl Tokenizer for NGramTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut grams = Vec::new();
        for word in self.words(text) {
            let chars: Vec<char> = word.chars().collect();
            if self.edge {
                self.edge_grams(&chars, &mut grams);
            } else {
                self.sliding_grams(&chars, &mut grams);
            }
        }

        Ok(grams
            .into_iter()
            .zip(1u32..)
            .map(|(gram, position)| Token::new(gram, position))
            .collect())
    }

    fn name(&self) -> &'static str {
        if self.edge { "edge_ngram" } else { "ngram" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::texts;

    #[test]
    fn test_ngram_creation() {
        assert!(NGramTokenizer::new(2, 3).is_ok());
        assert!(NGramTokenizer::new(1, 24).is_ok());

        assert!(NGramTokenizer::new(0, 2).is_err());
        assert!(NGramTokenizer::new(3, 2).is_err());
        assert!(NGramTokenizer::new(1, 25).is_err());
        assert!(NGramTokenizer::new(25, 25).is_err());
    }

    #[test]
    fn test_invalid_token_chars() {
        let err = NGramTokenizer::new(1, 2)
            .unwrap()
            .with_token_chars(["letter", "emoji"])
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("emoji"));
    }

    #[test]
    fn test_sliding_grams_keep_whitespace_boundaries() {
        let tokenizer = NGramTokenizer::default();
        let tokens = tokenizer.tokenize("Quick Fox").unwrap();
        assert_eq!(
            texts(&tokens),
            vec![
                "Q", "Qu", "u", "ui", "i", "ic", "c", "ck", "k", "k ", " ", " F", "F", "Fo",
                "o", "ox", "x"
            ]
        );
        assert_eq!(tokens.last().unwrap().position, 17);
    }

    #[test]
    fn test_variable_ngram() {
        let tokenizer = NGramTokenizer::new(2, 3).unwrap();
        let tokens = tokenizer.tokenize("abc").unwrap();
        assert_eq!(texts(&tokens), vec!["ab", "abc", "bc"]);
    }

    #[test]
    fn test_sliding_grams_per_word() {
        let tokenizer = NGramTokenizer::new(2, 2)
            .unwrap()
            .with_token_chars(["letter"])
            .unwrap();
        let tokens = tokenizer.tokenize("ab cd").unwrap();
        assert_eq!(texts(&tokens), vec!["ab", "cd"]);
    }

    #[test]
    fn test_edge_ngram_default_params() {
        let tokenizer = NGramTokenizer::default().with_edges(true);
        let tokens = tokenizer.tokenize("Quick Fox").unwrap();
        assert_eq!(texts(&tokens), vec!["Q", "Qu"]);
    }

    #[test]
    fn test_edge_ngram_splits_on_other_classes() {
        let tokenizer = NGramTokenizer::edge(1, 2)
            .unwrap()
            .with_token_chars(["letter"])
            .unwrap();
        let tokens = tokenizer.tokenize("Quick2Fox").unwrap();
        assert_eq!(texts(&tokens), vec!["Q", "Qu", "F", "Fo"]);
    }

    #[test]
    fn test_edge_ngram_letters_and_digits() {
        let tokenizer = NGramTokenizer::edge(2, 3)
            .unwrap()
            .with_token_chars(["letter", "digit"])
            .unwrap();
        let tokens = tokenizer.tokenize("ab12 cd-e").unwrap();
        assert_eq!(texts(&tokens), vec!["ab", "ab1", "cd"]);
    }

    #[test]
    fn test_double_quote_is_not_punctuation() {
        let tokenizer = NGramTokenizer::new(1, 2)
            .unwrap()
            .with_token_chars(["punctuation"])
            .unwrap();
        let tokens = tokenizer.tokenize("!\"#a").unwrap();
        assert_eq!(texts(&tokens), vec!["!", "#"]);
        assert!(!TokenChar::Symbol.matches('"'));
        assert!(TokenChar::Symbol.matches('~'));
    }

    #[test]
    fn test_short_text() {
        let tokenizer = NGramTokenizer::edge(2, 2).unwrap();
        assert!(tokenizer.tokenize(" ").unwrap().is_empty());
        assert!(tokenizer.tokenize("").unwrap().is_empty());

        let tokenizer = NGramTokenizer::new(3, 5).unwrap();
        assert!(tokenizer.tokenize("ab").unwrap().is_empty());
    }

    #[test]
    fn test_unicode_support() {
        let tokenizer = NGramTokenizer::new(2, 2).unwrap();
        let tokens = tokenizer.tokenize("日本語").unwrap();
        assert_eq!(texts(&tokens), vec!["日本", "本語"]);
    }

    #[test]
    fn test_token_char_parsing() {
        for name in TokenChar::NAMES {
            let class: TokenChar = name.parse().unwrap();
            assert_eq!(class.to_string(), name);
        }
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(NGramTokenizer::default().name(), "ngram");
        assert_eq!(NGramTokenizer::edge(1, 2).unwrap().name(), "edge_ngram");
    }
}
