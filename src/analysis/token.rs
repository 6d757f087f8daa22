//! Token types for text analysis.
//!
//! A [`Token`] is a normalized term together with its 1-based position in the
//! token stream of the text it came from. Positions are what the phrase
//! retrieval model measures slop against, so every tokenizer numbers the
//! tokens it emits 1, 2, 3, ... with no gaps.
//!
//! # Examples
//!
//! ```
//! use lectern::analysis::token::Token;
//!
//! let token = Token::new("hello", 1);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single term after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The 1-based position of the token in its token stream
    pub position: u32,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: u32) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clone this token with updated position.
    pub fn with_position(&self, position: u32) -> Self {
        Token {
            text: self.text.clone(),
            position,
        }
    }

    /// Borrow the token as a `(term, position)` pair.
    pub fn as_pair(&self) -> (&str, u32) {
        (&self.text, self.position)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<Token> for (String, u32) {
    fn from(token: Token) -> Self {
        (token.text, token.position)
    }
}

/// A token stream is the ordered, eagerly materialized output of analysis.
pub type TokenStream = Vec<Token>;

/// Build a token stream from terms, numbering them 1, 2, 3, ...
pub fn number_tokens<I, S>(terms: I) -> TokenStream
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    terms
        .into_iter()
        .zip(1u32..)
        .map(|(text, position)| Token::new(text, position))
        .collect()
}

/// Collect only the token texts, dropping positions.
pub fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 1);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 1);
        assert_eq!(token.len(), 5);
        assert!(!token.is_empty());
        assert_eq!(token.as_pair(), ("hello", 1));
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 1);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_number_tokens() {
        let tokens = number_tokens(["a", "b", "c"]);
        let positions: Vec<u32> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(texts(&tokens), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_into_pair() {
        let pair: (String, u32) = Token::new("x", 7).into();
        assert_eq!(pair, ("x".to_string(), 7));
    }
}
