//! Stop-words tokenizer implementation.

use std::path::Path;

use crate::analysis::stop_words::StopWords;
use crate::analysis::token::{TokenStream, number_tokens};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that only removes stop words.
///
/// The text is trimmed and split on plain spaces; punctuation and case are
/// left untouched. Pieces whose lowercase form is a stop word are dropped.
/// Defaults to the English stop words.
///
/// ```
/// use lectern::analysis::token::texts;
/// use lectern::analysis::tokenizer::Tokenizer;
/// use lectern::analysis::tokenizer::stopwords::StopwordsTokenizer;
///
/// let tokens = StopwordsTokenizer::new()
///     .tokenize("The 2 QUICK Brown-Foxes jumped over the lazy dog's bone.")
///     .unwrap();
/// assert_eq!(
///     texts(&tokens),
///     vec!["2", "QUICK", "Brown-Foxes", "jumped", "lazy", "dog's", "bone."]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct StopwordsTokenizer {
    filter: StopFilter,
}

impl StopwordsTokenizer {
    /// Create a tokenizer with the English stop words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with the given stop words.
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        StopwordsTokenizer {
            filter: StopFilter::new(stop_words),
        }
    }

    /// Create a tokenizer from a newline-delimited stop-word file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::with_stop_words(StopWords::from_path(path)?))
    }

    /// Set whether a trailing stop word is removed (the default) or kept.
    pub fn remove_trailing(mut self, remove: bool) -> Self {
        self.filter = self.filter.remove_trailing(remove);
        self
    }

    /// Get the underlying stop filter.
    pub fn filter(&self) -> &StopFilter {
        &self.filter
    }
}

impl Tokenizer for StopwordsTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let pieces = text.trim().split(' ').filter(|piece| !piece.is_empty());
        self.filter.filter(number_tokens(pieces))
    }

    fn name(&self) -> &'static str {
        "stopwords"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::texts;
    use std::io::Write;

    #[test]
    fn test_stop_words_from_file_keep_trailing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "im").unwrap();
        writeln!(file, "a").unwrap();

        let tokenizer = StopwordsTokenizer::from_path(file.path())
            .unwrap()
            .remove_trailing(false);
        let tokens = tokenizer.tokenize("im awake or asleep a").unwrap();

        assert_eq!(texts(&tokens), vec!["awake", "or", "asleep", "a"]);
    }

    #[test]
    fn test_whitespace_only_input() {
        let tokenizer = StopwordsTokenizer::new();
        assert!(tokenizer.tokenize("    ").unwrap().is_empty());
        assert!(tokenizer.tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_repeated_spaces() {
        let tokenizer = StopwordsTokenizer::new();
        let tokens = tokenizer.tokenize("green  the   apple").unwrap();
        assert_eq!(texts(&tokens), vec!["green", "apple"]);
        assert_eq!(tokens[1].position, 2);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(StopwordsTokenizer::new().name(), "stopwords");
    }
}
