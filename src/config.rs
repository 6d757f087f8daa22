//! Tokenizer configuration.
//!
//! Configurations are plain serde types, internally tagged by `"type"`, so they
//! can be read from JSON and handed to [`TokenizerFactory::create`]. The
//! factory validates everything before a tokenizer is built; a rejected
//! configuration never yields a half-configured tokenizer.
//!
//! # Example
//!
//! ```
//! use lectern::config::{TokenizerConfig, TokenizerFactory};
//!
//! let config = TokenizerConfig::from_json(
//!     r#"{"type": "ngram", "min_gram": 3, "max_gram": 7, "token_chars": ["letter"], "edge": true}"#,
//! )
//! .unwrap();
//! let tokenizer = TokenizerFactory::create(&config).unwrap();
//!
//! let grams: Vec<String> = tokenizer
//!     .tokenize("Quick2Brown$Fox")
//!     .unwrap()
//!     .into_iter()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(grams, vec!["Qui", "Quic", "Quick", "Bro", "Brow", "Brown", "Fox"]);
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::stop_words::StopWords;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::keyword::KeywordTokenizer;
use crate::analysis::tokenizer::ngram::NGramTokenizer;
use crate::analysis::tokenizer::standard::{
    StandardTokenizer, default_meaningful_punctuation, default_word_dividers,
};
use crate::analysis::tokenizer::stopwords::StopwordsTokenizer;
use crate::analysis::tokenizer::uax_url_email::UaxUrlEmailTokenizer;
use crate::error::{LecternError, Result};

/// Configuration for the available tokenizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenizerConfig {
    /// Grammar-style tokenizer
    Standard(StandardConfig),
    /// Whole input as a single lowercase token
    Keyword,
    /// Character n-grams, sliding or edge
    #[serde(rename = "ngram")]
    NGram(NGramConfig),
    /// Standard tokenizer that keeps email addresses intact
    UaxUrlEmail(StandardConfig),
    /// Space splitting plus stop-word removal
    Stopwords(StopwordsConfig),
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig::Standard(StandardConfig::default())
    }
}

impl TokenizerConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Get the name of the tokenizer this configuration builds.
    pub fn tokenizer_name(&self) -> &'static str {
        match self {
            TokenizerConfig::Standard(_) => "standard",
            TokenizerConfig::Keyword => "keyword",
            TokenizerConfig::NGram(config) if config.edge => "edge_ngram",
            TokenizerConfig::NGram(_) => "ngram",
            TokenizerConfig::UaxUrlEmail(_) => "uax_url_email",
            TokenizerConfig::Stopwords(_) => "stopwords",
        }
    }
}

/// Settings shared by the standard and URL/email tokenizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardConfig {
    /// Characters that end a token.
    pub word_dividers: Vec<char>,

    /// Punctuation kept inside a token when followed by an alphanumeric.
    pub meaningful_punctuation: Vec<char>,

    /// Inline stop words. Mutually exclusive with `stop_words_path`.
    pub stop_words: Option<Vec<String>>,

    /// Newline-delimited stop-word file.
    pub stop_words_path: Option<PathBuf>,
}

impl Default for StandardConfig {
    fn default() -> Self {
        StandardConfig {
            word_dividers: default_word_dividers(),
            meaningful_punctuation: default_meaningful_punctuation(),
            stop_words: None,
            stop_words_path: None,
        }
    }
}

/// Settings for the n-gram tokenizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NGramConfig {
    /// Minimum gram length, `1..25`.
    pub min_gram: usize,

    /// Maximum gram length, `1..25`, not below `min_gram`.
    pub max_gram: usize,

    /// Token-char class names; empty keeps every character.
    pub token_chars: Vec<String>,

    /// Emit edge (prefix) grams instead of sliding grams.
    pub edge: bool,
}

impl Default for NGramConfig {
    fn default() -> Self {
        NGramConfig {
            min_gram: 1,
            max_gram: 2,
            token_chars: Vec::new(),
            edge: false,
        }
    }
}

/// Settings for the stop-words tokenizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopwordsConfig {
    /// Inline stop words; the English list is used when neither this nor
    /// `stop_words_path` is set.
    pub stop_words: Option<Vec<String>>,

    /// Newline-delimited stop-word file.
    pub stop_words_path: Option<PathBuf>,

    /// Whether a final stop word is removed too.
    pub remove_trailing: bool,
}

impl Default for StopwordsConfig {
    fn default() -> Self {
        StopwordsConfig {
            stop_words: None,
            stop_words_path: None,
            remove_trailing: true,
        }
    }
}

/// Builds tokenizers from configuration.
pub struct TokenizerFactory;

impl TokenizerFactory {
    /// Validate `config` and build the tokenizer it describes.
    pub fn create(config: &TokenizerConfig) -> Result<Arc<dyn Tokenizer>> {
        let tokenizer: Arc<dyn Tokenizer> = match config {
            TokenizerConfig::Standard(config) => Arc::new(Self::standard(config)?),
            TokenizerConfig::Keyword => Arc::new(KeywordTokenizer::new()),
            TokenizerConfig::NGram(config) => {
                Arc::new(
                    NGramTokenizer::new(config.min_gram, config.max_gram)?
                        .with_token_chars(&config.token_chars)?
                        .with_edges(config.edge),
                )
            }
            TokenizerConfig::UaxUrlEmail(config) => {
                Arc::new(UaxUrlEmailTokenizer::from_standard(Self::standard(config)?)?)
            }
            TokenizerConfig::Stopwords(config) => {
                let stop_words =
                    load_stop_words(&config.stop_words, &config.stop_words_path)?
                        .unwrap_or_default();
                Arc::new(
                    StopwordsTokenizer::with_stop_words(stop_words)
                        .remove_trailing(config.remove_trailing),
                )
            }
        };

        tracing::debug!(tokenizer = tokenizer.name(), "created tokenizer");
        Ok(tokenizer)
    }

    fn standard(config: &StandardConfig) -> Result<StandardTokenizer> {
        let tokenizer = StandardTokenizer::new()
            .with_word_dividers(config.word_dividers.iter().copied())
            .with_meaningful_punctuation(config.meaningful_punctuation.iter().copied());

        Ok(
            match load_stop_words(&config.stop_words, &config.stop_words_path)? {
                Some(stop_words) => tokenizer.with_stop_words(stop_words),
                None => tokenizer,
            },
        )
    }
}

fn load_stop_words(
    words: &Option<Vec<String>>,
    path: &Option<PathBuf>,
) -> Result<Option<StopWords>> {
    match (words, path) {
        (Some(_), Some(_)) => Err(LecternError::validation(
            "stop_words and stop_words_path are mutually exclusive",
        )),
        (Some(words), None) => Ok(Some(StopWords::from_words(words.iter().cloned()))),
        (None, Some(path)) => StopWords::from_path(path).map(Some),
        (None, None) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn create_err(config: &TokenizerConfig) -> LecternError {
        match TokenizerFactory::create(config) {
            Ok(tokenizer) => panic!("expected an error, built {}", tokenizer.name()),
            Err(err) => err,
        }
    }

    fn texts(tokenizer: &Arc<dyn Tokenizer>, text: &str) -> Vec<String> {
        tokenizer
            .tokenize(text)
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_default_is_standard() {
        let tokenizer = TokenizerFactory::create(&TokenizerConfig::default()).unwrap();
        assert_eq!(tokenizer.name(), "standard");
        assert_eq!(texts(&tokenizer, "Hello, World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_parse_every_type() {
        let cases = [
            (r#"{"type": "standard"}"#, "standard"),
            (r#"{"type": "keyword"}"#, "keyword"),
            (r#"{"type": "ngram"}"#, "ngram"),
            (r#"{"type": "ngram", "edge": true}"#, "edge_ngram"),
            (r#"{"type": "uax_url_email"}"#, "uax_url_email"),
            (r#"{"type": "stopwords"}"#, "stopwords"),
        ];

        for (json, name) in cases {
            let config = TokenizerConfig::from_json(json).unwrap();
            assert_eq!(config.tokenizer_name(), name);
            let tokenizer = TokenizerFactory::create(&config).unwrap();
            assert_eq!(tokenizer.name(), name, "{json}");
        }
    }

    #[test]
    fn test_json_round_trip() {
        let config = TokenizerConfig::NGram(NGramConfig {
            min_gram: 2,
            max_gram: 3,
            token_chars: vec!["letter".to_string(), "digit".to_string()],
            edge: false,
        });
        let json = config.to_json().unwrap();
        assert!(json.contains(r#""type":"ngram""#));
        assert_eq!(TokenizerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_grams_rejected() {
        let config = TokenizerConfig::from_json(r#"{"type": "ngram", "min_gram": 5, "max_gram": 2}"#)
            .unwrap();
        let err = create_err(&config);
        assert!(err.is_validation());

        let config = TokenizerConfig::from_json(r#"{"type": "ngram", "max_gram": 25}"#).unwrap();
        assert!(create_err(&config).is_validation());
    }

    #[test]
    fn test_unknown_token_char_rejected() {
        let config =
            TokenizerConfig::from_json(r#"{"type": "ngram", "token_chars": ["emoji"]}"#).unwrap();
        assert!(create_err(&config).is_validation());
    }

    #[test]
    fn test_malformed_json() {
        let err = TokenizerConfig::from_json(r#"{"type": "snowball"}"#).unwrap_err();
        assert!(matches!(err, LecternError::Json(_)));
    }

    #[test]
    fn test_standard_with_inline_stop_words() {
        let config = TokenizerConfig::from_json(
            r#"{"type": "standard", "stop_words": ["the"], "word_dividers": [" "]}"#,
        )
        .unwrap();
        let tokenizer = TokenizerFactory::create(&config).unwrap();
        assert_eq!(texts(&tokenizer, "The blue-grey sky"), vec!["bluegrey", "sky"]);
    }

    #[test]
    fn test_stop_words_sources_are_exclusive() {
        let config = TokenizerConfig::Stopwords(StopwordsConfig {
            stop_words: Some(vec!["a".to_string()]),
            stop_words_path: Some(PathBuf::from("stops.txt")),
            remove_trailing: true,
        });
        assert!(create_err(&config).is_validation());
    }

    #[test]
    fn test_stopwords_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "im").unwrap();
        writeln!(file, "a").unwrap();

        let config = TokenizerConfig::Stopwords(StopwordsConfig {
            stop_words: None,
            stop_words_path: Some(file.path().to_path_buf()),
            remove_trailing: false,
        });
        let tokenizer = TokenizerFactory::create(&config).unwrap();
        assert_eq!(
            texts(&tokenizer, "im awake or asleep a"),
            vec!["awake", "or", "asleep", "a"]
        );
    }

    #[test]
    fn test_missing_stop_file_is_io_error() {
        let config = TokenizerConfig::Stopwords(StopwordsConfig {
            stop_words_path: Some(PathBuf::from("/no/such/stops.txt")),
            ..Default::default()
        });
        let err = create_err(&config);
        assert!(matches!(err, LecternError::Io(_)));
    }

    #[test]
    fn test_uax_url_email_config() {
        let config = TokenizerConfig::from_json(r#"{"type": "uax_url_email"}"#).unwrap();
        let tokenizer = TokenizerFactory::create(&config).unwrap();
        assert_eq!(
            texts(&tokenizer, "mail bob@example.com"),
            vec!["mail", "bob@example.com"]
        );
    }
}
