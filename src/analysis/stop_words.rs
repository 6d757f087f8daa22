//! Stop-word sets.
//!
//! A [`StopWords`] value is always passed explicitly to the tokenizers and
//! filters that use it; there is no process-wide default set. The documented
//! default, [`StopWords::english`], is the common English list used by NLTK.
//!
//! Stop words can also be loaded from a newline-delimited source, one word per
//! line:
//!
//! ```
//! use lectern::analysis::stop_words::StopWords;
//!
//! let stops = StopWords::from_reader("im\na\n".as_bytes()).unwrap();
//! assert!(stops.contains("im"));
//! assert!(!stops.contains("awake"));
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use ahash::AHashSet;

use crate::error::Result;

/// English stop words (the NLTK `english` corpus list).
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// An immutable, cheaply clonable set of stop words.
#[derive(Clone, Debug)]
pub struct StopWords {
    words: Arc<AHashSet<String>>,
}

impl StopWords {
    /// The default English stop-word set.
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOP_WORDS.iter().copied())
    }

    /// An empty set; nothing is treated as a stop word.
    pub fn empty() -> Self {
        StopWords {
            words: Arc::new(AHashSet::new()),
        }
    }

    /// Create a stop-word set from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopWords {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Load a newline-delimited stop-word list.
    ///
    /// Trailing whitespace is stripped from every line and blank lines are
    /// skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = AHashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim_end();
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }
        Ok(StopWords {
            words: Arc::new(words),
        })
    }

    /// Load a newline-delimited stop-word file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let stops = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %path.as_ref().display(),
            words = stops.len(),
            "loaded stop words"
        );
        Ok(stops)
    }

    /// Check if a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stop words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}
