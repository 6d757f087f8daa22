//! URL/email aware tokenizer implementation.
//!
//! Behaves like the [`StandardTokenizer`] unless the text contains an email
//! address. In that case the scan runs with `@`, `-` and `.` removed from the
//! dividers and `@`, `-` added to the meaningful punctuation, so the address
//! survives as one token.
//!
//! ```
//! use lectern::analysis::token::texts;
//! use lectern::analysis::tokenizer::Tokenizer;
//! use lectern::analysis::tokenizer::uax_url_email::UaxUrlEmailTokenizer;
//!
//! let tokenizer = UaxUrlEmailTokenizer::new().unwrap();
//! let tokens = tokenizer
//!     .tokenize("Email me at john.smith@global-international.com")
//!     .unwrap();
//! assert_eq!(
//!     texts(&tokens),
//!     vec!["email", "me", "at", "john.smith@global-international.com"]
//! );
//! ```

use regex::Regex;

use crate::analysis::stop_words::StopWords;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::standard::StandardTokenizer;
use crate::error::{LecternError, Result};

/// Pattern used to detect an email address anywhere in the input.
pub const EMAIL_PATTERN: &str = r"[\w.-]+@[\w.-]+";

/// Characters that stop dividing words once an email address is present.
const EMAIL_CHARS: &[char] = &['@', '-', '.'];

/// Punctuation that becomes meaningful once an email address is present.
const EMAIL_JOINERS: &[char] = &['@', '-'];

/// A standard tokenizer that keeps email addresses as single tokens.
#[derive(Clone, Debug)]
pub struct UaxUrlEmailTokenizer {
    email: Regex,
    standard: StandardTokenizer,
    email_aware: StandardTokenizer,
}

impl UaxUrlEmailTokenizer {
    /// Create a tokenizer on top of the default standard tokenizer.
    pub fn new() -> Result<Self> {
        Self::from_standard(StandardTokenizer::new())
    }

    /// Create a tokenizer on top of a configured standard tokenizer.
    ///
    /// The email-aware variant is derived from `standard`'s own divider and
    /// meaningful-punctuation sets.
    pub fn from_standard(standard: StandardTokenizer) -> Result<Self> {
        let email = Regex::new(EMAIL_PATTERN)
            .map_err(|e| LecternError::analysis(format!("Invalid email pattern: {e}")))?;

        let dividers: Vec<char> = standard
            .word_dividers()
            .iter()
            .copied()
            .filter(|c| !EMAIL_CHARS.contains(c))
            .collect();
        let mut meaningful = standard.meaningful_punctuation().to_vec();
        for &c in EMAIL_JOINERS {
            if !meaningful.contains(&c) {
                meaningful.push(c);
            }
        }

        let email_aware = standard
            .clone()
            .with_word_dividers(dividers)
            .with_meaningful_punctuation(meaningful);

        Ok(UaxUrlEmailTokenizer {
            email,
            standard,
            email_aware,
        })
    }

    /// Discard tokens found in `stop_words`.
    pub fn with_stop_words(self, stop_words: StopWords) -> Result<Self> {
        Self::from_standard(self.standard.with_stop_words(stop_words))
    }

    /// Whether `text` contains something that looks like an email address.
    pub fn contains_email(&self, text: &str) -> bool {
        self.email.is_match(text)
    }
}

impl Tokenizer for UaxUrlEmailTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        if self.contains_email(text) {
            self.email_aware.tokenize(text)
        } else {
            self.standard.tokenize(text)
        }
    }

    fn name(&self) -> &'static str {
        "uax_url_email"
    }
}
