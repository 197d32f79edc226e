//! Stop filter implementation.
//!
//! This module provides a filter that removes configured words from the
//! token stream. A default English stop word list is included for the
//! built-in English analyzer.
//!
//! # Examples
//!
//! ```
//! use kotoba::analysis::token_filter::Filter;
//! use kotoba::analysis::token_filter::stop::StopFilter;
//! use kotoba::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["the", "is"], true);
//! let tokens = vec![
//!     Token::new("The", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words list.
///
/// Common English words that typically carry no search relevance.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// The default English stop words in their listed order.
pub fn english_stop_words() -> Vec<String> {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
}

/// A filter that removes stop words from the token stream.
///
/// Words are matched against an explicit list, optionally ignoring case.
/// Removed tokens leave a position gap: their position increment is added
/// to the next surviving token, so phrase positions stay meaningful.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::Filter;
/// use kotoba::analysis::token_filter::stop::StopFilter;
/// use kotoba::analysis::token::Token;
///
/// // Case-sensitive matching
/// let filter = StopFilter::from_words(vec!["the"], false);
/// let tokens = vec![Token::new("The", 0), Token::new("the", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "The");
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove (lowercased when `ignore_case`)
    stop_words: Arc<HashSet<String>>,
    /// Whether matching ignores case
    ignore_case: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn english() -> Self {
        StopFilter {
            stop_words: Arc::new(DEFAULT_ENGLISH_STOP_WORDS_SET.clone()),
            ignore_case: true,
        }
    }

    /// Create a stop filter from an explicit word list.
    pub fn from_words<I, S>(words: I, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words
            .into_iter()
            .map(|w| {
                let w = w.into();
                if ignore_case { w.to_lowercase() } else { w }
            })
            .collect();
        StopFilter {
            stop_words: Arc::new(stop_words),
            ignore_case,
        }
    }

    fn is_stop_word(&self, text: &str) -> bool {
        if self.ignore_case {
            self.stop_words.contains(&text.to_lowercase())
        } else {
            self.stop_words.contains(text)
        }
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut filtered_tokens: Vec<Token> = Vec::new();
        let mut pending_increment = 0;

        for mut token in tokens {
            if self.is_stop_word(&token.text) {
                pending_increment += token.position_increment;
                continue;
            }
            token.position_increment += pending_increment;
            pending_increment = 0;
            filtered_tokens.push(token);
        }

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
