//! Unicode word-boundary tokenizer implementation.

use unicode_segmentation::UnicodeSegmentation;

use super::{Tokenizer, chunk_by_chars};
use crate::analysis::token::{Token, TokenStream};
use crate::error::{KotobaError, Result};

/// A tokenizer that splits text on Unicode word boundaries (UAX #29).
///
/// This handles punctuation, quotes, and non-Latin scripts much better than
/// plain whitespace splitting. Tokens longer than `max_token_length`
/// characters are split into chunks of that length.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::tokenizer::standard::StandardTokenizer;
/// use kotoba::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = StandardTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("Hello, world! It's fine.").unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["Hello", "world", "It's", "fine"]);
/// ```
#[derive(Clone, Debug)]
pub struct StandardTokenizer {
    max_token_length: usize,
}

impl StandardTokenizer {
    pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 255;

    /// Create a new standard tokenizer with the default token length cap.
    pub fn new() -> Self {
        Self {
            max_token_length: Self::DEFAULT_MAX_TOKEN_LENGTH,
        }
    }

    /// Create a standard tokenizer with a custom token length cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_token_length` is 0.
    pub fn with_max_token_length(max_token_length: usize) -> Result<Self> {
        if max_token_length == 0 {
            return Err(KotobaError::invalid_definition(
                "maxTokenLength must be at least 1",
            ));
        }
        Ok(Self { max_token_length })
    }
}

impl Default for StandardTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;

        for (offset, word) in text.unicode_word_indices() {
            for (chunk, start, end) in chunk_by_chars(word, offset, self.max_token_length) {
                tokens.push(Token::with_offsets(chunk, position, start, end));
                position += 1;
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &StandardTokenizer, input: &str) -> Vec<String> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_punctuation_dropped() {
        let tokenizer = StandardTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "Hello, world! How are you?"),
            vec!["Hello", "world", "How", "are", "you"]
        );
    }

    #[test]
    fn test_contractions_and_numbers() {
        let tokenizer = StandardTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "it's 3.14 o'clock"),
            vec!["it's", "3.14", "o'clock"]
        );
    }

    #[test]
    fn test_offsets() {
        let tokenizer = StandardTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("ab, cd").unwrap().collect();

        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 2);
        assert_eq!(tokens[1].start_offset, 4);
        assert_eq!(tokens[1].end_offset, 6);
    }

    #[test]
    fn test_max_token_length() {
        let tokenizer = StandardTokenizer::with_max_token_length(3).unwrap();
        assert_eq!(texts(&tokenizer, "abcdefgh ij"), vec!["abc", "def", "gh", "ij"]);

        assert!(StandardTokenizer::with_max_token_length(0).is_err());
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = StandardTokenizer::new();
        assert!(texts(&tokenizer, "").is_empty());
        assert!(texts(&tokenizer, "  \t ").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(StandardTokenizer::new().name(), "standard");
    }
}
