//! Whitespace tokenizer implementation.

use super::{Tokenizer, chunk_by_chars};
use crate::analysis::token::{Token, TokenStream};
use crate::error::{KotobaError, Result};

/// A tokenizer that splits text on Unicode whitespace.
///
/// Punctuation is kept attached to the surrounding word. Tokens longer than
/// `max_token_length` characters are split into chunks of that length.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::tokenizer::whitespace::WhitespaceTokenizer;
/// use kotoba::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["Hello,", "world!"]);
/// ```
#[derive(Clone, Debug)]
pub struct WhitespaceTokenizer {
    max_token_length: usize,
}

impl WhitespaceTokenizer {
    pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 255;

    /// Create a new whitespace tokenizer with the default token length cap.
    pub fn new() -> Self {
        Self {
            max_token_length: Self::DEFAULT_MAX_TOKEN_LENGTH,
        }
    }

    /// Create a whitespace tokenizer with a custom token length cap.
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

impl Default for WhitespaceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut word_start: Option<usize> = None;

        for (i, c) in text.char_indices() {
            if c.is_whitespace() {
                if let Some(start) = word_start.take() {
                    for (chunk, s, e) in
                        chunk_by_chars(&text[start..i], start, self.max_token_length)
                    {
                        tokens.push(Token::with_offsets(chunk, position, s, e));
                        position += 1;
                    }
                }
            } else if word_start.is_none() {
                word_start = Some(i);
            }
        }
        if let Some(start) = word_start {
            for (chunk, s, e) in chunk_by_chars(&text[start..], start, self.max_token_length) {
                tokens.push(Token::with_offsets(chunk, position, s, e));
                position += 1;
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &WhitespaceTokenizer, input: &str) -> Vec<String> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_basic_split() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_punctuation_kept() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(texts(&tokenizer, "Hello, world!"), vec!["Hello,", "world!"]);
    }

    #[test]
    fn test_mixed_whitespace() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(texts(&tokenizer, " a\t b\nc  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_max_token_length() {
        let tokenizer = WhitespaceTokenizer::with_max_token_length(4).unwrap();
        assert_eq!(texts(&tokenizer, "abcdefgh"), vec!["abcd", "efgh"]);

        assert!(WhitespaceTokenizer::with_max_token_length(0).is_err());
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert!(texts(&tokenizer, "").is_empty());
        assert!(texts(&tokenizer, "   ").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
